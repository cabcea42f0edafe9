//! Error types for parastyle operations.

use thiserror::Error;

/// Errors that can occur while building paragraphs or loading configuration.
///
/// Malformed markup and malformed inline styles never produce an error; they
/// degrade to default styling. Only runaway nesting is reported.
#[derive(Error, Debug)]
pub enum Error {
    #[error("markup nesting exceeds the depth limit of {limit}")]
    Structural { limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("cannot serialize output: {0}")]
    Output(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
