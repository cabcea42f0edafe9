//! # parastyle
//!
//! Turns HTML paragraphs into styled text runs for a document layout engine.
//!
//! ## Features
//!
//! - Parse HTML with html5ever into an arena DOM, or read any tree through
//!   the [`dom::MarkupTree`] trait
//! - Split a document into paragraph units
//! - Resolve list markers (bullets, ordinals) and paragraph alignment
//! - Cascade per-tag default styles and inline `style` declarations
//! - Feed the result to a layout engine through [`render::LayoutSink`]
//!
//! ## Quick Start
//!
//! ```
//! use parastyle::dom::{paragraph_units, parse_html};
//! use parastyle::{Paragraph, RenderConfig};
//!
//! let dom = parse_html(r#"<ol><li>Buy <span style="color: red">milk</span></li></ol>"#);
//! let config = RenderConfig::default();
//!
//! for unit in paragraph_units(&dom, dom.document(), &config).unwrap() {
//!     let paragraph = Paragraph::build(&dom, &unit, &config).unwrap();
//!     assert_eq!(paragraph.marker().glyph(), "1. ");
//!
//!     let runs = paragraph.collect_runs().unwrap();
//!     assert_eq!(runs[1].text(), "milk");
//!     assert_eq!(runs[1].style.font_color.unwrap().to_hex(), "#FF0000");
//! }
//! ```

pub mod config;
pub mod dom;
mod error;
pub mod paragraph;
pub mod render;
pub mod style;
pub(crate) mod util;

pub use config::RenderConfig;
pub use error::{Error, Result};
pub use paragraph::{
    Alignment, AlignmentMode, ListMarker, MarkerCell, Paragraph, Placement, RenderedParagraph,
    Run, RunContent, render_paragraph,
};
pub use style::{Color, TextStyle};
