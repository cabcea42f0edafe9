//! Run styling: colors, font families, inline declarations and the cascade.
//!
//! This module contains:
//! - [`Color`] and the color normalizer
//! - font family normalization and the strict-font policy
//! - the inline declaration-list parser
//! - [`TextStyle`] and the per-tag [`StyleTable`]
//! - the ancestor-wins cascade

mod cascade;
mod color;
mod declaration;
mod font;
mod text_style;

pub use cascade::{own_style, resolve_style};
pub use color::{Color, InvalidColor, normalize_color};
pub use declaration::{apply_declarations, declarations, find_declaration, with_declarations};
pub use font::{BUILTIN_FONTS, FontPolicy, is_known_font, normalize_font_family};
pub use text_style::{FontWeight, StyleTable, TextStyle};
