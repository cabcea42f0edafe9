//! Color normalization.
//!
//! Inline `color` and `background-color` values are tokenized with cssparser
//! and reduced to an opaque RGB [`Color`], written out as `#RRGGBB`. Anything
//! that is not a plain color (keywords like `inherit`, gradients, trailing
//! garbage) normalizes to `None`.

use std::fmt;
use std::str::FromStr;

use cssparser::{CowRcStr, ParseError, Parser, ParserInput, Token};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form handed to layout engines, e.g. `#FF0000`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_color(s).ok_or_else(|| InvalidColor(s.to_string()))
    }
}

/// A color expression that does not reduce to an opaque RGB value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor(pub String);

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a usable color: {:?}", self.0)
    }
}

impl std::error::Error for InvalidColor {}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize a CSS color expression, or `None` when it has no usable color.
///
/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` and named colors.
/// Alpha is dropped, except that a fully transparent color is not usable.
pub fn normalize_color(value: &str) -> Option<Color> {
    let mut input = ParserInput::new(value.trim());
    let mut parser = Parser::new(&mut input);
    let color = parse_color(&mut parser)?;
    if !parser.is_exhausted() {
        return None;
    }
    color
}

/// Parse one color. The outer `Option` is "did it parse", the inner is "is it
/// visible" (`transparent` parses but carries no color).
fn parse_color(input: &mut Parser<'_, '_>) -> Option<Option<Color>> {
    if let Ok(ident) = input.try_parse(|i| i.expect_ident_cloned()) {
        let name = ident.to_ascii_lowercase();
        if name == "transparent" {
            return Some(None);
        }
        return named_color(&name).map(Some);
    }

    if let Ok(hash) = input.try_parse(parse_hash) {
        return parse_hex_color(hash.as_ref());
    }

    if let Ok(color) = input.try_parse(parse_rgb_function) {
        return Some(color);
    }

    None
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "blue" => Color::rgb(0, 0, 255),
        "navy" => Color::rgb(0, 0, 128),
        "yellow" => Color::rgb(255, 255, 0),
        "orange" => Color::rgb(255, 165, 0),
        "cyan" | "aqua" => Color::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
        "purple" => Color::rgb(128, 0, 128),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "teal" => Color::rgb(0, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        _ => return None,
    };
    Some(color)
}

fn parse_hex_color(hex: &str) -> Option<Option<Color>> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let short = |s: &str| channel(s).map(|v| v * 17);
    match hex.len() {
        3 | 4 => {
            let color = Color::rgb(short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?);
            let alpha = if hex.len() == 4 { short(&hex[3..4])? } else { 255 };
            Some((alpha != 0).then_some(color))
        }
        6 | 8 => {
            let color = Color::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?);
            let alpha = if hex.len() == 8 { channel(&hex[6..8])? } else { 255 };
            Some((alpha != 0).then_some(color))
        }
        _ => None,
    }
}

/// cssparser yields `IDHash` for `#ff0000` and `Hash` for `#222299`.
fn parse_hash<'i, 't>(input: &mut Parser<'i, 't>) -> Result<CowRcStr<'i>, ParseError<'i, ()>> {
    let location = input.current_source_location();
    match input.next()? {
        Token::IDHash(hash) | Token::Hash(hash) => Ok(hash.clone()),
        _ => Err(location.new_custom_error(())),
    }
}

fn parse_rgb_function<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Option<Color>, ParseError<'i, ()>> {
    let location = input.current_source_location();
    let name = input.expect_function()?.clone();
    if !name.eq_ignore_ascii_case("rgb") && !name.eq_ignore_ascii_case("rgba") {
        return Err(location.new_custom_error(()));
    }
    input.parse_nested_block(|input| {
        let r = parse_color_component(input)?;
        input.expect_comma()?;
        let g = parse_color_component(input)?;
        input.expect_comma()?;
        let b = parse_color_component(input)?;
        let alpha = if input.try_parse(|i| i.expect_comma()).is_ok() {
            parse_alpha(input)?
        } else {
            1.0
        };
        Ok((alpha > 0.0).then_some(Color::rgb(r, g, b)))
    })
}

fn parse_color_component<'i, 't>(input: &mut Parser<'i, 't>) -> Result<u8, ParseError<'i, ()>> {
    let location = input.current_source_location();
    match input.next()? {
        Token::Number {
            int_value: Some(v), ..
        } => Ok((*v).clamp(0, 255) as u8),
        Token::Percentage { unit_value, .. } => {
            Ok((unit_value * 255.0).round().clamp(0.0, 255.0) as u8)
        }
        _ => Err(location.new_custom_error(())),
    }
}

fn parse_alpha<'i, 't>(input: &mut Parser<'i, 't>) -> Result<f32, ParseError<'i, ()>> {
    let location = input.current_source_location();
    match input.next()? {
        Token::Number { value, .. } => Ok(*value),
        Token::Percentage { unit_value, .. } => Ok(*unit_value),
        _ => Err(location.new_custom_error(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(normalize_color("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(normalize_color("#F00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(normalize_color("#222299"), Some(Color::rgb(0x22, 0x22, 0x99)));
        assert_eq!(normalize_color("#00ff0080"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(normalize_color("#12345"), None);
        assert_eq!(normalize_color("#gggggg"), None);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(normalize_color("red"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(normalize_color("Navy"), Some(Color::rgb(0, 0, 128)));
        assert_eq!(normalize_color("notacolor"), None);
        assert_eq!(normalize_color("inherit"), None);
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(normalize_color("rgb(0, 128, 255)"), Some(Color::rgb(0, 128, 255)));
        assert_eq!(normalize_color("rgba(10, 20, 30, 0.5)"), Some(Color::rgb(10, 20, 30)));
        assert_eq!(normalize_color("rgb(100%, 0%, 0%)"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(normalize_color("rgb(300, -5, 0)"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(normalize_color("hsl(0, 100%, 50%)"), None);
    }

    #[test]
    fn test_unusable_colors() {
        assert_eq!(normalize_color(""), None);
        assert_eq!(normalize_color("transparent"), None);
        assert_eq!(normalize_color("rgba(1, 2, 3, 0)"), None);
        assert_eq!(normalize_color("red blue"), None);
        assert_eq!(normalize_color("#ff0000 !important"), None);
    }

    #[test]
    fn test_hex_output_is_uppercase() {
        assert_eq!(Color::rgb(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Color::rgb(0xab, 0xcd, 0xef).to_string(), "#ABCDEF");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(back, Color::rgb(0, 128, 128));
        assert!(serde_json::from_str::<Color>("\"bogus\"").is_err());
    }
}
