//! Inline `style` attribute parsing.
//!
//! This is a declaration-list splitter, not a CSS engine: `;` separates
//! declarations and each declaration must split on `:` into exactly a name and
//! a value. Only `color`, `background-color` and `font-family` change a
//! [`TextStyle`]; everything else is skipped.

use super::color::normalize_color;
use super::font::{FontPolicy, normalize_font_family};
use super::text_style::TextStyle;

/// Iterate the well-formed `(name, value)` pairs of a declaration list, both
/// trimmed. Segments that do not split into exactly two parts are skipped.
pub fn declarations(list: &str) -> impl Iterator<Item = (&str, &str)> {
    list.split(';').filter_map(|segment| {
        let mut parts = segment.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => Some((name.trim(), value.trim())),
            _ => {
                if !segment.trim().is_empty() {
                    log::trace!("skipping malformed declaration {segment:?}");
                }
                None
            }
        }
    })
}

/// Find the value of the first declaration with the given property name.
pub fn find_declaration<'a>(list: &'a str, property: &str) -> Option<&'a str> {
    declarations(list)
        .find(|(name, _)| name.eq_ignore_ascii_case(property))
        .map(|(_, value)| value)
}

/// Apply the recognized declarations of `list` onto `style`.
///
/// Never fails: an unusable color or a rejected font leaves the previous value
/// in place.
pub fn apply_declarations(style: &mut TextStyle, list: &str, fonts: &FontPolicy) {
    for (name, value) in declarations(list) {
        match name.to_ascii_lowercase().as_str() {
            "color" => match normalize_color(value) {
                Some(color) => style.font_color = Some(color),
                None => log::trace!("ignoring unusable color {value:?}"),
            },
            "background-color" => match normalize_color(value) {
                Some(color) => style.background_color = Some(color),
                None => log::trace!("ignoring unusable background-color {value:?}"),
            },
            "font-family" => {
                let family = normalize_font_family(value);
                if fonts.accepts(&family) {
                    style.font_family = Some(family);
                } else {
                    log::trace!("ignoring font-family {value:?}");
                }
            }
            _ => {}
        }
    }
}

/// Convenience wrapper returning a new style.
pub fn with_declarations(base: &TextStyle, list: &str, fonts: &FontPolicy) -> TextStyle {
    let mut style = base.clone();
    apply_declarations(&mut style, list, fonts);
    style
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::style::Color;

    fn lenient() -> FontPolicy {
        FontPolicy::default()
    }

    #[test]
    fn test_split_pairs() {
        let pairs: Vec<_> = declarations(" color : red ;; font-family: 'Arial', serif ;").collect();
        assert_eq!(pairs, vec![("color", "red"), ("font-family", "'Arial', serif")]);
    }

    #[test]
    fn test_segments_with_extra_colons_are_skipped() {
        let pairs: Vec<_> =
            declarations("background: url(http://x/y.png); color: blue").collect();
        assert_eq!(pairs, vec![("color", "blue")]);
    }

    #[test]
    fn test_full_example() {
        let style = with_declarations(
            &TextStyle::default(),
            "color: #fff; font-family: 'Arial', sans-serif",
            &lenient(),
        );
        assert_eq!(style.font_color, Some(Color::WHITE));
        assert_eq!(style.font_family.as_deref(), Some("Arial"));
        assert_eq!(style.background_color, None);
    }

    #[test]
    fn test_missing_colon_segment_is_ignored() {
        let style = with_declarations(
            &TextStyle::default(),
            "color red; font-family: Arial",
            &lenient(),
        );
        assert_eq!(style.font_color, None);
        assert_eq!(style.font_family.as_deref(), Some("Arial"));
    }

    #[test]
    fn test_bad_color_keeps_previous() {
        let base = TextStyle::default()
            .font_color(Color::BLACK)
            .background_color(Color::WHITE);
        let style = with_declarations(
            &base,
            "color: nonsense; background-color: transparent",
            &lenient(),
        );
        assert_eq!(style.font_color, Some(Color::BLACK));
        assert_eq!(style.background_color, Some(Color::WHITE));
    }

    #[test]
    fn test_background_color() {
        let style = with_declarations(
            &TextStyle::default(),
            "background-color: rgb(255, 255, 0)",
            &lenient(),
        );
        assert_eq!(style.background_color, Some(Color::rgb(255, 255, 0)));
    }

    #[test]
    fn test_unrecognized_properties_are_ignored() {
        let style = with_declarations(
            &TextStyle::default(),
            "font-size: 40px; text-align: center; margin: 0",
            &lenient(),
        );
        assert!(style.is_empty());
    }

    #[test]
    fn test_strict_fonts() {
        let strict = FontPolicy::strict();
        let base = TextStyle::default().font_family("Georgia");

        let rejected = with_declarations(&base, "font-family: 'Comic Neue', cursive", &strict);
        assert_eq!(rejected.font_family.as_deref(), Some("Georgia"));

        let accepted = with_declarations(&base, "font-family: \"courier new\"", &strict);
        assert_eq!(accepted.font_family.as_deref(), Some("courier new"));

        let lenient = with_declarations(&base, "font-family: 'Comic Neue', cursive", &lenient());
        assert_eq!(lenient.font_family.as_deref(), Some("Comic Neue"));
    }

    #[test]
    fn test_find_declaration() {
        assert_eq!(
            find_declaration("color: red; Text-Align: Center ", "text-align"),
            Some("Center")
        );
        assert_eq!(find_declaration("color: red", "text-align"), None);
    }

    proptest! {
        #[test]
        fn prop_applying_twice_equals_applying_once(
            list in prop::collection::vec(
                prop_oneof![
                    Just("color: #ff0000".to_string()),
                    Just("color: bogus".to_string()),
                    Just("background-color: navy".to_string()),
                    Just("font-family: 'Tahoma', sans-serif".to_string()),
                    Just("text-align: right".to_string()),
                    "[a-z: ;#'\"]{0,16}",
                ],
                0..6,
            ).prop_map(|parts| parts.join(";")),
        ) {
            let once = with_declarations(&TextStyle::default(), &list, &FontPolicy::default());
            let twice = with_declarations(&once, &list, &FontPolicy::default());
            prop_assert_eq!(once, twice);
        }
    }
}
