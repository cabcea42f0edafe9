//! Font family normalization.

use serde::{Deserialize, Serialize};

/// Font families the layout side ships with. Only consulted in strict mode.
pub const BUILTIN_FONTS: &[&str] = &[
    "Arial",
    "Brush Script MT",
    "Courier New",
    "Montserrat",
    "Helvetica",
    "Tahoma",
    "Trebuchet MS",
    "Times New Roman",
    "Verdana",
    "Georgia",
];

/// Reduce a `font-family` value to its first candidate, unquoted.
///
/// `'Brush Script MT', cursive` becomes `Brush Script MT`.
pub fn normalize_font_family(value: &str) -> String {
    let first = value.split(',').next().unwrap_or_default();
    first.replace(['\'', '"'], "").trim().to_string()
}

/// Whether a normalized family is one of the built-in fonts or a configured
/// extra. Comparison ignores ASCII case.
pub fn is_known_font(family: &str, extra: &[String]) -> bool {
    BUILTIN_FONTS
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .any(|known| known.eq_ignore_ascii_case(family))
}

/// Which normalized `font-family` overrides are allowed through.
///
/// Lenient by default: any non-empty family is applied. In strict mode only
/// [`BUILTIN_FONTS`] and the configured extras are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontPolicy {
    pub strict: bool,
    pub extra_fonts: Vec<String>,
}

impl FontPolicy {
    pub fn strict() -> Self {
        Self {
            strict: true,
            extra_fonts: Vec::new(),
        }
    }

    pub fn accepts(&self, family: &str) -> bool {
        !family.is_empty() && (!self.strict || is_known_font(family, &self.extra_fonts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate_unquoted() {
        assert_eq!(normalize_font_family("'Brush Script MT', cursive"), "Brush Script MT");
        assert_eq!(normalize_font_family("\"Arial\""), "Arial");
        assert_eq!(normalize_font_family("Georgia"), "Georgia");
        assert_eq!(normalize_font_family("  Verdana , sans-serif"), "Verdana");
    }

    #[test]
    fn test_degenerate_values() {
        assert_eq!(normalize_font_family(""), "");
        assert_eq!(normalize_font_family(", serif"), "");
        assert_eq!(normalize_font_family("''"), "");
    }

    #[test]
    fn test_known_fonts() {
        assert!(is_known_font("arial", &[]));
        assert!(is_known_font("Times New Roman", &[]));
        assert!(!is_known_font("Comic Sans MS", &[]));
        assert!(is_known_font("comic sans ms", &["Comic Sans MS".to_string()]));
    }

    #[test]
    fn test_policy() {
        let lenient = FontPolicy::default();
        assert!(lenient.accepts("Whatever Sans"));
        assert!(!lenient.accepts(""));

        let strict = FontPolicy::strict();
        assert!(strict.accepts("Tahoma"));
        assert!(!strict.accepts("Whatever Sans"));
    }
}
