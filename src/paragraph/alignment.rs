//! Paragraph alignment.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::dom::MarkupTree;
use crate::style::find_declaration;

/// How the lines of a paragraph are aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Left aligned.
    #[default]
    Default,
    Right,
    Center,
    Justify,
}

/// Horizontal placement of the paragraph container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Left,
    Center,
    Right,
}

impl AlignmentMode {
    /// Normalize an alignment token: a configured class, a CSS `text-align`
    /// keyword, or one of the `ql-align-*` editor classes. Unknown tokens
    /// are left aligned. Matching is case-sensitive: `Right` is unknown.
    pub fn from_token(token: &str, config: &RenderConfig) -> Self {
        if let Some(mode) = config.alignment_class(token) {
            return mode;
        }
        match token.trim() {
            "right" | "ql-align-right" => AlignmentMode::Right,
            "center" | "ql-align-center" => AlignmentMode::Center,
            "justify" | "ql-align-justify" => AlignmentMode::Justify,
            _ => AlignmentMode::Default,
        }
    }

    pub fn placement(self) -> Placement {
        match self {
            AlignmentMode::Right => Placement::Right,
            AlignmentMode::Center => Placement::Center,
            AlignmentMode::Default | AlignmentMode::Justify => Placement::Left,
        }
    }

    pub fn is_justified(self) -> bool {
        self == AlignmentMode::Justify
    }
}

/// Resolved alignment: the token as written in the markup, and its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Alignment {
    pub token: Option<String>,
    pub mode: AlignmentMode,
}

impl Alignment {
    fn from_token(token: &str, config: &RenderConfig) -> Self {
        Self {
            token: Some(token.to_string()),
            mode: AlignmentMode::from_token(token, config),
        }
    }
}

/// Alignment of the paragraph anchored at `anchor`.
///
/// Attributes are scanned once, in document order. A `class` attribute
/// answers with its first configured alignment class; a `style` attribute
/// answers with its first `text-align` value, verbatim. Whichever attribute
/// answers first wins.
pub fn resolve_alignment<T: MarkupTree>(
    tree: &T,
    anchor: Option<T::NodeId>,
    config: &RenderConfig,
) -> Alignment {
    let Some(anchor) = anchor else {
        return Alignment::default();
    };

    for (name, value) in tree.attrs(anchor) {
        if name.eq_ignore_ascii_case("class") {
            if let Some(class) = value
                .split_whitespace()
                .find(|class| config.alignment_class(class).is_some())
            {
                return Alignment::from_token(class, config);
            }
        } else if name.eq_ignore_ascii_case("style")
            && let Some(align) = find_declaration(value, "text-align")
        {
            return Alignment::from_token(align, config);
        }
    }

    Alignment::default()
}
