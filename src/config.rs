//! Rendering configuration.
//!
//! One [`RenderConfig`] is built before a rendering pass and then only
//! borrowed. It carries the per-tag style table, the tag vocabularies used to
//! classify ancestors, the alignment class tokens, and the limits.
//!
//! Configuration files are JSON. Every field is optional; missing fields keep
//! their defaults and `styles.tags` entries are layered over the built-in tag
//! table rather than replacing it:
//!
//! ```
//! use parastyle::RenderConfig;
//!
//! let config = RenderConfig::from_json(r##"{
//!     "styles": { "tags": { "p": { "font_family": "Georgia" } } },
//!     "marker_column_width": 30.0
//! }"##).unwrap();
//!
//! assert_eq!(config.styles.get(Some("p")).font_family.as_deref(), Some("Georgia"));
//! assert_eq!(config.styles.get(Some("strong")).font_weight.map(|w| w.0), Some(700));
//! assert_eq!(config.marker_column_width, 30.0);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::paragraph::AlignmentMode;
use crate::style::{Color, FontPolicy, StyleTable, TextStyle};

/// Width of the leading list-marker column, in points.
pub const DEFAULT_MARKER_COLUMN_WIDTH: f32 = 26.0;

/// Longest ancestor chain or nesting the paragraph core will follow.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Immutable settings shared by every paragraph of a rendering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Default style per tag, plus the fallback for unknown tags.
    #[serde(deserialize_with = "layer_over_default_styles")]
    pub styles: StyleTable,
    /// Tags that start a new layout block.
    pub block_tags: Vec<String>,
    pub ordered_list_tags: Vec<String>,
    pub unordered_list_tags: Vec<String>,
    pub list_item_tags: Vec<String>,
    /// Class tokens that set paragraph alignment (rich-text editor classes).
    pub alignment_classes: BTreeMap<String, AlignmentMode>,
    /// Width of the marker cell reserved in front of list content.
    pub marker_column_width: f32,
    pub fonts: FontPolicy,
    /// Deeper ancestor chains or nesting fail with a structural error.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            styles: default_styles(),
            block_tags: strings(&[
                "address",
                "article",
                "aside",
                "blockquote",
                "dd",
                "div",
                "dl",
                "dt",
                "figcaption",
                "figure",
                "footer",
                "h1",
                "h2",
                "h3",
                "h4",
                "h5",
                "h6",
                "header",
                "hr",
                "li",
                "main",
                "nav",
                "ol",
                "p",
                "pre",
                "section",
                "table",
                "tbody",
                "td",
                "tfoot",
                "th",
                "thead",
                "tr",
                "ul",
            ]),
            ordered_list_tags: strings(&["ol"]),
            unordered_list_tags: strings(&["ul"]),
            list_item_tags: strings(&["li"]),
            alignment_classes: [
                ("ql-align-right", AlignmentMode::Right),
                ("ql-align-center", AlignmentMode::Center),
                ("ql-align-justify", AlignmentMode::Justify),
            ]
            .into_iter()
            .map(|(class, mode)| (class.to_string(), mode))
            .collect(),
            marker_column_width: DEFAULT_MARKER_COLUMN_WIDTH,
            fonts: FontPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Parse a JSON configuration, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn is_block(&self, tag: Option<&str>) -> bool {
        contains_tag(&self.block_tags, tag)
    }

    pub fn is_list(&self, tag: Option<&str>) -> bool {
        self.is_ordered_list(tag) || self.is_unordered_list(tag)
    }

    pub fn is_ordered_list(&self, tag: Option<&str>) -> bool {
        contains_tag(&self.ordered_list_tags, tag)
    }

    pub fn is_unordered_list(&self, tag: Option<&str>) -> bool {
        contains_tag(&self.unordered_list_tags, tag)
    }

    pub fn is_list_item(&self, tag: Option<&str>) -> bool {
        contains_tag(&self.list_item_tags, tag)
    }

    /// Alignment mode of a configured class token. Class names are
    /// case-sensitive.
    pub fn alignment_class(&self, class: &str) -> Option<AlignmentMode> {
        self.alignment_classes.get(class).copied()
    }
}

fn contains_tag(tags: &[String], tag: Option<&str>) -> bool {
    tag.is_some_and(|tag| tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn layer_over_default_styles<'de, D>(deserializer: D) -> std::result::Result<StyleTable, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = StyleTable::deserialize(deserializer)?;
    let mut styles = default_styles();
    styles.extend(overrides);
    Ok(styles)
}

/// Built-in tag defaults.
///
/// Block containers carry no style of their own: with ancestor-wins merging,
/// anything set on `p` or `li` would override every inline element inside.
pub fn default_styles() -> StyleTable {
    let bold = || TextStyle::default().bold();
    let italic = || TextStyle::default().italic();
    let mono = || TextStyle::default().font_family("Courier New");

    let mut table = StyleTable::default()
        .with("h1", bold().font_size(24.0))
        .with("h2", bold().font_size(20.0))
        .with("h3", bold().font_size(16.0))
        .with("h4", bold().font_size(14.0))
        .with("h5", bold().font_size(12.0))
        .with("h6", bold().font_size(10.0))
        .with("a", TextStyle::default().font_color(Color::rgb(0, 0, 255)).underline())
        .with("small", TextStyle::default().font_size(9.0))
        .with("mark", TextStyle::default().background_color(Color::rgb(255, 255, 0)))
        .with("sup", TextStyle {
            superscript: Some(true),
            ..TextStyle::default()
        })
        .with("sub", TextStyle {
            subscript: Some(true),
            ..TextStyle::default()
        });

    for tag in ["strong", "b", "th"] {
        table.insert(tag, bold());
    }
    for tag in ["em", "i", "cite", "var", "dfn"] {
        table.insert(tag, italic());
    }
    for tag in ["code", "kbd", "samp", "tt", "pre"] {
        table.insert(tag, mono());
    }
    for tag in ["u", "ins"] {
        table.insert(tag, TextStyle::default().underline());
    }
    for tag in ["s", "strike", "del"] {
        table.insert(tag, TextStyle::default().strikethrough());
    }
    table
}
