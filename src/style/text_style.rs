//! Text styles and the per-tag default table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Font weight (100-900).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

/// Style of one run, as far as the layout engine cares.
///
/// Every field is optional. An unset field means "not specified here" and is
/// filled in by whatever style this one is merged with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superscript: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscript: Option<bool>,
    /// Extra spacing between letters, in em.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
}

impl TextStyle {
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.font_weight(FontWeight::BOLD)
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = Some(true);
        self
    }

    /// Overwrite every field that `over` sets; keep the rest.
    pub fn apply(&mut self, over: &TextStyle) {
        fn set<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }

        set(&mut self.font_family, &over.font_family);
        set(&mut self.font_color, &over.font_color);
        set(&mut self.background_color, &over.background_color);
        set(&mut self.font_size, &over.font_size);
        set(&mut self.font_weight, &over.font_weight);
        set(&mut self.italic, &over.italic);
        set(&mut self.underline, &over.underline);
        set(&mut self.strikethrough, &over.strikethrough);
        set(&mut self.superscript, &over.superscript);
        set(&mut self.subscript, &over.subscript);
        set(&mut self.letter_spacing, &over.letter_spacing);
    }

    /// `self` with `over` merged on top.
    pub fn merged(&self, over: &TextStyle) -> TextStyle {
        let mut style = self.clone();
        style.apply(over);
        style
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == TextStyle::default()
    }
}

/// Default style per tag name.
///
/// Keys are stored lowercase and lookups ignore case. Unknown tags, and nodes
/// without a tag, get the fallback style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleTable {
    #[serde(deserialize_with = "deserialize_tags")]
    tags: HashMap<String, TextStyle>,
    fallback: TextStyle,
}

impl StyleTable {
    pub fn new(fallback: TextStyle) -> Self {
        Self {
            tags: HashMap::new(),
            fallback,
        }
    }

    /// Set the default style of a tag, replacing any previous entry.
    pub fn insert(&mut self, tag: &str, style: TextStyle) {
        self.tags.insert(tag.to_ascii_lowercase(), style);
    }

    pub fn with(mut self, tag: &str, style: TextStyle) -> Self {
        self.insert(tag, style);
        self
    }

    /// Default style for a tag, or the fallback.
    pub fn get(&self, tag: Option<&str>) -> &TextStyle {
        tag.and_then(|tag| self.lookup(tag)).unwrap_or(&self.fallback)
    }

    /// Entry for a tag, without the fallback.
    pub fn lookup(&self, tag: &str) -> Option<&TextStyle> {
        if tag.bytes().any(|b| b.is_ascii_uppercase()) {
            self.tags.get(&tag.to_ascii_lowercase())
        } else {
            self.tags.get(tag)
        }
    }

    pub fn fallback(&self) -> &TextStyle {
        &self.fallback
    }

    pub fn set_fallback(&mut self, fallback: TextStyle) {
        self.fallback = fallback;
    }

    /// Merge another table into this one. Entries of `other` replace whole
    /// tag entries here; a non-empty fallback in `other` replaces ours.
    pub fn extend(&mut self, other: StyleTable) {
        self.tags.extend(other.tags);
        if !other.fallback.is_empty() {
            self.fallback = other.fallback;
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<HashMap<String, TextStyle>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = HashMap::<String, TextStyle>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(tag, style)| (tag.to_ascii_lowercase(), style))
        .collect())
}
