//! List markers.

use serde::Serialize;

use super::ancestors::nearest_list_ancestor;
use crate::config::RenderConfig;
use crate::dom::MarkupTree;
use crate::error::Result;

/// Leading glyph of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    #[default]
    None,
    Bullet,
    /// 1-based position among the items of an ordered list.
    Ordinal(usize),
}

impl ListMarker {
    /// Text placed in the marker cell.
    pub fn glyph(&self) -> String {
        match self {
            ListMarker::None => String::new(),
            ListMarker::Bullet => "•  ".to_string(),
            ListMarker::Ordinal(n) => format!("{n}. "),
        }
    }
}

/// Marker of a paragraph plus whether layout reserves the marker column.
///
/// The column is reserved whenever the paragraph sits inside a list, even
/// when there is no glyph to put in it, so continuation paragraphs of a list
/// item line up with its text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MarkerCell {
    pub marker: ListMarker,
    pub reserve_column: bool,
    /// Column width in points.
    pub width: f32,
}

impl MarkerCell {
    pub fn glyph(&self) -> String {
        self.marker.glyph()
    }
}

/// 1-based position of `item` among the list-item siblings before it.
pub fn ordinal_in_list<T: MarkupTree>(tree: &T, item: T::NodeId, config: &RenderConfig) -> usize {
    let Some(parent) = tree.parent(item) else {
        return 1;
    };
    let preceding = tree
        .children(parent)
        .take_while(|&sibling| sibling != item)
        .filter(|&sibling| config.is_list_item(tree.tag(sibling)))
        .count();
    preceding + 1
}

/// Resolve the marker of a paragraph anchored at `anchor`.
///
/// `anchor` is the nearest list item of the paragraph's first node or, when
/// there is none, its nearest block. Only a list item inside a list gets a
/// glyph: a bullet in unordered lists, its ordinal in ordered ones.
pub fn resolve_marker<T: MarkupTree>(
    tree: &T,
    anchor: Option<T::NodeId>,
    config: &RenderConfig,
) -> Result<MarkerCell> {
    let width = config.marker_column_width;
    let Some(anchor) = anchor else {
        return Ok(MarkerCell {
            width,
            ..MarkerCell::default()
        });
    };

    let list = nearest_list_ancestor(tree, anchor, config)?;
    let marker = match list {
        Some(list) if config.is_list_item(tree.tag(anchor)) => {
            let tag = tree.tag(list);
            if config.is_ordered_list(tag) {
                ListMarker::Ordinal(ordinal_in_list(tree, anchor, config))
            } else {
                ListMarker::Bullet
            }
        }
        _ => ListMarker::None,
    };

    Ok(MarkerCell {
        marker,
        reserve_column: list.is_some(),
        width,
    })
}
