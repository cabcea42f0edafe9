//! Paragraph units to styled runs.
//!
//! A paragraph unit is a slice of sibling nodes that render as one visual
//! line. [`Paragraph::build`] works out the paragraph-wide context once (list
//! marker, reserved marker column, alignment) and [`Paragraph::runs`] then
//! walks the unit lazily, yielding one [`Run`] per text leaf or line break.
//!
//! ```
//! use parastyle::dom::parse_html;
//! use parastyle::paragraph::{ListMarker, Paragraph};
//! use parastyle::RenderConfig;
//!
//! let dom = parse_html("<ol><li>first</li><li> second <b>item</b> </li></ol>");
//! let config = RenderConfig::default();
//! let li = dom.find_all_by_tag("li")[1];
//! let unit: Vec<_> = dom.children(li).collect();
//!
//! let paragraph = Paragraph::build(&dom, &unit, &config).unwrap();
//! assert_eq!(paragraph.marker().marker, ListMarker::Ordinal(2));
//!
//! let runs = paragraph.collect_runs().unwrap();
//! let text: Vec<_> = runs.iter().map(|r| r.text()).collect();
//! assert_eq!(text, ["second ", "item", ""]);
//! ```

mod alignment;
mod ancestors;
mod marker;
mod runs;

pub use alignment::{Alignment, AlignmentMode, Placement, resolve_alignment};
pub use ancestors::{nearest_block_ancestor, nearest_list_ancestor, nearest_list_item_ancestor};
pub use marker::{ListMarker, MarkerCell, ordinal_in_list, resolve_marker};
pub use runs::{Run, RunContent, Runs};

use serde::Serialize;

use crate::config::RenderConfig;
use crate::dom::MarkupTree;
use crate::error::Result;
use runs::{TrimEdges, edge_text_leaf};

/// Paragraph-wide context plus lazy access to the runs of one unit.
pub struct Paragraph<'a, T: MarkupTree> {
    tree: &'a T,
    config: &'a RenderConfig,
    nodes: &'a [T::NodeId],
    anchor: Option<T::NodeId>,
    marker: MarkerCell,
    alignment: Alignment,
    trim: TrimEdges<T::NodeId>,
}

impl<'a, T: MarkupTree> Paragraph<'a, T> {
    /// Classify the unit's first node and resolve marker and alignment.
    ///
    /// An empty unit is valid: it has no marker and yields no runs.
    pub fn build(tree: &'a T, nodes: &'a [T::NodeId], config: &'a RenderConfig) -> Result<Self> {
        let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) else {
            return Ok(Self {
                tree,
                config,
                nodes,
                anchor: None,
                marker: resolve_marker(tree, None, config)?,
                alignment: Alignment::default(),
                trim: TrimEdges {
                    start: None,
                    end: None,
                },
            });
        };

        let anchor = match nearest_list_item_ancestor(tree, first, config)? {
            Some(item) => Some(item),
            None => nearest_block_ancestor(tree, first, config)?,
        };
        let marker = resolve_marker(tree, anchor, config)?;
        let alignment = resolve_alignment(tree, anchor, config);
        let trim = TrimEdges {
            start: edge_text_leaf(tree, first, config, false)?,
            end: edge_text_leaf(tree, last, config, true)?,
        };

        log::debug!(
            "paragraph of {} nodes: anchor {:?}, marker {:?}, alignment {:?}",
            nodes.len(),
            anchor,
            marker.marker,
            alignment.mode
        );

        Ok(Self {
            tree,
            config,
            nodes,
            anchor,
            marker,
            alignment,
            trim,
        })
    }

    /// The list item or block the paragraph context was resolved from.
    pub fn anchor(&self) -> Option<T::NodeId> {
        self.anchor
    }

    pub fn marker(&self) -> &MarkerCell {
        &self.marker
    }

    /// The leading marker cell, when the paragraph reserves one.
    pub fn marker_cell(&self) -> Option<&MarkerCell> {
        self.marker.reserve_column.then_some(&self.marker)
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// Start a fresh walk over the unit.
    pub fn runs(&self) -> Runs<'a, T> {
        Runs::new(
            self.tree,
            self.nodes,
            self.config,
            self.trim,
            self.alignment.mode.is_justified(),
        )
    }

    /// Collect every run, stopping at the first structural error.
    pub fn collect_runs(&self) -> Result<Vec<Run>> {
        self.runs().collect()
    }

    /// Resolve everything into an owned, serializable value.
    pub fn render(&self) -> Result<RenderedParagraph> {
        Ok(RenderedParagraph {
            marker: self.marker,
            glyph: self.marker.glyph(),
            alignment: self.alignment.clone(),
            placement: self.alignment.mode.placement(),
            runs: self.collect_runs()?,
        })
    }
}

/// Fully resolved paragraph, detached from the markup tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedParagraph {
    pub marker: MarkerCell,
    pub glyph: String,
    pub alignment: Alignment,
    pub placement: Placement,
    pub runs: Vec<Run>,
}

/// Build and fully render one paragraph unit.
pub fn render_paragraph<T: MarkupTree>(
    tree: &T,
    nodes: &[T::NodeId],
    config: &RenderConfig,
) -> Result<RenderedParagraph> {
    Paragraph::build(tree, nodes, config)?.render()
}
