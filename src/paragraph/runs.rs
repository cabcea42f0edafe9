//! Run emission.

use serde::Serialize;

use crate::config::RenderConfig;
use crate::dom::{MarkupTree, NodeKind};
use crate::error::{Error, Result};
use crate::style::{TextStyle, resolve_style};

/// What a run draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunContent {
    Text(String),
    /// Explicit line break.
    Break,
}

impl RunContent {
    /// Text handed to layout; a break is a single newline.
    pub fn as_str(&self) -> &str {
        match self {
            RunContent::Text(text) => text,
            RunContent::Break => "\n",
        }
    }
}

/// One styled span of a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub content: RunContent,
    pub style: TextStyle,
    /// Lay the paragraph out justified.
    pub justify: bool,
}

impl Run {
    pub fn text(&self) -> &str {
        self.content.as_str()
    }

    pub fn is_break(&self) -> bool {
        self.content == RunContent::Break
    }
}

/// Which text leaves get their outer whitespace trimmed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrimEdges<N> {
    pub start: Option<N>,
    pub end: Option<N>,
}

/// First (or last) emitted leaf under `node`, when that leaf is text.
///
/// A break as the first leaf shields the text after it, the same way a
/// leading `<br>` keeps the markup after it from being trimmed.
pub(crate) fn edge_text_leaf<T: MarkupTree>(
    tree: &T,
    node: T::NodeId,
    config: &RenderConfig,
    from_end: bool,
) -> Result<Option<T::NodeId>> {
    let mut stack = vec![(node, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        if depth > config.max_depth {
            return Err(Error::Structural {
                limit: config.max_depth,
            });
        }
        match tree.kind(id) {
            NodeKind::Text => return Ok(Some(id)),
            NodeKind::Break => return Ok(None),
            NodeKind::Element => {
                let mut children: Vec<_> = tree.children(id).map(|c| (c, depth + 1)).collect();
                if !from_end {
                    children.reverse();
                }
                stack.extend(children);
            }
            NodeKind::Other => {}
        }
    }
    Ok(None)
}

/// Lazy, one-shot sequence of the runs of a paragraph, in document order.
///
/// Each text leaf and each line break yields one run; other elements only
/// contribute their children. Nesting deeper than `max_depth` yields a single
/// structural error and ends the sequence.
pub struct Runs<'a, T: MarkupTree> {
    tree: &'a T,
    config: &'a RenderConfig,
    stack: Vec<(T::NodeId, usize)>,
    trim: TrimEdges<T::NodeId>,
    justify: bool,
    failed: bool,
}

impl<'a, T: MarkupTree> Runs<'a, T> {
    pub(crate) fn new(
        tree: &'a T,
        nodes: &[T::NodeId],
        config: &'a RenderConfig,
        trim: TrimEdges<T::NodeId>,
        justify: bool,
    ) -> Self {
        Self {
            tree,
            config,
            stack: nodes.iter().rev().map(|&node| (node, 0)).collect(),
            trim,
            justify,
            failed: false,
        }
    }

    fn text_of(&self, node: T::NodeId) -> String {
        let text = self.tree.text(node).unwrap_or_default();
        let text = if self.trim.start == Some(node) {
            text.trim_start()
        } else {
            text
        };
        let text = if self.trim.end == Some(node) {
            text.trim_end()
        } else {
            text
        };
        text.to_string()
    }

    fn fail(&mut self) -> Option<Result<Run>> {
        self.failed = true;
        self.stack.clear();
        log::warn!("paragraph nesting exceeds {} levels", self.config.max_depth);
        Some(Err(Error::Structural {
            limit: self.config.max_depth,
        }))
    }
}

impl<T: MarkupTree> Iterator for Runs<'_, T> {
    type Item = Result<Run>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some((node, depth)) = self.stack.pop() {
            if depth > self.config.max_depth {
                return self.fail();
            }
            let (content, justify) = match self.tree.kind(node) {
                NodeKind::Text => (RunContent::Text(self.text_of(node)), self.justify),
                NodeKind::Break => (RunContent::Break, false),
                NodeKind::Element => {
                    let children: Vec<_> = self.tree.children(node).collect();
                    self.stack
                        .extend(children.into_iter().rev().map(|child| (child, depth + 1)));
                    continue;
                }
                NodeKind::Other => continue,
            };
            let style = match resolve_style(self.tree, node, self.config) {
                Ok(style) => style,
                Err(_) => return self.fail(),
            };
            return Some(Ok(Run {
                content,
                style,
                justify,
            }));
        }
        None
    }
}

impl<T: MarkupTree> std::iter::FusedIterator for Runs<'_, T> {}
