//! Splitting a document into paragraph units.

use super::{MarkupTree, NodeKind};
use crate::config::RenderConfig;
use crate::error::{Error, Result};

/// Subtrees that never produce visible paragraphs.
const SKIPPED_TAGS: &[&str] = &["head", "script", "style", "template", "title"];

/// Group the tree under `root` into paragraph units.
///
/// Consecutive inline children of a container form one unit. A block child
/// ends the current unit and contributes its own units; so does an inline
/// wrapper that has blocks somewhere inside it (`<body>`, `<a><p>..</p></a>`).
/// Units made only of whitespace text are dropped.
///
/// ```
/// use parastyle::dom::{paragraph_units, parse_html};
/// use parastyle::RenderConfig;
///
/// let dom = parse_html("<p>one <b>two</b></p>\n<ul><li>three</li></ul>");
/// let units = paragraph_units(&dom, dom.document(), &RenderConfig::default()).unwrap();
/// assert_eq!(units.len(), 2);
/// assert_eq!(units[0].len(), 2);
/// ```
pub fn paragraph_units<T: MarkupTree>(
    tree: &T,
    root: T::NodeId,
    config: &RenderConfig,
) -> Result<Vec<Vec<T::NodeId>>> {
    let mut segmenter = Segmenter {
        tree,
        config,
        units: Vec::new(),
    };
    segmenter.container(root, 0)?;
    log::debug!("segmented document into {} paragraph units", segmenter.units.len());
    Ok(segmenter.units)
}

struct Segmenter<'a, T: MarkupTree> {
    tree: &'a T,
    config: &'a RenderConfig,
    units: Vec<Vec<T::NodeId>>,
}

impl<T: MarkupTree> Segmenter<'_, T> {
    fn container(&mut self, node: T::NodeId, depth: usize) -> Result<()> {
        self.check_depth(depth)?;
        let tree = self.tree;
        let mut unit = Vec::new();

        for child in tree.children(node) {
            match tree.kind(child) {
                NodeKind::Other => {}
                NodeKind::Element if self.is_skipped(child) => {}
                NodeKind::Element if self.is_structural(child, depth + 1)? => {
                    self.flush(&mut unit);
                    self.container(child, depth + 1)?;
                }
                NodeKind::Element | NodeKind::Text | NodeKind::Break => unit.push(child),
            }
        }

        self.flush(&mut unit);
        Ok(())
    }

    /// Block elements, and inline elements wrapping a block.
    fn is_structural(&self, node: T::NodeId, depth: usize) -> Result<bool> {
        if self.config.is_block(self.tree.tag(node)) {
            return Ok(true);
        }
        self.check_depth(depth)?;
        for child in self.tree.children(node) {
            if self.tree.kind(child) == NodeKind::Element
                && !self.is_skipped(child)
                && self.is_structural(child, depth + 1)?
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn is_skipped(&self, node: T::NodeId) -> bool {
        self.tree
            .tag(node)
            .is_some_and(|tag| SKIPPED_TAGS.iter().any(|s| s.eq_ignore_ascii_case(tag)))
    }

    fn flush(&mut self, unit: &mut Vec<T::NodeId>) {
        if unit.is_empty() {
            return;
        }
        let blank = unit.iter().all(|&node| {
            self.tree.kind(node) == NodeKind::Text
                && self.tree.text(node).is_none_or(|text| text.trim().is_empty())
        });
        let unit = std::mem::take(unit);
        if !blank {
            self.units.push(unit);
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            log::warn!("document nesting exceeds {} levels", self.config.max_depth);
            return Err(Error::Structural {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ArenaDom, NodeId, parse_html};

    fn units(html: &str) -> (ArenaDom, Vec<Vec<NodeId>>) {
        let dom = parse_html(html);
        let units = paragraph_units(&dom, dom.document(), &RenderConfig::default()).unwrap();
        (dom, units)
    }

    fn texts(dom: &ArenaDom, units: &[Vec<NodeId>]) -> Vec<String> {
        units
            .iter()
            .map(|unit| unit.iter().map(|&n| dom.inner_text(n)).collect())
            .collect()
    }

    #[test]
    fn test_blocks_become_units() {
        let (dom, units) = units("<h1>Title</h1><p>Body <em>text</em>.</p>");
        assert_eq!(texts(&dom, &units), ["Title", "Body text."]);
    }

    #[test]
    fn test_nested_block_splits_unit() {
        let (dom, units) = units("<div>before<p>inside</p>after</div>");
        assert_eq!(texts(&dom, &units), ["before", "inside", "after"]);
    }

    #[test]
    fn test_list_items_are_units() {
        let (dom, units) = units("<ol>\n  <li>one</li>\n  <li>two <b>2</b></li>\n</ol>");
        assert_eq!(texts(&dom, &units), ["one", "two 2"]);
    }

    #[test]
    fn test_inline_wrapper_around_block() {
        let (dom, units) = units(r#"<a href="/"><p>linked</p></a><span>loose</span>"#);
        assert_eq!(texts(&dom, &units), ["linked", "loose"]);
    }

    #[test]
    fn test_skipped_subtrees() {
        let (dom, units) = units(
            "<html><head><title>T</title><style>p{}</style></head>\
             <body><script>var x;</script><p>shown</p></body></html>",
        );
        assert_eq!(texts(&dom, &units), ["shown"]);
    }

    #[test]
    fn test_breaks_keep_a_unit() {
        let (dom, units) = units("<p> <br> </p>");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].len(), 3);
        assert_eq!(dom.kind(units[0][1]), NodeKind::Break);
    }

    #[test]
    fn test_depth_limit() {
        let mut dom = ArenaDom::new();
        let mut parent = dom.document();
        for _ in 0..20 {
            let div = dom.element("div", &[]);
            dom.append(parent, div);
            parent = div;
        }
        let config = RenderConfig {
            max_depth: 5,
            ..RenderConfig::default()
        };

        assert!(matches!(
            paragraph_units(&dom, dom.document(), &config),
            Err(Error::Structural { limit: 5 })
        ));
    }
}
