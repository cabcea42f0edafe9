//! Ancestor classification.
//!
//! All three searches start at the node itself and climb parent links. A walk
//! that runs off the root finds nothing; a walk longer than
//! `RenderConfig::max_depth` is a structural error.

use crate::config::RenderConfig;
use crate::dom::MarkupTree;
use crate::error::{Error, Result};

enum Probe {
    Match,
    Stop,
    Climb,
}

fn climb<T, F>(tree: &T, start: T::NodeId, max_depth: usize, mut probe: F) -> Result<Option<T::NodeId>>
where
    T: MarkupTree,
    F: FnMut(T::NodeId) -> Probe,
{
    let mut current = Some(start);
    let mut depth = 0;
    while let Some(node) = current {
        match probe(node) {
            Probe::Match => return Ok(Some(node)),
            Probe::Stop => return Ok(None),
            Probe::Climb => {}
        }
        depth += 1;
        if depth > max_depth {
            log::warn!("ancestor walk from {start:?} exceeds {max_depth} levels");
            return Err(Error::Structural { limit: max_depth });
        }
        current = tree.parent(node);
    }
    Ok(None)
}

/// The node itself if it is block-level, else its nearest block-level ancestor.
pub fn nearest_block_ancestor<T: MarkupTree>(
    tree: &T,
    node: T::NodeId,
    config: &RenderConfig,
) -> Result<Option<T::NodeId>> {
    climb(tree, node, config.max_depth, |id| {
        if config.is_block(tree.tag(id)) {
            Probe::Match
        } else {
            Probe::Climb
        }
    })
}

/// The list item `node` belongs to. Reaching a list first means the node is
/// not inside an item of that list, so the search stops there.
pub fn nearest_list_item_ancestor<T: MarkupTree>(
    tree: &T,
    node: T::NodeId,
    config: &RenderConfig,
) -> Result<Option<T::NodeId>> {
    climb(tree, node, config.max_depth, |id| {
        let tag = tree.tag(id);
        if config.is_list(tag) {
            Probe::Stop
        } else if config.is_list_item(tag) {
            Probe::Match
        } else {
            Probe::Climb
        }
    })
}

/// The nearest ordered or unordered list, crossing list items freely.
pub fn nearest_list_ancestor<T: MarkupTree>(
    tree: &T,
    node: T::NodeId,
    config: &RenderConfig,
) -> Result<Option<T::NodeId>> {
    climb(tree, node, config.max_depth, |id| {
        if config.is_list(tree.tag(id)) {
            Probe::Match
        } else {
            Probe::Climb
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ArenaDom, MarkupTree, NodeId, parse_html};

    fn text_in(dom: &ArenaDom, tag: &str) -> NodeId {
        let element = dom.find_by_tag(tag).expect("element");
        dom.children(element).next().expect("child")
    }

    #[test]
    fn test_block_ancestor() {
        let config = RenderConfig::default();
        let dom = parse_html("<div><p><span><b>x</b></span></p></div>");
        let text = text_in(&dom, "b");
        let p = dom.find_by_tag("p").unwrap();

        assert_eq!(nearest_block_ancestor(&dom, text, &config).unwrap(), Some(p));
        assert_eq!(nearest_block_ancestor(&dom, p, &config).unwrap(), Some(p));
    }

    #[test]
    fn test_no_block_ancestor() {
        let config = RenderConfig::default();
        let dom = parse_html("<span>loose</span>");
        let text = text_in(&dom, "span");

        assert_eq!(nearest_block_ancestor(&dom, text, &config).unwrap(), None);
        assert_eq!(nearest_list_item_ancestor(&dom, text, &config).unwrap(), None);
        assert_eq!(nearest_list_ancestor(&dom, text, &config).unwrap(), None);
    }

    #[test]
    fn test_list_item_ancestor() {
        let config = RenderConfig::default();
        let dom = parse_html("<ul><li><p><em>item</em></p></li></ul>");
        let text = text_in(&dom, "em");
        let li = dom.find_by_tag("li").unwrap();
        let ul = dom.find_by_tag("ul").unwrap();

        assert_eq!(nearest_list_item_ancestor(&dom, text, &config).unwrap(), Some(li));
        assert_eq!(nearest_list_ancestor(&dom, text, &config).unwrap(), Some(ul));
    }

    #[test]
    fn test_list_item_search_stops_at_list() {
        let config = RenderConfig::default();
        let dom = parse_html("<ol><li>outer<ul><span>inner</span></ul></li></ol>");
        let span_text = text_in(&dom, "span");
        let ul = dom.find_by_tag("ul").unwrap();

        // The span sits directly in the nested list, not in an item of it; the
        // outer li two levels up does not count.
        assert_eq!(nearest_list_item_ancestor(&dom, span_text, &config).unwrap(), None);
        assert_eq!(nearest_list_ancestor(&dom, span_text, &config).unwrap(), Some(ul));
    }

    #[test]
    fn test_nested_list_items_resolve_to_the_inner_item() {
        let config = RenderConfig::default();
        let dom = parse_html("<ol><li>a<ul><li><i>b</i></li></ul></li></ol>");
        let text = text_in(&dom, "i");
        let inner_li = MarkupTree::parent(&dom, dom.find_by_tag("i").unwrap()).unwrap();

        assert_eq!(nearest_list_item_ancestor(&dom, text, &config).unwrap(), Some(inner_li));
        assert_eq!(
            nearest_list_ancestor(&dom, text, &config).unwrap(),
            dom.find_by_tag("ul")
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut dom = ArenaDom::new();
        let mut parent = dom.document();
        for _ in 0..50 {
            let span = dom.element("span", &[]);
            dom.append(parent, span);
            parent = span;
        }
        let config = RenderConfig {
            max_depth: 8,
            ..RenderConfig::default()
        };

        assert!(matches!(
            nearest_block_ancestor(&dom, parent, &config),
            Err(Error::Structural { limit: 8 })
        ));
        assert!(matches!(
            nearest_list_ancestor(&dom, parent, &config),
            Err(Error::Structural { .. })
        ));
    }
}
