//! Style cascade for a single run.
//!
//! A node's own style is its tag default from the [`StyleTable`] with its
//! inline `style` declarations on top. The effective style then folds in the
//! declared style of every ancestor up to the root, and the ancestor wins each
//! conflict: a `<p style="color: blue">` around `<span style="color: red">`
//! renders blue. This is not CSS inheritance.
//!
//! The table fallback is only the base of the node being resolved. An
//! ancestor with an unknown tag, or no tag, contributes its inline
//! declarations and nothing else.

use super::declaration::apply_declarations;
use super::text_style::TextStyle;
use crate::config::RenderConfig;
use crate::dom::MarkupTree;
use crate::error::{Error, Result};

/// Style a node contributes by itself: tag default plus inline overrides.
pub fn own_style<T: MarkupTree>(tree: &T, node: T::NodeId, config: &RenderConfig) -> TextStyle {
    let mut style = config.styles.get(tree.tag(node)).clone();
    if let Some(inline) = tree.attr(node, "style") {
        apply_declarations(&mut style, inline, &config.fonts);
    }
    style
}

/// Style an ancestor contributes: its table entry, if any, plus inline overrides.
fn declared_style<T: MarkupTree>(tree: &T, node: T::NodeId, config: &RenderConfig) -> TextStyle {
    let mut style = tree
        .tag(node)
        .and_then(|tag| config.styles.lookup(tag))
        .cloned()
        .unwrap_or_default();
    if let Some(inline) = tree.attr(node, "style") {
        apply_declarations(&mut style, inline, &config.fonts);
    }
    style
}

/// Effective style of `node`, with ancestors overriding descendants.
///
/// Fails only when the ancestor chain is longer than `config.max_depth`.
pub fn resolve_style<T: MarkupTree>(
    tree: &T,
    node: T::NodeId,
    config: &RenderConfig,
) -> Result<TextStyle> {
    let mut style = own_style(tree, node, config);
    let mut current = tree.parent(node);
    let mut depth = 0;

    while let Some(ancestor) = current {
        depth += 1;
        if depth > config.max_depth {
            log::warn!("ancestor chain of {node:?} exceeds {} levels", config.max_depth);
            return Err(Error::Structural {
                limit: config.max_depth,
            });
        }
        style.apply(&declared_style(tree, ancestor, config));
        current = tree.parent(ancestor);
    }

    Ok(style)
}
