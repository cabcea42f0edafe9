//! Markup tree access.
//!
//! The paragraph core never owns markup. It reads nodes through the
//! [`MarkupTree`] trait, addressing them by copyable ids. [`ArenaDom`] is the
//! bundled implementation, filled by html5ever via [`parse_html`].
//!
//! ```
//! use parastyle::dom::{parse_html, MarkupTree, NodeKind};
//!
//! let dom = parse_html("<p>Hello<br>World</p>");
//! let p = dom.find_by_tag("p").unwrap();
//! let kinds: Vec<_> = dom.children(p).map(|c| dom.kind(c)).collect();
//! assert_eq!(kinds, [NodeKind::Text, NodeKind::Break, NodeKind::Text]);
//! ```

mod arena;
mod segment;
mod tree_sink;

pub use arena::{ArenaDom, Attribute, ChildrenIter, Node, NodeData, NodeId};
pub use segment::paragraph_units;
pub use tree_sink::ArenaSink;

use std::fmt::Debug;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// What a markup node is, as far as run emission cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element other than a line break.
    Element,
    /// Text leaf.
    Text,
    /// Explicit line break (`<br>`).
    Break,
    /// Document root, comment, doctype. Never emitted.
    Other,
}

/// Read-only navigation over a markup tree owned elsewhere.
pub trait MarkupTree {
    type NodeId: Copy + Eq + Debug;

    fn kind(&self, node: Self::NodeId) -> NodeKind;

    /// Tag name as written by the parser. Callers compare it lowercase.
    fn tag(&self, node: Self::NodeId) -> Option<&str>;

    /// Attributes in document order.
    fn attrs(&self, node: Self::NodeId) -> impl Iterator<Item = (&str, &str)>;

    fn attr(&self, node: Self::NodeId, name: &str) -> Option<&str> {
        self.attrs(node)
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value)
    }

    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Children in document order.
    fn children(&self, node: Self::NodeId) -> impl Iterator<Item = Self::NodeId>;

    /// Content of a text leaf; `None` for anything else.
    fn text(&self, node: Self::NodeId) -> Option<&str>;
}

/// Parse an HTML document into an [`ArenaDom`].
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse HTML bytes, sniffing the declared charset before decoding.
pub fn parse_html_bytes(html: &[u8]) -> ArenaDom {
    let hint = crate::util::sniff_charset(html);
    let text = crate::util::decode_text(html, hint);
    parse_html(&text)
}
