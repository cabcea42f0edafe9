//! Driving a layout engine from a paragraph.
//!
//! The paragraph core does not lay anything out. A layout engine implements
//! [`LayoutSink`] and [`compose`] feeds it the marker cell, the text block
//! placement and the styled spans, in that order.

use crate::dom::MarkupTree;
use crate::error::Result;
use crate::paragraph::{Paragraph, Placement};
use crate::style::TextStyle;

/// Receiver of one composed paragraph.
pub trait LayoutSink {
    /// Leading cell of a row; `glyph` may be empty. Only called for
    /// paragraphs that reserve the marker column.
    fn marker_cell(&mut self, glyph: &str, width: f32);

    /// Start the text block, placed horizontally as given.
    fn begin_text(&mut self, placement: Placement);

    fn span(&mut self, text: &str, style: &TextStyle);

    /// Justify the text block. Called after each justified span.
    fn justify(&mut self);

    fn end_text(&mut self);
}

/// Feed `paragraph` to `sink`.
///
/// On a structural error the text block is left open; the sink should
/// discard the paragraph.
pub fn compose<T, S>(paragraph: &Paragraph<'_, T>, sink: &mut S) -> Result<()>
where
    T: MarkupTree,
    S: LayoutSink + ?Sized,
{
    if let Some(cell) = paragraph.marker_cell() {
        sink.marker_cell(&cell.glyph(), cell.width);
    }

    sink.begin_text(paragraph.alignment().mode.placement());
    for run in paragraph.runs() {
        let run = run?;
        sink.span(run.text(), &run.style);
        if run.justify {
            sink.justify();
        }
    }
    sink.end_text();
    Ok(())
}

/// Sink that renders paragraphs as plain text lines.
///
/// The marker column is padded to a fixed number of characters; centered and
/// right-placed paragraphs are tagged rather than padded.
#[derive(Debug, Default)]
pub struct PlainText {
    out: String,
    marker: Option<String>,
    placement: Placement,
    justified: bool,
    line: String,
}

/// Characters reserved for the marker column.
const MARKER_CHARS: usize = 4;

impl PlainText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything composed so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl LayoutSink for PlainText {
    fn marker_cell(&mut self, glyph: &str, _width: f32) {
        self.marker = Some(glyph.trim_end().to_string());
    }

    fn begin_text(&mut self, placement: Placement) {
        self.placement = placement;
        self.justified = false;
        self.line.clear();
    }

    fn span(&mut self, text: &str, _style: &TextStyle) {
        self.line.push_str(text);
    }

    fn justify(&mut self) {
        self.justified = true;
    }

    fn end_text(&mut self) {
        let indent = match self.marker.take() {
            Some(glyph) => format!("{glyph:<width$}", width = MARKER_CHARS),
            None => String::new(),
        };
        let tag = match (self.placement, self.justified) {
            (Placement::Center, _) => "[center] ",
            (Placement::Right, _) => "[right] ",
            (Placement::Left, true) => "[justify] ",
            (Placement::Left, false) => "",
        };

        for (i, line) in self.line.split('\n').enumerate() {
            if i == 0 {
                self.out.push_str(&indent);
            } else {
                self.out.extend(std::iter::repeat_n(' ', indent.chars().count()));
            }
            self.out.push_str(tag);
            self.out.push_str(line);
            self.out.push('\n');
        }
        self.line.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::dom::{ArenaDom, NodeId, parse_html};

    #[derive(Debug, PartialEq)]
    enum Call {
        Marker(String, f32),
        Begin(Placement),
        Span(String),
        Justify,
        End,
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl LayoutSink for Recorder {
        fn marker_cell(&mut self, glyph: &str, width: f32) {
            self.0.push(Call::Marker(glyph.to_string(), width));
        }
        fn begin_text(&mut self, placement: Placement) {
            self.0.push(Call::Begin(placement));
        }
        fn span(&mut self, text: &str, _style: &TextStyle) {
            self.0.push(Call::Span(text.to_string()));
        }
        fn justify(&mut self) {
            self.0.push(Call::Justify);
        }
        fn end_text(&mut self) {
            self.0.push(Call::End);
        }
    }

    fn unit(dom: &ArenaDom, tag: &str, index: usize) -> Vec<NodeId> {
        let element = dom.find_all_by_tag(tag)[index];
        dom.children(element).collect()
    }

    fn record(html: &str, tag: &str, index: usize) -> Vec<Call> {
        let dom = parse_html(html);
        let config = RenderConfig::default();
        let nodes = unit(&dom, tag, index);
        let paragraph = Paragraph::build(&dom, &nodes, &config).unwrap();
        let mut sink = Recorder::default();
        compose(&paragraph, &mut sink).unwrap();
        sink.0
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(
            record("<p>Hello <b>world</b></p>", "p", 0),
            vec![
                Call::Begin(Placement::Left),
                Call::Span("Hello ".into()),
                Call::Span("world".into()),
                Call::End,
            ]
        );
    }

    #[test]
    fn test_ordered_item_gets_marker_cell() {
        let calls = record("<ol><li>a</li><li class=\"ql-align-right\">b</li></ol>", "li", 1);
        assert_eq!(
            calls,
            vec![
                Call::Marker("2. ".into(), 26.0),
                Call::Begin(Placement::Right),
                Call::Span("b".into()),
                Call::End,
            ]
        );
    }

    #[test]
    fn test_justify_follows_text_spans() {
        let calls = record(r#"<p style="text-align: justify">a<br>b</p>"#, "p", 0);
        assert_eq!(
            calls,
            vec![
                Call::Begin(Placement::Left),
                Call::Span("a".into()),
                Call::Justify,
                Call::Span("\n".into()),
                Call::Span("b".into()),
                Call::Justify,
                Call::End,
            ]
        );
    }

    #[test]
    fn test_plain_text_sink() {
        let dom = parse_html("<ul><li>first<br>second</li></ul><p style=\"text-align:center\">mid</p>");
        let config = RenderConfig::default();
        let mut sink = PlainText::new();

        for (tag, index) in [("li", 0), ("p", 0)] {
            let nodes = unit(&dom, tag, index);
            let paragraph = Paragraph::build(&dom, &nodes, &config).unwrap();
            compose(&paragraph, &mut sink).unwrap();
        }

        assert_eq!(sink.as_str(), "•   first\n    second\n[center] mid\n");
    }
}
