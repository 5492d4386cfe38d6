use crate::{
    error::{Error, Result, SpanLabel},
    parsing::inline::{Span, SpanKind},
};

use super::node::Node;

/// Converts one inline span into its leaf node.
///
/// | kind   | tag    | attrs              |
/// |--------|--------|--------------------|
/// | Plain  | none   |                    |
/// | Bold   | `b`    |                    |
/// | Italic | `i`    |                    |
/// | Code   | `code` |                    |
/// | Link   | `a`    | `href`             |
/// | Image  | `img`  | `src`, then `alt`  |
///
/// An empty bold, italic or code span (adjacent markers such as `****`)
/// becomes an empty untagged leaf and renders as nothing.
///
/// # Errors
/// Returns [`Error::MalformedSpan`] for a link or image with an empty url.
pub fn span_to_node(span: Span) -> Result<Node> {
    let Span { kind, text } = span;
    let node = match kind {
        SpanKind::Plain => Node::text(text),
        SpanKind::Bold => formatted("b", text),
        SpanKind::Italic => formatted("i", text),
        SpanKind::Code => formatted("code", text),
        SpanKind::Link { url } => {
            if url.is_empty() {
                return Err(Error::MalformedSpan {
                    kind: SpanLabel::Link,
                });
            }
            Node::leaf("a", text).with_attr("href", url)
        }
        SpanKind::Image { url } => {
            if url.is_empty() {
                return Err(Error::MalformedSpan {
                    kind: SpanLabel::Image,
                });
            }
            Node::leaf("img", text.clone())
                .with_attr("src", url)
                .with_attr("alt", text)
        }
    };
    Ok(node)
}

fn formatted(tag: &str, text: String) -> Node {
    if text.is_empty() {
        Node::text(text)
    } else {
        Node::leaf(tag, text)
    }
}

pub fn spans_to_nodes(spans: Vec<Span>) -> Result<Vec<Node>> {
    spans.into_iter().map(span_to_node).collect()
}
