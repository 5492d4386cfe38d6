use std::fmt;

/// Errors raised while converting Markdown to HTML.
///
/// Every variant aborts the whole conversion; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unbalanced delimiter `{delimiter}` in: {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
    #[error("invalid heading syntax: {0:?}")]
    InvalidHeadingSyntax(String),
    #[error("invalid code block, expected opening and closing fence: {0:?}")]
    InvalidCodeSyntax(String),
    #[error("{kind} span is missing its url")]
    MalformedSpan { kind: SpanLabel },
    #[error("<{tag}> leaf node has an empty value")]
    EmptyLeafValue { tag: String },
    #[error("<{tag}> parent node has no children")]
    EmptyParentChildren { tag: String },
    #[error("parent node is missing its tag")]
    MissingTag,
    #[error("no title found")]
    TitleNotFound,
}

/// Which url-carrying span was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanLabel {
    Link,
    Image,
}

impl fmt::Display for SpanLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanLabel::Link => f.write_str("link"),
            SpanLabel::Image => f.write_str("image"),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
