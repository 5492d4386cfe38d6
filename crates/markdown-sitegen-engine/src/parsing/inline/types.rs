/// The kind of an inline span.
///
/// Link and image spans carry their url, so a url exists exactly when the
/// kind can use one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text that isn't part of any special construct.
    Plain,
    /// Text between `**` delimiters.
    Bold,
    /// Text between `*` delimiters.
    Italic,
    /// Text between backtick delimiters.
    Code,
    /// `[label](url)`.
    Link { url: String },
    /// `![label](url)`.
    Image { url: String },
}

/// One typed unit of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    /// The visible text (label for links, alt text for images).
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(SpanKind::Link { url: url.into() }, text)
    }

    pub fn image(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(SpanKind::Image { url: url.into() }, text)
    }

    /// Returns true while the span is still open to further inline passes.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }
}
