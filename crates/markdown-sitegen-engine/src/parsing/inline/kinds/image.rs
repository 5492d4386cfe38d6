use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::Span;

/// Image inline type: `![label](url)`.
pub struct Image;

impl Image {
    /// Lazy label and url, leftmost match wins.
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
    }

    pub fn span(label: &str, url: &str) -> Span {
        Span::image(label, url)
    }
}
