use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::Span;

/// Link inline type: `[label](url)`.
///
/// The pattern is a textual subset of the image pattern, so image spans must
/// be extracted first.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }

    pub fn span(label: &str, url: &str) -> Span {
        Span::link(label, url)
    }
}
