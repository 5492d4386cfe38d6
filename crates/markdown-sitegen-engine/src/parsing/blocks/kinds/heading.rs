use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    fn regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6}) (.*)$").expect("Invalid heading regex"))
    }

    pub fn matches(line: &str) -> bool {
        Self::regex().is_match(line)
    }

    /// Splits a heading line into its level and text.
    pub fn split(line: &str) -> Option<(usize, &str)> {
        let caps = Self::regex().captures(line)?;
        let level = caps.get(1)?.as_str().len();
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some((level, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_levels() {
        assert_eq!(Heading::split("# Heading 1"), Some((1, "Heading 1")));
        assert_eq!(Heading::split("###### Six"), Some((6, "Six")));
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert!(!Heading::matches("####### Seven"));
    }

    #[test]
    fn hash_needs_space() {
        assert!(!Heading::matches("#tag"));
        assert_eq!(Heading::split("#tag"), None);
    }
}
