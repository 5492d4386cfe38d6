use std::sync::OnceLock;

use regex::Regex;

/// The marker that opens a quote or unordered list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    Star,
    Dash,
    Quote,
}

impl LineMarker {
    /// Detects a marker followed by a space at the start of a line,
    /// ignoring leading indentation.
    pub fn of_line(line: &str) -> Option<Self> {
        let mut chars = line.trim_start().chars();
        let marker = match chars.next()? {
            '*' => LineMarker::Star,
            '-' => LineMarker::Dash,
            '>' => LineMarker::Quote,
            _ => return None,
        };
        (chars.next() == Some(' ')).then_some(marker)
    }
}

/// Unordered list items: `* item` or `- item`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// Item text with its marker and surrounding spaces removed.
    pub fn item_text(line: &str) -> &str {
        let trimmed = line.trim_start();
        Self::MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
            .unwrap_or(trimmed)
            .trim_end_matches(' ')
    }
}

/// Ordered list items: `1. item`, numbered consecutively from one.
pub struct OrderedList;

impl OrderedList {
    fn regex() -> &'static Regex {
        static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
        NUMBER_REGEX.get_or_init(|| Regex::new(r"^(\d+)\. ").expect("Invalid ordered list regex"))
    }

    /// The item number of a line, if it starts with `<digits>. `.
    pub fn number(line: &str) -> Option<u64> {
        let caps = Self::regex().captures(line.trim_start())?;
        caps.get(1)?.as_str().parse().ok()
    }

    /// True when every line is numbered 1, 2, 3, … in order.
    pub fn is_consecutive<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        let mut expected = 1u64;
        for line in lines {
            if Self::number(line) != Some(expected) {
                return false;
            }
            expected += 1;
        }
        expected > 1
    }

    /// Item text with the first `<n>. ` marker and surrounding spaces removed.
    pub fn item_text(line: &str) -> &str {
        let trimmed = line.trim_start();
        let start = Self::regex().find(trimmed).map_or(0, |m| m.end());
        trimmed[start..].trim_end_matches(' ')
    }
}
