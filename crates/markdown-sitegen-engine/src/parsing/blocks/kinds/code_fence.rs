use std::sync::OnceLock;

use regex::Regex;

/// Fenced code block: triple backticks open and close the block.
pub struct CodeFence;

impl CodeFence {
    /// True when the block opens with a backtick fence and contains a later one.
    ///
    /// The body is matched greedily and may span lines. Only the start is
    /// anchored, so text after the last fence doesn't stop the match.
    pub fn encloses(block: &str) -> bool {
        static FENCED_REGEX: OnceLock<Regex> = OnceLock::new();
        FENCED_REGEX
            .get_or_init(|| Regex::new(r"(?s)\A```.*```").expect("Invalid code fence regex"))
            .is_match(block)
    }

    /// Lines between the opening and closing fence, each trimmed of spaces.
    ///
    /// Returns `None` when the block doesn't have both fence lines.
    pub fn body(block: &str) -> Option<String> {
        let lines: Vec<&str> = block.lines().collect();
        if lines.len() < 2 {
            return None;
        }
        let interior = &lines[1..lines.len() - 1];
        Some(
            interior
                .iter()
                .map(|line| line.trim_matches(' '))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}
