/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or renderer code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Byte length of the leading run of `>` markers and spaces.
    ///
    /// Covers `> text`, `>> nested`, `> > spaced nested` and a bare `>`.
    pub fn prefix_len(line: &str) -> usize {
        line.len() - line.trim_start_matches([Self::PREFIX, ' ']).len()
    }

    /// Returns the quoted text of a line with prefixes and trailing spaces removed.
    pub fn content(line: &str) -> &str {
        line[Self::prefix_len(line)..].trim_end_matches(' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", 0)]
    #[case("  hello", 2)]
    #[case("> hello", 2)]
    #[case("> > hello", 4)]
    #[case(">> hello", 3)]
    #[case(">", 1)]
    #[case("  >  two spaces", 5)]
    fn prefix_lengths(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(BlockQuote::prefix_len(line), expected);
    }

    #[test]
    fn content_of_indented_line() {
        assert_eq!(BlockQuote::content("        > Second line quote "), "Second line quote");
    }

    #[test]
    fn content_of_nested_line() {
        assert_eq!(BlockQuote::content("> > deep"), "deep");
        assert_eq!(BlockQuote::content(">"), "");
    }
}
