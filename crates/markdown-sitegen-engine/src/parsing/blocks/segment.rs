/// The separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into its blocks.
///
/// Each piece between blank lines is stripped of surrounding spaces and
/// newlines; pieces that end up empty are dropped. Order is preserved.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(|block| block.trim_matches([' ', '\n']))
        .filter(|block| !block.is_empty())
        .collect()
}
