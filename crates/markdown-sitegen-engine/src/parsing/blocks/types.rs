/// The kind of a block, decided by [`classify`](super::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A single `#`…`######` line.
    Heading,
    /// A block wrapped in triple-backtick fences.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with the same `* ` or `- ` marker.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, … without gaps.
    OrderedList,
    /// Anything else (default when no other block pattern matches).
    Paragraph,
}
