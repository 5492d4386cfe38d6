use log::trace;

use super::{
    kinds::{CodeFence, Heading, LineMarker, OrderedList},
    types::BlockKind,
};

/// Classifies a segmented block.
///
/// # Precedence
/// 1. Single-line heading
/// 2. Quote / unordered list marker scan. A block where only some lines
///    carry a marker, or lines disagree on the marker, is a paragraph and no
///    further checks run. A listed or quoted block that contains backticks is
///    therefore never a code block.
/// 3. Fenced code
/// 4. Consecutively numbered ordered list
/// 5. Paragraph
pub fn classify(block: &str) -> BlockKind {
    let kind = classify_lines(block);
    trace!("classified block as {kind:?}: {block:?}");
    kind
}

fn classify_lines(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();

    if let [line] = lines.as_slice()
        && Heading::matches(line)
    {
        return BlockKind::Heading;
    }

    let markers: Vec<Option<LineMarker>> = lines.iter().map(|l| LineMarker::of_line(l)).collect();
    if markers.iter().any(Option::is_some) {
        return match uniform_marker(&markers) {
            Some(LineMarker::Quote) => BlockKind::Quote,
            Some(LineMarker::Star | LineMarker::Dash) => BlockKind::UnorderedList,
            None => BlockKind::Paragraph,
        };
    }

    if CodeFence::encloses(block) {
        return BlockKind::Code;
    }

    if OrderedList::is_consecutive(lines.iter().copied()) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// The marker shared by every line, if there is one.
fn uniform_marker(markers: &[Option<LineMarker>]) -> Option<LineMarker> {
    let first = (*markers.first()?)?;
    markers
        .iter()
        .all(|m| *m == Some(first))
        .then_some(first)
}
