pub mod blocks;
pub mod inline;

use blocks::{BlockKind, classify, segment};

/// A segmented block borrowed from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
}

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

/// Segments a document and classifies every block.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    let blocks = segment(markdown)
        .into_iter()
        .map(|text| Block {
            kind: classify(text),
            text,
        })
        .collect();
    ParsedDoc { blocks }
}
