//! # Rendering
//!
//! Composes block parsing, inline tokenizing and node rendering into the two
//! entry points used by the site generator: [`render_document`] and
//! [`extract_title`].

pub mod block;

use log::debug;

use crate::{
    error::{Error, Result},
    parsing::parse_document,
};

pub use block::{render_block, render_classified};

/// Converts a whole Markdown document to an HTML fragment.
///
/// Blocks are rendered in source order and concatenated with no separator.
///
/// # Errors
/// The first error from any block aborts the conversion.
pub fn render_document(markdown: &str) -> Result<String> {
    let doc = parse_document(markdown);
    debug!("rendering {} blocks", doc.blocks.len());

    let mut html = String::new();
    for block in doc.blocks {
        html.push_str(&render_classified(block)?.render()?);
    }
    Ok(html)
}

/// Returns the text of the first `# ` heading line in the document.
///
/// Every leading `#` and space is dropped from that line; trailing text is
/// kept as written.
///
/// # Errors
/// Returns [`Error::TitleNotFound`] when no line starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches(['#', ' ']).to_string())
        .ok_or(Error::TitleNotFound)
}
