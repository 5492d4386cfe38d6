use crate::{
    error::{Error, Result},
    html::{Node, spans_to_nodes},
    parsing::{
        Block,
        blocks::{
            BlockKind, classify,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        },
        inline::tokenize,
    },
};

/// Classifies a block and converts it into its node subtree.
///
/// # Errors
/// Propagates inline tokenizer and span conversion errors, plus
/// [`Error::InvalidHeadingSyntax`] and [`Error::InvalidCodeSyntax`].
pub fn render_block(block: &str) -> Result<Node> {
    render_classified(Block {
        kind: classify(block),
        text: block,
    })
}

/// Converts an already classified block into its node subtree.
pub fn render_classified(block: Block<'_>) -> Result<Node> {
    let text = block.text;
    match block.kind {
        BlockKind::Heading => heading(text),
        BlockKind::Code => code(text),
        BlockKind::Quote => {
            let body = text.lines().map(BlockQuote::content).collect::<Vec<_>>().join("\n");
            inline_parent("blockquote", &body)
        }
        BlockKind::UnorderedList => list("ul", text.lines().map(UnorderedList::item_text)),
        BlockKind::OrderedList => list("ol", text.lines().map(OrderedList::item_text)),
        BlockKind::Paragraph => inline_parent("p", text),
    }
}

fn heading(text: &str) -> Result<Node> {
    let (level, content) =
        Heading::split(text).ok_or_else(|| Error::InvalidHeadingSyntax(text.to_string()))?;
    inline_parent(format!("h{level}"), content)
}

fn code(text: &str) -> Result<Node> {
    let body = CodeFence::body(text).ok_or_else(|| Error::InvalidCodeSyntax(text.to_string()))?;
    let code = Node::parent("code", spans_to_nodes(tokenize(&body)?)?);
    Ok(Node::parent("pre", vec![code]))
}

fn list<'a>(tag: &str, items: impl Iterator<Item = &'a str>) -> Result<Node> {
    let children = items
        .map(|item| inline_parent("li", item))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent(tag, children))
}

fn inline_parent(tag: impl Into<String>, text: &str) -> Result<Node> {
    Ok(Node::parent(tag, spans_to_nodes(tokenize(text)?)?))
}
