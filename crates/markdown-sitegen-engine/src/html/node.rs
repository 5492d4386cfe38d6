use crate::error::{Error, Result};

/// Insertion-ordered element attributes.
pub type Attrs = Vec<(String, String)>;

/// A renderable markup element.
///
/// Parents own their children outright; trees are built bottom-up and never
/// shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a text value and no children.
    Leaf(LeafNode),
    /// An element wrapping an ordered list of child nodes.
    Parent(ParentNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `None` emits the value verbatim with no wrapping element.
    pub tag: Option<String>,
    pub value: String,
    pub attrs: Attrs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<Node>,
    pub attrs: Attrs,
}

impl Node {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attrs::new(),
        })
    }

    /// An untagged leaf rendered as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            tag: None,
            value: value.into(),
            attrs: Attrs::new(),
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Parent(ParentNode {
            tag: tag.into(),
            children,
            attrs: Attrs::new(),
        })
    }

    /// Appends an attribute, keeping insertion order.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let attrs = match &mut self {
            Node::Leaf(leaf) => &mut leaf.attrs,
            Node::Parent(parent) => &mut parent.attrs,
        };
        attrs.push((key.into(), value.into()));
        self
    }

    /// Renders this node and all of its descendants to a markup string.
    ///
    /// # Errors
    /// Returns [`Error::EmptyLeafValue`], [`Error::EmptyParentChildren`] or
    /// [`Error::MissingTag`] on the first structural violation found.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf(leaf) => leaf.write_html(out),
            Node::Parent(parent) => parent.write_html(out),
        }
    }
}

impl LeafNode {
    fn write_html(&self, out: &mut String) -> Result<()> {
        let tag = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                out.push_str(&self.value);
                return Ok(());
            }
        };
        if self.value.is_empty() {
            return Err(Error::EmptyLeafValue {
                tag: tag.to_string(),
            });
        }

        open_tag(out, tag, &self.attrs);
        out.push_str(&self.value);
        close_tag(out, tag);
        Ok(())
    }
}

impl ParentNode {
    fn write_html(&self, out: &mut String) -> Result<()> {
        if self.tag.is_empty() {
            return Err(Error::MissingTag);
        }
        if self.children.is_empty() {
            return Err(Error::EmptyParentChildren {
                tag: self.tag.clone(),
            });
        }

        open_tag(out, &self.tag, &self.attrs);
        for child in &self.children {
            child.write_html(out)?;
        }
        close_tag(out, &self.tag);
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attrs: &Attrs) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn google_link(value: &str) -> Node {
        Node::leaf("a", value)
            .with_attr("href", "https://www.google.com")
            .with_attr("target", "_blank")
    }

    #[test]
    fn leaf_with_attrs() {
        let html = google_link("google.com").render().unwrap();
        assert_eq!(
            html,
            r#"<a href="https://www.google.com" target="_blank">google.com</a>"#
        );
    }

    #[test]
    fn untagged_leaf_is_verbatim() {
        let node = Node::text("google.com").with_attr("href", "ignored");
        assert_eq!(node.render().unwrap(), "google.com");
    }

    #[test]
    fn untagged_leaf_may_be_empty() {
        assert_eq!(Node::text("").render().unwrap(), "");
    }

    #[test]
    fn leaf_without_attrs() {
        let node = Node::leaf("p", "This is a paragraph");
        assert_eq!(node.render().unwrap(), "<p>This is a paragraph</p>");
    }

    #[test]
    fn attribute_values_are_not_escaped() {
        let node = Node::leaf("a", "x").with_attr("title", "<&>");
        assert_eq!(node.render().unwrap(), r#"<a title="<&>">x</a>"#);
    }

    #[test]
    fn nested_parents() {
        let inner = Node::parent(
            "a",
            vec![
                Node::leaf("b", "bold text"),
                Node::text("normal text"),
                Node::leaf("i", "italic text"),
            ],
        )
        .with_attr("href", "https://www.google.com")
        .with_attr("target", "_blank");
        let inner_html = r#"<a href="https://www.google.com" target="_blank"><b>bold text</b>normal text<i>italic text</i></a>"#;
        assert_eq!(inner.render().unwrap(), inner_html);

        let outer = Node::parent("p", vec![Node::leaf("b", "bold text"), inner]);
        assert_eq!(
            outer.render().unwrap(),
            format!("<p><b>bold text</b>{inner_html}</p>")
        );
    }

    #[test]
    fn empty_tagged_leaf_fails() {
        let err = Node::leaf("b", "").render().unwrap_err();
        assert_eq!(
            err,
            Error::EmptyLeafValue {
                tag: "b".to_string()
            }
        );
    }

    #[test]
    fn childless_parent_fails() {
        let err = Node::parent("ul", vec![]).render().unwrap_err();
        assert_eq!(
            err,
            Error::EmptyParentChildren {
                tag: "ul".to_string()
            }
        );
    }

    #[test]
    fn untagged_parent_fails() {
        let err = Node::parent("", vec![Node::text("x")]).render().unwrap_err();
        assert_eq!(err, Error::MissingTag);
    }

    #[test]
    fn error_in_child_aborts_parent() {
        let node = Node::parent("p", vec![Node::text("ok"), Node::leaf("i", "")]);
        assert!(matches!(
            node.render(),
            Err(Error::EmptyLeafValue { .. })
        ));
    }
}
