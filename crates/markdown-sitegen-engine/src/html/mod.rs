//! # HTML Nodes
//!
//! A minimal owned tree of markup elements and the mapping from inline spans
//! into that tree.
//!
//! ## Modules
//!
//! - **`node`**: `Node` enum (Leaf, Parent) and its rendering contract
//! - **`convert`**: `span_to_node()` fixed mapping from `Span` kinds to tags
//!
//! ## Rendering Contract
//!
//! - Leaf without a tag renders its value verbatim
//! - Attributes render as ` key="value"` in insertion order, unescaped
//! - Structural violations (empty tagged leaf, childless parent, missing tag)
//!   are errors, never silently dropped

pub mod convert;
pub mod node;

pub use convert::{span_to_node, spans_to_nodes};
pub use node::{Attrs, LeafNode, Node, ParentNode};
