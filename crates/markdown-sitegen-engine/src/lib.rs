//! # markdown-sitegen engine
//!
//! Converts a constrained Markdown dialect into HTML.
//!
//! ```
//! let html = markdown_sitegen_engine::render_document("# Title\n\nHello **world**").unwrap();
//! assert_eq!(html, "<h1>Title</h1><p>Hello <b>world</b></p>");
//! ```
//!
//! The pipeline is `parsing::blocks` (segment + classify) → `render` →
//! `parsing::inline` (tokenize) → `html` (node tree) → markup string.

pub mod error;
pub mod html;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::{Error, Result};
pub use html::Node;
pub use parsing::blocks::BlockKind;
pub use parsing::inline::{Span, SpanKind, tokenize};
pub use render::{extract_title, render_block, render_document};
