//! # Block Kinds
//!
//! Block-specific types that own their delimiters and line patterns.
//!
//! ## Types
//!
//! - **`Heading`**: `#` × 1–6 followed by a space
//! - **`CodeFence`**: triple-backtick fences around the block
//! - **`BlockQuote`**: `>` prefixes
//! - **`LineMarker`**, **`UnorderedList`**, **`OrderedList`**: list item markers
//!
//! Classifier and renderer both go through these types, so the syntax
//! knowledge lives in one place.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{LineMarker, OrderedList, UnorderedList};
