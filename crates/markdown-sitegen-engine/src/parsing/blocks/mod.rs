//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty block strings
//!
//! 2. **Classification** (`classify`): each block string is inspected line by
//!    line and assigned exactly one `BlockKind`
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, lists)
//! - **`segment`**: `segment()` blank-line splitter
//! - **`classify`**: `classify()` with its fixed precedence order
//!
//! ## Key Invariants
//!
//! - Blocks borrow from the source document; no block reordering
//! - Nested lists are not supported: a list is one block of marker lines
//! - Mixed markers make a paragraph, never a partial list

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::segment;
pub use types::BlockKind;
