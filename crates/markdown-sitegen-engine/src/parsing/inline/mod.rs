//! # Inline Parsing
//!
//! Turns the raw text of one block into typed [`Span`]s.
//!
//! ## Architecture
//!
//! Inline parsing is an ordered pipeline of independent passes. Every pass
//! walks the current span list and only splits spans that are still plain:
//!
//! 1. `**` → Bold
//! 2. `*` → Italic
//! 3. `` ` `` → Code
//! 4. `![label](url)` → Image
//! 5. `[label](url)` → Link
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: delimiter registry and link/image patterns
//! - **`parser`**: `tokenize()` main entry point with the per-pass helpers
//!
//! ## Strictness
//!
//! An unclosed delimiter is a hard error for the whole call, not plain text.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Span, SpanKind};
