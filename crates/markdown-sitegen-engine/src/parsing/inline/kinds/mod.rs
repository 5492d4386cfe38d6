//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Delimiter`**: the closed, ordered registry `**`, `*`, `` ` ``
//! - **`Image`**: `![label](url)` pattern
//! - **`Link`**: `[label](url)` pattern
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser
//! code. The parser never hardcodes `**` or `](`.

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;
