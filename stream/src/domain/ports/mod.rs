//! Domain ports (traits)
//!
//! Port traits define interfaces that the core requires.
//! Adapters provide concrete implementations of these traits.

pub mod content;
pub mod post_source;

pub use content::{MarkdownRenderer, Sanitizer};
pub use post_source::PostSource;
