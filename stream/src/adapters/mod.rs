//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod content;
pub mod http;

pub use content::{AmmoniaSanitizer, PulldownMarkdown};
pub use http::HttpPostSource;
