//! Content adapters
//!
//! Sanitizer backed by ammonia, markdown backed by pulldown-cmark.

pub mod markdown;
pub mod sanitizer;

pub use markdown::PulldownMarkdown;
pub use sanitizer::AmmoniaSanitizer;
