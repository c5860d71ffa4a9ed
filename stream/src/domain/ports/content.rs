//! Content collaborator ports
//!
//! Sanitizing and markdown rendering are supplied from outside the core.

/// Strips unsafe markup from untrusted text.
///
/// Implementations must neutralize script-bearing markup while keeping
/// benign formatting.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, untrusted: &str) -> String;
}

/// Converts markdown into HTML.
///
/// The output is inserted as-is, so implementations are responsible for
/// never emitting unsafe markup.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
