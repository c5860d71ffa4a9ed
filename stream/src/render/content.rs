//! Content renderer
//!
//! Turns a post's raw content into a fragment according to its declared
//! content type. Dispatch is total: unknown types get the placeholder.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::dom::Node;
use crate::domain::entities::{ContentStrategy, ContentType};
use crate::domain::ports::{MarkdownRenderer, Sanitizer};

pub const PLACEHOLDER_MARKUP: &str = "<i>No representable content.</i>";

pub struct ContentRenderer<S, M>
where
    S: Sanitizer,
    M: MarkdownRenderer,
{
    sanitizer: Arc<S>,
    markdown: Arc<M>,
}

impl<S, M> ContentRenderer<S, M>
where
    S: Sanitizer,
    M: MarkdownRenderer,
{
    pub fn new(sanitizer: Arc<S>, markdown: Arc<M>) -> Self {
        Self {
            sanitizer,
            markdown,
        }
    }

    pub fn render_content(&self, content_type: &ContentType, raw_content: &str) -> Node {
        match content_type.strategy() {
            ContentStrategy::InlineFrame => self.render_inline_frame(raw_content),
            ContentStrategy::Markdown => self.render_markdown(raw_content),
            ContentStrategy::Image => render_image(content_type, raw_content),
            ContentStrategy::PlainText => self.render_plain_text(raw_content),
            ContentStrategy::Placeholder => render_placeholder(),
        }
    }

    /// Sanitized even though the payload travels as base64
    fn render_inline_frame(&self, raw_content: &str) -> Node {
        let content = self.sanitizer.sanitize(raw_content.trim());

        Node::new("div").class("post-content").child(
            Node::new("iframe")
                .attr("src", format!("data:text/plain;base64,{}", content))
                .attr("sandbox", "")
                .attr("style", "width: 100%; height: auto;"),
        )
    }

    fn render_markdown(&self, raw_content: &str) -> Node {
        let html = self.markdown.render(&self.sanitizer.sanitize(raw_content));
        Node::new("div").class("post-content").raw(html)
    }

    fn render_plain_text(&self, raw_content: &str) -> Node {
        Node::new("div")
            .class("post-content")
            .text(self.sanitizer.sanitize(raw_content))
    }
}

/// Image payloads are binary and never sanitized. They must at least decode
/// as base64 before they are trusted as an image source.
fn render_image(content_type: &ContentType, raw_content: &str) -> Node {
    let payload = raw_content.trim();

    if STANDARD.decode(payload).is_err() {
        tracing::warn!(
            content_type = %content_type,
            "Image content is not valid base64, rendering placeholder"
        );
        return render_placeholder();
    }

    Node::new("div").class("image-container").child(
        Node::new("img").attr("src", format!("data:{},{}", content_type.as_str(), payload)),
    )
}

fn render_placeholder() -> Node {
    Node::new("div")
        .class("post-content")
        .raw(PLACEHOLDER_MARKUP)
}
