//! Markdown rendering utilities.

use pulldown_cmark::{html, Options, Parser};

use crate::domain::ports::MarkdownRenderer;

/// Markdown to HTML with pulldown-cmark.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Footnotes
/// - Task lists
///
/// The output is cleaned with ammonia so links such as `javascript:` URLs
/// and any raw HTML carried through the markdown never reach the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownMarkdown;

impl PulldownMarkdown {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownRenderer for PulldownMarkdown {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        ammonia::clean(&html_output)
    }
}
