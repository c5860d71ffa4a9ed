//! Comment renderer
//!
//! Renders the whole comment thread under a post in input order. There is
//! no pagination or truncation.

use std::sync::Arc;

use crate::dom::Node;
use crate::domain::entities::{Comment, Post};
use crate::domain::ports::Sanitizer;
use crate::routes::Route;

use super::timestamp::TimestampFormat;

pub const NO_COMMENTS_TEXT: &str = "No Comments... Add the first one!";

pub struct CommentRenderer<S: Sanitizer> {
    sanitizer: Arc<S>,
    timestamps: TimestampFormat,
}

impl<S: Sanitizer> CommentRenderer<S> {
    pub fn new(sanitizer: Arc<S>, timestamps: TimestampFormat) -> Self {
        Self {
            sanitizer,
            timestamps,
        }
    }

    pub fn render_comments(&self, comments: &[Comment], post: &Post) -> Node {
        let add_comment = Route::AddComment {
            location: &post.comments,
            host: &post.author.host,
        }
        .href()
        .unwrap_or_default();

        let mut section = Node::new("div").class("comments").children([
            Node::new("hr"),
            Node::new("h2").class("post-title").text("Comments Section:"),
            Node::new("div")
                .class("post-content")
                .child(Node::new("a").attr("href", add_comment).text("Add Comment")),
        ]);

        if comments.is_empty() {
            section.append_child(Node::new("hr"));
            section.append_child(
                Node::new("div")
                    .class("post-content comment-empty")
                    .text(NO_COMMENTS_TEXT),
            );
            section.append_child(Node::new("br"));
            return section;
        }

        for comment in comments {
            section.append_child(Node::new("hr"));
            section.append_child(self.render_comment(comment));
            section.append_child(Node::new("br"));
        }

        section
    }

    fn render_comment(&self, comment: &Comment) -> Node {
        let label = format!(
            "{} - {}",
            comment.author.display_name,
            self.timestamps.format(&comment.published)
        );

        Node::new("div").class("post-content comment").children([
            Node::new("div")
                .class("post-content")
                .child(Node::new("strong").text(self.sanitizer.sanitize(&label))),
            Node::new("div")
                .class("post-content")
                .text(self.sanitizer.sanitize(&comment.comment)),
        ])
    }
}
