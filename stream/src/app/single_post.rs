//! Single post view
//!
//! Detail page: the post followed by its full comment thread.

use std::sync::Arc;

use crate::dom::MountPoint;
use crate::domain::entities::{Comment, CurrentUser, Post};
use crate::domain::ports::{MarkdownRenderer, Sanitizer};
use crate::error::StreamError;
use crate::render::{CommentRenderer, PostRenderer};

pub struct SinglePostView<S, M>
where
    S: Sanitizer,
    M: MarkdownRenderer,
{
    posts: Arc<PostRenderer<S, M>>,
    comments: CommentRenderer<S>,
}

impl<S, M> SinglePostView<S, M>
where
    S: Sanitizer,
    M: MarkdownRenderer,
{
    pub fn new(posts: Arc<PostRenderer<S, M>>, comments: CommentRenderer<S>) -> Self {
        Self { posts, comments }
    }

    /// Parse both payloads, then replace the mount point's content with the
    /// post and its comments in one step.
    ///
    /// A malformed payload aborts before the mount point is touched. A
    /// `null` comments payload is treated as an empty thread.
    pub fn render_single_post(
        &self,
        post_payload: &str,
        comments_payload: &str,
        current_user: &CurrentUser,
        mount: &mut MountPoint,
    ) -> Result<(), StreamError> {
        let post: Post = serde_json::from_str(post_payload)?;
        let comments: Vec<Comment> =
            serde_json::from_str::<Option<Vec<Comment>>>(comments_payload)?.unwrap_or_default();

        tracing::debug!(
            post = %post.uuid,
            comments = comments.len(),
            "Rendering single post"
        );

        let mut rendered = self.posts.render_post(&post, current_user);
        rendered.append_child(self.comments.render_comments(&comments, &post));

        mount.replace_children([rendered]);

        Ok(())
    }
}
