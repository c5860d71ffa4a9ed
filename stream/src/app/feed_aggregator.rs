//! Feed aggregator
//!
//! Pulls posts from the local and remote sources, merges them into one
//! timeline (newest first) and mounts the rendered posts. The feed is
//! rebuilt from scratch on every call; nothing is cached between calls.

use std::sync::Arc;
use std::time::Duration;

use crate::dom::MountPoint;
use crate::domain::entities::{CurrentUser, Post};
use crate::domain::ports::{MarkdownRenderer, PostSource, Sanitizer};
use crate::error::{SourceError, StreamError};
use crate::render::PostRenderer;

/// What a feed load did to the mount point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both sources were empty; existing children were left in place
    Untouched,
    /// The mount point was cleared and filled with this many posts
    Rendered { posts: usize },
}

/// Service for building the post stream
pub struct FeedAggregator<L, R, S, M>
where
    L: PostSource,
    R: PostSource,
    S: Sanitizer,
    M: MarkdownRenderer,
{
    local: Arc<L>,
    remote: Arc<R>,
    renderer: Arc<PostRenderer<S, M>>,
    fetch_timeout: Duration,
}

impl<L, R, S, M> FeedAggregator<L, R, S, M>
where
    L: PostSource,
    R: PostSource,
    S: Sanitizer,
    M: MarkdownRenderer,
{
    pub fn new(
        local: Arc<L>,
        remote: Arc<R>,
        renderer: Arc<PostRenderer<S, M>>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            local,
            remote,
            renderer,
            fetch_timeout,
        }
    }

    /// Fetch both sources concurrently and mount the merged feed.
    ///
    /// Either source failing (or timing out) fails the whole load and leaves
    /// the mount point as it was. An empty merged feed also leaves the mount
    /// point as it was, so whatever it showed before stays visible.
    pub async fn load_feed(
        &self,
        current_user: &CurrentUser,
        mount: &mut MountPoint,
    ) -> Result<LoadOutcome, StreamError> {
        let (local, remote) = tokio::try_join!(
            fetch_with_timeout(self.local.as_ref(), self.fetch_timeout),
            fetch_with_timeout(self.remote.as_ref(), self.fetch_timeout),
        )?;

        let feed = merge_posts(local, remote);

        if feed.is_empty() {
            tracing::debug!(mount = mount.id(), "Feed is empty, leaving mount point untouched");
            return Ok(LoadOutcome::Untouched);
        }

        let rendered = feed
            .iter()
            .map(|post| self.renderer.render_post(post, current_user));
        mount.replace_children(rendered);

        tracing::info!(mount = mount.id(), posts = feed.len(), "Feed mounted");

        Ok(LoadOutcome::Rendered { posts: feed.len() })
    }
}

/// Concatenate both sources and sort newest first.
///
/// The sort is stable and compares timestamps only, so posts published at
/// the same instant keep their concatenation order.
pub fn merge_posts(local: Vec<Post>, remote: Vec<Post>) -> Vec<Post> {
    let mut feed = local;
    feed.extend(remote);
    feed.sort_by(|first, second| second.published.cmp(&first.published));
    feed
}

async fn fetch_with_timeout<P>(source: &P, after: Duration) -> Result<Vec<Post>, StreamError>
where
    P: PostSource + ?Sized,
{
    match tokio::time::timeout(after, source.fetch_posts()).await {
        Ok(Ok(posts)) => {
            tracing::debug!(source = source.name(), count = posts.len(), "Fetched posts");
            Ok(posts)
        }
        Ok(Err(e)) => {
            tracing::warn!(source = source.name(), error = %e, "Failed to fetch posts");
            Err(StreamError::source_failure(source.name(), e))
        }
        Err(_) => {
            tracing::warn!(source = source.name(), ?after, "Fetching posts timed out");
            Err(StreamError::source_failure(
                source.name(),
                SourceError::Timeout { after },
            ))
        }
    }
}
