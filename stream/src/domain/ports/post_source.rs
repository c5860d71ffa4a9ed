//! Post source port trait
//!
//! Defines the interface for fetching a post array from one origin
//! (the local node or the federated remote nodes).

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::error::SourceError;

/// A single origin of posts for the stream
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Short name used in logs and errors (e.g. "local", "remote")
    fn name(&self) -> &str;

    /// Fetch every post this source currently offers
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError>;
}
