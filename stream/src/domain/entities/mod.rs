//! Domain entities
//!
//! View models deserialized from the JSON payloads of the local and remote
//! post endpoints. None of them outlive a single render pass.

pub mod comment;
pub mod content_type;
pub mod identity;
pub mod post;

use serde::{Deserialize, Deserializer};

pub use comment::{Comment, CommentAuthor};
pub use content_type::{ContentStrategy, ContentType};
pub use identity::{CurrentUser, ObjectId};
pub use post::{Author, Post, Published, Visibility};

/// Helper to deserialize null as default (empty vec, empty string, etc.)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
