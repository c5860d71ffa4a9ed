//! Comment domain entity

use serde::{Deserialize, Serialize};

use super::content_type::ContentType;
use super::deserialize_null_default;
use super::identity::ObjectId;
use super::post::Published;

/// Author of a comment. Remote nodes do not always send an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    #[serde(default, rename = "_uuid")]
    pub uuid: Option<ObjectId>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub display_name: String,
}

/// A comment on a post. The body is untrusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: CommentAuthor,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub comment: String,
    /// Informational only; comment bodies always render as text
    #[serde(default)]
    pub content_type: ContentType,
    pub published: Published,
    #[serde(default)]
    pub id: Option<String>,
}
