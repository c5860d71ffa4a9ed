//! Identity domain entities
//!
//! Opaque object identifiers and the viewing user.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Opaque identifier for an author, post or comment.
///
/// Nodes on the network disagree about whether ids are strings or integers,
/// so both deserialize into the same canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Canonical string representation used for every comparison
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<Uuid> for ObjectId {
    fn from(id: Uuid) -> Self {
        Self(id.hyphenated().to_string())
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user viewing the page.
///
/// Only used to decide whether edit/delete affordances are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: ObjectId,
}

impl CurrentUser {
    pub fn new(id: impl Into<ObjectId>) -> Self {
        Self { id: id.into() }
    }

    /// Viewer with no id. Owns nothing.
    pub fn anonymous() -> Self {
        Self::new("")
    }

    /// Ownership gate: canonical string of both ids must match exactly.
    /// Any representation mismatch fails closed, and an empty id never matches.
    pub fn owns(&self, author_id: &ObjectId) -> bool {
        !self.id.as_str().is_empty() && self.id.as_str() == author_id.as_str()
    }
}
