//! Post domain entity
//!
//! A post as served by `/api/posts` (local node) or `/api/remote-posts`
//! (federated nodes). Posts are transient view models: they live for a
//! single render pass.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::content_type::ContentType;
use super::deserialize_null_default;
use super::identity::ObjectId;

/// Publish timestamp of a post or comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Published(DateTime<Utc>);

impl Published {
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Published {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::str::FromStr for Published {
    type Err = String;

    /// Accepts RFC 3339, a naive date-time (taken as UTC) or a bare date
    /// (UTC midnight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
                return Ok(Self(naive.and_utc()));
            }
        }

        if let Some(naive) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(Self(naive.and_utc()));
        }

        Err(format!("Unrecognized timestamp: {}", s))
    }
}

impl std::fmt::Display for Published {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Published {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Published {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Post visibility
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Friends,
    Private,
    Unlisted,
    /// Label sent by a remote node that this node does not know about
    Other(String),
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "PUBLIC"),
            Visibility::Friends => write!(f, "FRIENDS"),
            Visibility::Private => write!(f, "PRIVATE"),
            Visibility::Unlisted => write!(f, "UNLISTED"),
            Visibility::Other(label) => write!(f, "{}", label),
        }
    }
}

impl From<&str> for Visibility {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PUBLIC" => Visibility::Public,
            "FRIENDS" => Visibility::Friends,
            "PRIVATE" => Visibility::Private,
            "UNLISTED" => Visibility::Unlisted,
            _ => Visibility::Other(s.to_string()),
        }
    }
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Visibility::from).unwrap_or_default())
    }
}

/// Author of a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_uuid")]
    pub uuid: ObjectId,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub display_name: String,
    /// Home node of the author, used for cross-host comment submission
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub host: String,
    /// API URL of the author
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// A post in the stream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_uuid")]
    pub uuid: ObjectId,
    /// API URL of the post
    #[serde(default)]
    pub id: Option<String>,
    pub author: Author,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub unlisted: bool,
    pub published: Published,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
    /// Number of comments on the post
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub count: u64,
    /// Comment-collection locator
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub comments: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

impl Post {
    /// Non-blank category tags, in order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
    }
}
