//! Content type domain entity
//!
//! The declared encoding of a post's raw content, and the total mapping
//! from each declared type onto a rendering strategy.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declared content type of a post or comment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `application/base64`
    Base64,
    /// `text/markdown`
    Markdown,
    /// `image/jpeg;base64`
    ImageJpeg,
    /// `image/png;base64`
    ImagePng,
    /// `text/plain`
    Plain,
    /// Anything else, including a missing tag (empty string)
    Unrecognized(String),
}

/// How a content type is turned into a renderable fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStrategy {
    /// Sanitized, embedded in a sandboxed iframe through a data URI
    InlineFrame,
    /// Sanitized, then rendered through the markdown collaborator
    Markdown,
    /// Embedded as an image data URI, never sanitized
    Image,
    /// Sanitized and inserted as literal text
    PlainText,
    /// Fixed "no representable content" fallback
    Placeholder,
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Base64 => "application/base64",
            ContentType::Markdown => "text/markdown",
            ContentType::ImageJpeg => "image/jpeg;base64",
            ContentType::ImagePng => "image/png;base64",
            ContentType::Plain => "text/plain",
            ContentType::Unrecognized(raw) => raw,
        }
    }

    pub fn strategy(&self) -> ContentStrategy {
        match self {
            ContentType::Base64 => ContentStrategy::InlineFrame,
            ContentType::Markdown => ContentStrategy::Markdown,
            ContentType::ImageJpeg | ContentType::ImagePng => ContentStrategy::Image,
            ContentType::Plain => ContentStrategy::PlainText,
            ContentType::Unrecognized(_) => ContentStrategy::Placeholder,
        }
    }

    /// Human label shown in post forms
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ContentType::Base64 => Some("Base64 Encoded"),
            ContentType::Markdown => Some("Markdown"),
            ContentType::ImageJpeg => Some("Image (JPEG)"),
            ContentType::ImagePng => Some("Image (PNG)"),
            ContentType::Plain => Some("Text"),
            ContentType::Unrecognized(_) => None,
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Unrecognized(String::new())
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s {
            "application/base64" => ContentType::Base64,
            "text/markdown" => ContentType::Markdown,
            "image/jpeg;base64" => ContentType::ImageJpeg,
            "image/png;base64" => ContentType::ImagePng,
            "text/plain" => ContentType::Plain,
            other => ContentType::Unrecognized(other.to_string()),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(ContentType::from).unwrap_or_default())
    }
}
