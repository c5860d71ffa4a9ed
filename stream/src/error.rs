//! Error types for the stream core
//!
//! This module defines error types for each layer:
//! - `SourceError`: failures of a single post source (HTTP, decoding, timeout)
//! - `StreamError`: failures of a render pass (feed load or single-post view)
//!
//! Every error is terminal for the current render pass. Nothing is retried,
//! and the mount point keeps its prior content.

use std::time::Duration;

use thiserror::Error;

/// Post source errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timed out after {after:?}")]
    Timeout { after: Duration },
}

/// Render pass errors
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Failed to fetch {source_name} posts: {source}")]
    Source {
        source_name: String,
        source: SourceError,
    },

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl StreamError {
    pub fn source_failure(source_name: impl Into<String>, source: SourceError) -> Self {
        StreamError::Source {
            source_name: source_name.into(),
            source,
        }
    }
}
