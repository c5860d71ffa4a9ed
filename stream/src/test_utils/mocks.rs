//! Test doubles for port traits
//!
//! In-memory implementations that can be configured per test and that
//! record how they were used.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::Post;
use crate::domain::ports::{MarkdownRenderer, PostSource, Sanitizer};
use crate::error::SourceError;

// ============================================================================
// In-Memory Post Source
// ============================================================================

pub struct InMemoryPostSource {
    name: String,
    posts: Arc<RwLock<Vec<Post>>>,
    failure: Option<(u16, String)>,
    delay: Option<Duration>,
}

impl InMemoryPostSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            posts: Arc::new(RwLock::new(Vec::new())),
            failure: None,
            delay: None,
        }
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: Post) -> Self {
        self.posts.write().unwrap().push(post);
        self
    }

    /// Every fetch fails with an API error
    pub fn failing(mut self, status: u16, message: &str) -> Self {
        self.failure = Some((status, message.to_string()));
        self
    }

    /// Every fetch sleeps before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PostSource for InMemoryPostSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some((status, message)) = &self.failure {
            return Err(SourceError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        Ok(self.posts.read().unwrap().clone())
    }
}

// ============================================================================
// Content collaborators
// ============================================================================

/// Returns input unchanged and records every call
#[derive(Default)]
pub struct RecordingSanitizer {
    inputs: RwLock<Vec<String>>,
}

impl RecordingSanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.read().unwrap().clone()
    }
}

impl Sanitizer for RecordingSanitizer {
    fn sanitize(&self, untrusted: &str) -> String {
        self.inputs.write().unwrap().push(untrusted.to_string());
        untrusted.to_string()
    }
}

/// Wraps input in `<md>` tags so tests can see the renderer ran
pub struct WrappingMarkdown;

impl MarkdownRenderer for WrappingMarkdown {
    fn render(&self, markdown: &str) -> String {
        format!("<md>{}</md>", markdown)
    }
}

/// Returns input unchanged
pub struct EchoSanitizer;

impl Sanitizer for EchoSanitizer {
    fn sanitize(&self, untrusted: &str) -> String {
        untrusted.to_string()
    }
}
