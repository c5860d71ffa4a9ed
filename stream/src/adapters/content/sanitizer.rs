//! Ammonia sanitizer

use crate::domain::ports::Sanitizer;

/// Whitelist sanitizer with ammonia's default tag and attribute policy.
/// Script and style elements are dropped together with their contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmmoniaSanitizer;

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        Self
    }
}

impl Sanitizer for AmmoniaSanitizer {
    fn sanitize(&self, untrusted: &str) -> String {
        ammonia::clean(untrusted)
    }
}
