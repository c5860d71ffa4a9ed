//! Human-readable timestamps

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Offset, Utc};

use crate::config::{Config, DEFAULT_TIMESTAMP_FORMAT};
use crate::domain::entities::Published;

/// strftime pattern plus a fixed UTC offset
#[derive(Debug, Clone)]
pub struct TimestampFormat {
    pattern: String,
    offset: FixedOffset,
}

impl TimestampFormat {
    /// Falls back to the default pattern if `pattern` is not valid strftime,
    /// and to UTC if the offset is out of range.
    pub fn new(pattern: &str, utc_offset_minutes: i32) -> Self {
        let pattern = if is_valid_pattern(pattern) {
            pattern.to_string()
        } else {
            tracing::warn!(pattern, "Invalid timestamp format, using default");
            DEFAULT_TIMESTAMP_FORMAT.to_string()
        };

        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(utc);

        Self { pattern, offset }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.timestamp_format, config.utc_offset_minutes)
    }

    pub fn format(&self, published: &Published) -> String {
        published
            .as_datetime()
            .with_timezone(&self.offset)
            .format(&self.pattern)
            .to_string()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            offset: utc(),
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
