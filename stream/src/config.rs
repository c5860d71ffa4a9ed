use std::env;
use std::time::Duration;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the node serving both post endpoints
    pub base_url: String,
    pub local_posts_path: String,
    pub remote_posts_path: String,
    /// Upper bound on each of the two concurrent fetches
    pub fetch_timeout: Duration,
    /// strftime pattern for human-readable timestamps
    pub timestamp_format: String,
    /// Offset from UTC applied before formatting timestamps
    pub utc_offset_minutes: i32,
    /// Id of the feed stream container
    pub feed_mount_id: String,
    /// Id of the single-post view container
    pub post_mount_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            local_posts_path: "/api/posts".to_string(),
            remote_posts_path: "/api/remote-posts".to_string(),
            fetch_timeout: Duration::from_secs(10),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            utc_offset_minutes: 0,
            feed_mount_id: "stream_items".to_string(),
            post_mount_id: "post-view".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            base_url: env::var("BETTERSOCIAL_BASE_URL").unwrap_or(defaults.base_url),
            local_posts_path: env::var("BETTERSOCIAL_LOCAL_POSTS_PATH")
                .unwrap_or(defaults.local_posts_path),
            remote_posts_path: env::var("BETTERSOCIAL_REMOTE_POSTS_PATH")
                .unwrap_or(defaults.remote_posts_path),
            fetch_timeout: env::var("BETTERSOCIAL_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            timestamp_format: env::var("BETTERSOCIAL_TIMESTAMP_FORMAT")
                .unwrap_or(defaults.timestamp_format),
            utc_offset_minutes: env::var("BETTERSOCIAL_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.utc_offset_minutes),
            feed_mount_id: env::var("BETTERSOCIAL_FEED_MOUNT_ID")
                .unwrap_or(defaults.feed_mount_id),
            post_mount_id: env::var("BETTERSOCIAL_POST_MOUNT_ID")
                .unwrap_or(defaults.post_mount_id),
        }
    }
}
