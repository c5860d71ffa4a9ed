//! Application layer
//!
//! Use cases that drive the renderers: the aggregated feed and the
//! single-post detail view.

pub mod feed_aggregator;
pub mod single_post;

pub use feed_aggregator::{merge_posts, FeedAggregator, LoadOutcome};
pub use single_post::SinglePostView;
