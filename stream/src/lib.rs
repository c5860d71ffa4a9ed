//! BetterSocial post stream
//!
//! Builds the post feed and single-post view of a BetterSocial node.
//! Uses hexagonal (ports & adapters) architecture: post sources, the
//! sanitizer and the markdown renderer are ports, and the rendering core
//! only ever sees their traits.

pub mod adapters;
pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod render;
pub mod routes;

#[cfg(test)]
mod test_utils;


pub use app::{FeedAggregator, LoadOutcome, SinglePostView};
pub use config::Config;
pub use dom::{MountPoint, Node};
pub use domain::entities::{Comment, CurrentUser, Post};
pub use error::{SourceError, StreamError};
