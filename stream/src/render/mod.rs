//! Render module
//!
//! Builds element trees for posts, their content and their comment threads.

pub mod comments;
pub mod content;
pub mod post;
pub mod timestamp;

pub use comments::CommentRenderer;
pub use content::ContentRenderer;
pub use post::PostRenderer;
pub use timestamp::TimestampFormat;
