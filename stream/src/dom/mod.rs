//! DOM module
//!
//! Typed element builder and mount points that rendered output lands in.

pub mod mount;
pub mod node;

pub use mount::MountPoint;
pub use node::{escape_html, Inner, Node};
