//! Domain layer
//!
//! Contains pure view models and the seams to the outside world.
//! - `entities`: Posts, comments, authors and the viewing user
//! - `ports`: Trait definitions for post sources, sanitizing and markdown

pub mod entities;
pub mod ports;
