//! Test utilities
//!
//! Manual test doubles and fixtures for unit testing.
//!
//! Why manual doubles instead of mockall?
//! - The ports are small and synchronous apart from `PostSource`
//! - Manual doubles are more explicit and easier to debug
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
