//! HTTP adapter
//!
//! Post sources backed by the node's JSON endpoints.

pub mod client;

pub use client::HttpPostSource;
