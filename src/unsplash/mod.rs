//! Unsplash photo-search API integration.
//!
//! This module handles the wire types, the HTTP client, and the concurrent
//! per-keyword search fan-out.

mod client;
mod fanout;
mod types;

// Re-export types for lib.rs to use
pub use self::client::UnsplashClient;
pub use self::fanout::{per_keyword_quota, search_all, QUOTA_SPARSE, QUOTA_STANDARD};
pub use self::types::*;
