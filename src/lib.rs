//! # Xiphos
//!
//! An in-memory fuzzy and substring matching index for Rust.
//!
//! Callers register pairs of (target key, search string); later queries by a
//! partial string return the target keys whose registered strings match under
//! one of three semantics: exact, contiguous substring ("like"), and
//! non-contiguous subsequence ("super-like").
//!
//! ## Features
//!
//! - Per-character position index with O(1) expected character lookup
//! - Incremental multi-character narrowing with an all-or-nothing contract
//! - Exact, contiguous, and subsequence match modes
//! - Concurrent reads against exclusive writes via a reader/writer lock
//! - Deterministic, sorted result ordering
//!
//! ## Example
//!
//! ```
//! use xiphos::engine::SearchEngine;
//! use xiphos::search::MatchType;
//!
//! let engine = SearchEngine::new();
//! engine.put("weather today".to_string(), "weather today");
//! engine.put("weather".to_string(), "weather");
//!
//! let hits = engine.search("weather", 10, MatchType::Like);
//! assert_eq!(hits, vec!["weather".to_string(), "weather today".to_string()]);
//! ```

pub mod engine;
pub mod error;
pub mod index;
pub mod position;
pub mod registry;
pub mod search;

pub mod prelude {
    pub use crate::engine::{SearchEngine, SearchEngineConfig};
    pub use crate::error::{Result, XiphosError};
    pub use crate::search::MatchType;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
