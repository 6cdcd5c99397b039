//! Ordered glob filter sets and the per-filter match result.
//!
//! Filters are written one per line, optionally several per line separated by
//! commas, and optionally grouped under a name:
//!
//! ```text
//! **/*.py
//! docs: docs/**, *.md
//! docs: !docs/generated/**
//! ```

mod error;
mod filter;
mod pattern;
mod result;

pub use error::FilterError;
pub use filter::{DEFAULT_PATTERN, Filter, FilterSet};
pub use result::MatchResult;

pub type Result<T> = std::result::Result<T, FilterError>;
