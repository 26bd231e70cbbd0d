#![forbid(unsafe_code)]

//! Character records and inferred kinship relations (headless).
//!
//! Design goals:
//! - deterministic, testable derived state (relations, generations) kept
//!   separate from the immutable input records
//! - batch lifecycle: everything is recomputed from scratch per load, never
//!   incrementally maintained
//! - tolerant of partially-entered data (dangling references are dropped,
//!   not errors)

pub mod error;
pub mod generation;
pub mod model;
pub mod query;
pub mod relations;

pub use error::{Error, Result};
pub use generation::Generations;
pub use model::{Character, parse_characters};
pub use relations::Relations;
