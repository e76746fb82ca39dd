//! Schema invariant violation errors.
//!
//! The API contract carries a handful of cross-field invariants that a payload
//! can violate without failing deserialization (a shard list that does not sum
//! to the posted server count, a paged response whose `count` disagrees with
//! its result list). These are reported through `ValidationError` rather than
//! rejected at the serde layer, because the platform does not guarantee them.

use derive_getters::Getters;

/// Validation error variants.
///
/// Each variant names a schema invariant that a received payload failed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A bot profile arrived with an empty owner list.
    #[display("bot has no owners; owners must be a non-empty list")]
    EmptyOwners,

    /// Per-shard counts do not sum to the posted server count.
    #[display("shard counts sum to {actual}, expected server_count {expected}")]
    ShardSumMismatch {
        /// The `server_count` field the payload carried.
        expected: u64,
        /// The sum of the `shards` list.
        actual: u64,
    },

    /// The shard list length disagrees with `shard_count`.
    #[display("shards list has {actual} entries, expected shard_count {expected}")]
    ShardCountMismatch {
        /// The `shard_count` field the payload carried.
        expected: u64,
        /// The length of the `shards` list.
        actual: u64,
    },

    /// A shard-scoped stats post carried a per-shard list instead of a scalar.
    #[display("shard_id is set but server_count is a per-shard list; a shard post must carry a scalar count")]
    ShardScopedList,

    /// A paged response whose `count` is not the length of `results`.
    #[display("response count is {count} but results holds {results} entries")]
    ResultCountMismatch {
        /// The `count` field the payload carried.
        count: u64,
        /// The length of the `results` list.
        results: u64,
    },

    /// A paged response claiming fewer total matches than it returned.
    #[display("total matches {total} is below returned count {count}")]
    TotalBelowCount {
        /// The `total` field the payload carried.
        total: u64,
        /// The `count` field the payload carried.
        count: u64,
    },
}

/// Validation error with source location tracking.
///
/// Captures the violated invariant along with the file and line where the
/// check was performed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use botlist_error::{ValidationError, ValidationErrorKind};
    ///
    /// let err = ValidationError::new(ValidationErrorKind::EmptyOwners);
    /// ```
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
