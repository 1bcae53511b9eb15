//! Error types for the Gridloom system.
//!
//! Uses `thiserror` for ergonomic error definition. All errors are
//! precondition violations: the engine validates its input up front and
//! never attempts to recover from malformed rules or grids mid-run.

use thiserror::Error;

use crate::ident::{PartId, PatternId, RuleId};

/// Convenient result alias for Gridloom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Gridloom operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a zero-dimension pattern error.
    #[must_use]
    pub fn empty_pattern(pattern: PatternId) -> Self {
        Self::new(ErrorKind::EmptyPattern(pattern))
    }

    /// Creates a ragged-rows error for a non-rectangular grid.
    #[must_use]
    pub fn ragged_rows(pattern: PatternId, row: usize, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::RaggedRows {
            pattern,
            row,
            expected,
            actual,
        })
    }

    /// Creates a cell-count mismatch error.
    #[must_use]
    pub fn malformed_pattern(pattern: PatternId, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::MalformedPattern {
            pattern,
            expected,
            actual,
        })
    }

    /// Creates an empty-part error.
    #[must_use]
    pub fn empty_part(part: PartId) -> Self {
        Self::new(ErrorKind::EmptyPart(part))
    }

    /// Creates an empty-rule error.
    #[must_use]
    pub fn empty_rule(rule: RuleId) -> Self {
        Self::new(ErrorKind::EmptyRule(rule))
    }

    /// Creates a zero-stride error.
    #[must_use]
    pub fn zero_stride() -> Self {
        Self::new(ErrorKind::ZeroStride)
    }

    /// Creates a zero-application-limit error.
    #[must_use]
    pub fn zero_limit() -> Self {
        Self::new(ErrorKind::ZeroLimit)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Pattern has zero width or height.
    #[error("pattern {0} has zero width or height")]
    EmptyPattern(PatternId),

    /// Pattern rows have inconsistent lengths.
    #[error("pattern {pattern} row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        /// The offending pattern.
        pattern: PatternId,
        /// Index of the first row with the wrong length.
        row: usize,
        /// Expected row length (the pattern width).
        expected: usize,
        /// Actual row length.
        actual: usize,
    },

    /// Pattern cell buffer does not match its declared dimensions.
    #[error("pattern {pattern} has {actual} cells, expected {expected}")]
    MalformedPattern {
        /// The offending pattern.
        pattern: PatternId,
        /// Expected cell count (width x height).
        expected: usize,
        /// Actual cell count.
        actual: usize,
    },

    /// Part has no patterns (needs at least a match template).
    #[error("part {0} has no patterns")]
    EmptyPart(PartId),

    /// Rule has no parts.
    #[error("rule {0} has no parts")]
    EmptyRule(RuleId),

    /// Stride must be at least 1.
    #[error("stride must be at least 1")]
    ZeroStride,

    /// Application limit must be at least 1.
    #[error("application limit must be at least 1")]
    ZeroLimit,
}
