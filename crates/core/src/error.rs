//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Only precondition failures live here. Surprising-but-defined outcomes
/// (an extremum query over an empty catalog, every score non-positive) are
/// expressed in return values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Parallel input columns did not all have the declared length.
    #[error("column `{column}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A position was outside the container bounds.
    #[error("position {position} out of bounds (len: {len})")]
    PositionOutOfBounds { position: usize, len: usize },
}

impl CatalogError {
    pub fn length_mismatch(column: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            column,
            expected,
            actual,
        }
    }

    pub fn out_of_bounds(position: usize, len: usize) -> Self {
        Self::PositionOutOfBounds { position, len }
    }
}
