//! Typed sort errors.
//!
//! Every variant is raised before the algorithm produces output: keys are
//! validated up front and options are checked on entry, so a failing call never
//! leaves a partially sorted result behind.

use crate::catalog::Algorithm;
use thiserror::Error;

/// Convenience alias for results returned by the distribution sorts.
pub type SortResult<T> = Result<T, SortError>;

/// Failure of a sort call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A key was negative where only non-negative integers are allowed.
    #[error("{algorithm} requires non-negative integer keys, found {value} at position {index}")]
    NegativeKey {
        algorithm: Algorithm,
        index: usize,
        value: i128,
    },

    /// A numeric key was NaN or infinite.
    #[error("{algorithm} requires finite numeric keys, found a non-finite key at position {index}")]
    NonFiniteKey { algorithm: Algorithm, index: usize },

    /// The key range would need more pigeonholes than the allocation limit.
    #[error("key range spans {span} values, more than the {limit} pigeonholes allowed")]
    RangeTooWide { span: u128, limit: usize },

    /// An algorithm option was out of its accepted range.
    #[error("{algorithm}: {option} must be within {min}..={max}, got {value}")]
    InvalidOption {
        algorithm: Algorithm,
        option: &'static str,
        min: usize,
        max: usize,
        value: usize,
    },

    /// A distribution algorithm was asked to sort by a key that is only ordered.
    #[error("{algorithm} needs integer keys and cannot sort by an ordered-only key")]
    UnsupportedKey { algorithm: Algorithm },
}
