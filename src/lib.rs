//! # Keysort
//!
//! `keysort` implements twelve sorting algorithms behind one contract: given a
//! slice, a key-extraction function and a direction flag, return a new vector
//! holding the same elements ordered by key.
//!
//! ```rust
//! use keysort::prelude::*;
//!
//! let keys = vec![5, 3, 8, 3, 1];
//!
//! assert_eq!(heap_sort(&keys, |&k| k, false), vec![1, 3, 3, 5, 8]);
//! assert_eq!(heap_sort(&keys, |&k| k, true), vec![8, 5, 3, 3, 1]);
//! ```
//!
//! ## The contract
//!
//! - The caller's slice is never modified. Every call clones the elements into
//!   a private working copy, even for the algorithms that work in place.
//! - The key function runs once per element and must be pure.
//! - `reverse = true` reverses the ascending result. For unstable algorithms
//!   this mirrors the ascending tie order rather than re-sorting descending.
//! - Empty and single-element inputs return without any comparison.
//!
//! ## Algorithms
//!
//! | Family | Functions | Key bound |
//! |---|---|---|
//! | Comparison | [`adaptive_hybrid_sort`], [`binary_insertion_sort`], [`selection_sort`], [`comb_sort`], [`gnome_sort`], [`quick_sort`], [`heap_sort`], [`tree_sort`], [`bitonic_sort`] | `Ord` |
//! | Distribution | [`pigeonhole_sort`], [`radix_sort`] | [`IntegerKey`], non-negative |
//! | Distribution | [`bucket_sort`] | [`NumericKey`], finite |
//!
//! Comparison sorts cannot fail. Distribution sorts validate every key first
//! and return a [`SortError`] without producing output when one is out of range.
//!
//! ## Catalog
//!
//! [`Algorithm`] enumerates all twelve with their names, stability and key
//! domain, and can run any of them:
//!
//! ```rust
//! use keysort::Algorithm;
//!
//! for algorithm in Algorithm::ALL {
//!     let sorted = algorithm.sort(&[4u32, 1, 3, 2], |&k| k, false).unwrap();
//!     assert_eq!(sorted, vec![1, 2, 3, 4], "{algorithm}");
//! }
//! ```
//!
//! The [`bench`] module holds the harness that times the catalog on
//! bibliographic workloads; the `keysort-bench` binary drives it.

pub mod bench;
pub mod catalog;
pub mod comparison;
pub mod core;
pub mod distribution;
pub mod error;
pub mod tree;

pub use catalog::{Algorithm, KeyDomain};
pub use comparison::{
    adaptive_hybrid_sort, binary_insertion_sort, bitonic_sort, comb_sort, gnome_sort, heap_sort,
    quick_sort, selection_sort,
};
pub use crate::core::{IntegerKey, NumericKey};
pub use distribution::{
    bucket_sort, bucket_sort_with_buckets, pigeonhole_sort, radix_sort, radix_sort_with_base,
};
pub use error::{SortError, SortResult};
pub use tree::tree_sort;

pub mod prelude {
    pub use crate::catalog::{Algorithm, KeyDomain};
    pub use crate::comparison::{
        adaptive_hybrid_sort, binary_insertion_sort, bitonic_sort, comb_sort, gnome_sort,
        heap_sort, quick_sort, selection_sort,
    };
    pub use crate::core::{IntegerKey, NumericKey};
    pub use crate::distribution::{
        bucket_sort, bucket_sort_with_buckets, pigeonhole_sort, radix_sort, radix_sort_with_base,
    };
    pub use crate::error::{SortError, SortResult};
    pub use crate::tree::tree_sort;
}
