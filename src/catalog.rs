//! The algorithm catalog.
//!
//! [`Algorithm`] names each of the twelve sorts, describes what it needs from
//! the key and whether it is stable, and dispatches to the matching function.

use crate::comparison::{
    adaptive_hybrid_sort, binary_insertion_sort, bitonic_sort, comb_sort, gnome_sort, heap_sort,
    quick_sort, selection_sort,
};
use crate::core::IntegerKey;
use crate::distribution::{bucket_sort, pigeonhole_sort, radix_sort};
use crate::error::{SortError, SortResult};
use crate::tree::tree_sort;
use std::fmt;
use std::str::FromStr;

/// What an algorithm requires of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyDomain {
    /// Any totally ordered key.
    Ordered,
    /// Any totally ordered key; power-of-two lengths use the native network,
    /// other lengths fall back to quicksort.
    OrderedPowerOfTwo,
    /// Integer keys that must all be `>= 0`.
    NonNegativeInteger,
    /// Finite integer or floating point keys.
    Numeric,
}

impl KeyDomain {
    /// `true` when a key that is merely `Ord` is enough.
    pub fn accepts_ordered(self) -> bool {
        matches!(self, KeyDomain::Ordered | KeyDomain::OrderedPowerOfTwo)
    }
}

/// One of the twelve sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    AdaptiveHybrid,
    Comb,
    Selection,
    Tree,
    Pigeonhole,
    Bucket,
    Quick,
    Heap,
    Bitonic,
    Gnome,
    BinaryInsertion,
    Radix,
}

impl Algorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Algorithm; 12] = [
        Algorithm::AdaptiveHybrid,
        Algorithm::Comb,
        Algorithm::Selection,
        Algorithm::Tree,
        Algorithm::Pigeonhole,
        Algorithm::Bucket,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bitonic,
        Algorithm::Gnome,
        Algorithm::BinaryInsertion,
        Algorithm::Radix,
    ];

    /// Human-readable name, as printed in reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AdaptiveHybrid => "Adaptive Hybrid Sort",
            Algorithm::Comb => "Comb Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Tree => "Tree Sort",
            Algorithm::Pigeonhole => "Pigeonhole Sort",
            Algorithm::Bucket => "Bucket Sort",
            Algorithm::Quick => "Quicksort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Bitonic => "Bitonic Sort",
            Algorithm::Gnome => "Gnome Sort",
            Algorithm::BinaryInsertion => "Binary Insertion Sort",
            Algorithm::Radix => "Radix Sort",
        }
    }

    /// Short kebab-case identifier, accepted by [`FromStr`] and the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::AdaptiveHybrid => "adaptive-hybrid",
            Algorithm::Comb => "comb",
            Algorithm::Selection => "selection",
            Algorithm::Tree => "tree",
            Algorithm::Pigeonhole => "pigeonhole",
            Algorithm::Bucket => "bucket",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Bitonic => "bitonic",
            Algorithm::Gnome => "gnome",
            Algorithm::BinaryInsertion => "binary-insertion",
            Algorithm::Radix => "radix",
        }
    }

    /// Whether equal keys keep their input order (in ascending mode).
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::AdaptiveHybrid
                | Algorithm::BinaryInsertion
                | Algorithm::Tree
                | Algorithm::Pigeonhole
                | Algorithm::Bucket
                | Algorithm::Radix
        )
    }

    pub fn domain(self) -> KeyDomain {
        match self {
            Algorithm::Pigeonhole | Algorithm::Radix => KeyDomain::NonNegativeInteger,
            Algorithm::Bucket => KeyDomain::Numeric,
            Algorithm::Bitonic => KeyDomain::OrderedPowerOfTwo,
            _ => KeyDomain::Ordered,
        }
    }

    /// `true` for pigeonhole, bucket and radix sort.
    pub fn is_distribution(self) -> bool {
        !self.domain().accepts_ordered()
    }

    /// Sorts `data` by an integer key with this algorithm.
    ///
    /// Integer keys satisfy every algorithm's key bound, so all twelve can run.
    /// Bucket and radix sort use their default options.
    ///
    /// # Errors
    ///
    /// Whatever the selected distribution sort reports for out-of-domain keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysort::catalog::Algorithm;
    ///
    /// for algorithm in Algorithm::ALL {
    ///     let sorted = algorithm.sort(&[5, 3, 8, 3, 1], |&x| x, false).unwrap();
    ///     assert_eq!(sorted, vec![1, 3, 3, 5, 8]);
    /// }
    /// ```
    pub fn sort<T, K, F>(self, data: &[T], key: F, reverse: bool) -> SortResult<Vec<T>>
    where
        T: Clone,
        K: IntegerKey,
        F: Fn(&T) -> K,
    {
        match self {
            Algorithm::Pigeonhole => pigeonhole_sort(data, key, reverse),
            Algorithm::Bucket => bucket_sort(data, key, reverse),
            Algorithm::Radix => radix_sort(data, key, reverse),
            _ => self.sort_ordered(data, key, reverse),
        }
    }

    /// Sorts `data` by a key that is only known to be totally ordered.
    ///
    /// # Errors
    ///
    /// [`SortError::UnsupportedKey`] for the distribution algorithms.
    pub fn sort_ordered<T, K, F>(self, data: &[T], key: F, reverse: bool) -> SortResult<Vec<T>>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        let sorted = match self {
            Algorithm::AdaptiveHybrid => adaptive_hybrid_sort(data, key, reverse),
            Algorithm::Comb => comb_sort(data, key, reverse),
            Algorithm::Selection => selection_sort(data, key, reverse),
            Algorithm::Tree => tree_sort(data, key, reverse),
            Algorithm::Quick => quick_sort(data, key, reverse),
            Algorithm::Heap => heap_sort(data, key, reverse),
            Algorithm::Bitonic => bitonic_sort(data, key, reverse),
            Algorithm::Gnome => gnome_sort(data, key, reverse),
            Algorithm::BinaryInsertion => binary_insertion_sort(data, key, reverse),
            Algorithm::Pigeonhole | Algorithm::Bucket | Algorithm::Radix => {
                return Err(SortError::UnsupportedKey { algorithm: self });
            }
        };
        Ok(sorted)
    }

    /// Sorts with `ordered_key` for comparison algorithms and `integer_key` for
    /// distribution algorithms.
    ///
    /// Useful when the natural key is composite (say `(year, title)`) and the
    /// distribution sorts need an order-preserving integer encoding of it.
    ///
    /// # Errors
    ///
    /// Whatever the selected distribution sort reports for out-of-domain keys.
    pub fn sort_with_keys<T, O, I, FO, FI>(
        self,
        data: &[T],
        ordered_key: FO,
        integer_key: FI,
        reverse: bool,
    ) -> SortResult<Vec<T>>
    where
        T: Clone,
        O: Ord,
        I: IntegerKey,
        FO: Fn(&T) -> O,
        FI: Fn(&T) -> I,
    {
        if self.is_distribution() {
            self.sort(data, integer_key, reverse)
        } else {
            self.sort_ordered(data, ordered_key, reverse)
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}`")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts the slug (`binary-insertion`) or the display name
    /// (`Binary Insertion Sort`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.slug().eq_ignore_ascii_case(wanted) || a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
