//! Core traits and types shared by every algorithm.
//!
//! This module defines:
//! - [`NumericKey`] and [`IntegerKey`]: the key domains required by the distribution sorts.
//! - `Keyed`: an element paired with its extracted key.
//! - `decorate` / `finish`: copy-on-entry and the final (optionally reversed) unwrap.

/// An element paired with the key extracted from it.
///
/// Algorithms move `Keyed` values around instead of calling the key function on
/// every comparison, so the key function runs exactly once per element.
#[derive(Debug)]
pub(crate) struct Keyed<K, T> {
    pub key: K,
    pub item: T,
}

/// Copies the caller's elements and extracts their keys.
///
/// The caller's slice is never touched again; every algorithm works on the
/// returned vector.
pub(crate) fn decorate<T, K, F>(data: &[T], key: F) -> Vec<Keyed<K, T>>
where
    T: Clone,
    F: Fn(&T) -> K,
{
    data.iter()
        .map(|item| Keyed {
            key: key(item),
            item: item.clone(),
        })
        .collect()
}

/// Strips the keys, reversing the ascending result when `reverse` is set.
///
/// Reversal happens after sorting, so for unstable algorithms the order of
/// tied elements in descending mode is simply the mirror of ascending mode.
pub(crate) fn finish<K, T>(mut sorted: Vec<Keyed<K, T>>, reverse: bool) -> Vec<T> {
    if reverse {
        sorted.reverse();
    }
    sorted.into_iter().map(|k| k.item).collect()
}

/// Reorders `data` so that position `i` receives the element previously at `indices[i]`.
///
/// Runs in place by following permutation cycles. `indices` must be a permutation
/// of `0..data.len()`.
pub(crate) fn apply_permutation<E>(data: &mut [E], mut indices: Vec<usize>) {
    debug_assert_eq!(data.len(), indices.len());
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // placed
            current = next;
        }
        indices[current] = current;
    }
}

/// A key that bucket sort can place on a number line.
///
/// Implemented for every primitive integer and float type. Keys are compared
/// exactly with `PartialOrd`; `to_f64` is only used to pick a bucket, so
/// precision loss on very large integers never breaks the final order.
pub trait NumericKey: Copy + PartialOrd {
    /// Converts the key to `f64` for bucket placement.
    fn to_f64(self) -> f64;
}

/// A key that pigeonhole and radix sort can use as an integer.
///
/// The trait bound rules out non-integer keys at compile time. Negativity is
/// checked at runtime, before any output is produced.
pub trait IntegerKey: NumericKey + Ord {
    /// Widens the key to `i128` without loss.
    fn to_i128(self) -> i128;
}

macro_rules! impl_numeric_key {
    ($($t:ty)*) => ($(
        impl NumericKey for $t {
            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*)
}

macro_rules! impl_integer_key {
    ($($t:ty)*) => ($(
        impl IntegerKey for $t {
            #[inline(always)]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*)
}

impl_numeric_key! {
    u8 u16 u32 u64 usize
    i8 i16 i32 i64 i128 isize
    f32 f64
}

impl_integer_key! {
    u8 u16 u32 u64 usize
    i8 i16 i32 i64 i128 isize
}
