//! Distribution (non-comparison) sorts: pigeonhole, bucket and radix.
//!
//! These restrict the key domain. Pigeonhole and radix sort need non-negative
//! integers, bucket sort needs finite numbers. The integer/numeric part is
//! enforced by the [`IntegerKey`] and [`NumericKey`] bounds; the runtime part
//! (sign, finiteness) is checked for every key before anything is moved, so a
//! rejected call returns an error and no output.
//!
//! All three place elements with a stable counting pass, which makes each of
//! them stable.

use crate::catalog::Algorithm;
use crate::core::{IntegerKey, Keyed, NumericKey, apply_permutation, decorate, finish};
use crate::error::{SortError, SortResult};
use cuneiform::cuneiform;
use log::debug;

/// Number of buckets used by [`bucket_sort`].
pub const DEFAULT_BUCKETS: usize = 10;

/// Upper bound accepted by [`bucket_sort_with_buckets`].
pub const MAX_BUCKETS: usize = 1 << 24;

/// Base used by [`radix_sort`].
pub const DEFAULT_RADIX_BASE: usize = 10;

/// Largest base accepted by [`radix_sort_with_base`].
pub const MAX_RADIX_BASE: usize = 256;

/// Largest key span (`max - min + 1`) pigeonhole sort will allocate holes for.
pub const MAX_PIGEONHOLES: usize = 1 << 27;

// Cache-aligned digit histogram.
#[cuneiform]
struct RadixCounts {
    data: [usize; MAX_RADIX_BASE],
}

/// Pigeonhole sort for non-negative integer keys.
///
/// Allocates one hole per integer between the smallest and largest key, so the
/// memory cost follows the key range rather than the element count. Stable.
///
/// # Errors
///
/// - [`SortError::NegativeKey`] if any key is below zero.
/// - [`SortError::RangeTooWide`] if the key span exceeds [`MAX_PIGEONHOLES`].
///
/// # Examples
///
/// ```
/// use keysort::distribution::pigeonhole_sort;
///
/// let sorted = pigeonhole_sort(&[5, 3, 8, 3, 1], |&x| x, false).unwrap();
/// assert_eq!(sorted, vec![1, 3, 3, 5, 8]);
///
/// assert!(pigeonhole_sort(&[3, -1, 5], |&x| x, false).is_err());
/// ```
pub fn pigeonhole_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> SortResult<Vec<T>>
where
    T: Clone,
    K: IntegerKey,
    F: Fn(&T) -> K,
{
    let mut items = decorate(data, key);
    let values = non_negative(Algorithm::Pigeonhole, &items)?;

    if items.len() > 1 {
        let (min, max) = values
            .iter()
            .fold((u128::MAX, 0), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = max - min + 1;
        if span > MAX_PIGEONHOLES as u128 {
            debug!("pigeonhole sort: rejecting key span {span}");
            return Err(SortError::RangeTooWide {
                span,
                limit: MAX_PIGEONHOLES,
            });
        }

        let slots: Vec<usize> = values.iter().map(|&v| (v - min) as usize).collect();
        let mut holes = vec![0; span as usize];
        let order = counting_order(&slots, &mut holes);
        apply_permutation(&mut items, order);
    }

    Ok(finish(items, reverse))
}

/// Bucket sort with [`DEFAULT_BUCKETS`] buckets.
///
/// See [`bucket_sort_with_buckets`].
pub fn bucket_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> SortResult<Vec<T>>
where
    T: Clone,
    K: NumericKey,
    F: Fn(&T) -> K,
{
    bucket_sort_with_buckets(data, key, reverse, DEFAULT_BUCKETS)
}

/// Bucket sort for finite numeric keys.
///
/// Keys are normalised to `[0, 1]` with the observed minimum and maximum and
/// scaled to a bucket index; the top of the range shares the last bucket. When
/// every key is equal they all land in the first bucket. Each bucket is then
/// insertion-sorted on the exact key. Stable.
///
/// # Errors
///
/// - [`SortError::InvalidOption`] if `buckets` is 0 or above [`MAX_BUCKETS`].
/// - [`SortError::NonFiniteKey`] if any key is NaN or infinite.
pub fn bucket_sort_with_buckets<T, K, F>(
    data: &[T],
    key: F,
    reverse: bool,
    buckets: usize,
) -> SortResult<Vec<T>>
where
    T: Clone,
    K: NumericKey,
    F: Fn(&T) -> K,
{
    check_option(Algorithm::Bucket, "buckets", buckets, 1, MAX_BUCKETS)?;
    let mut items = decorate(data, key);
    let values = finite(Algorithm::Bucket, &items)?;

    if items.len() > 1 {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        // Halved so that max - min cannot overflow to infinity.
        let half_min = min / 2.0;
        let range = if max > min { max / 2.0 - half_min } else { 1.0 };
        let scale = buckets as f64;

        let slots: Vec<usize> = values
            .iter()
            .map(|&v| (((v / 2.0 - half_min) / range * scale) as usize).min(buckets - 1))
            .collect();

        let mut ends = vec![0; buckets];
        let order = counting_order(&slots, &mut ends);
        apply_permutation(&mut items, order);

        let mut start = 0;
        for &end in &ends {
            insertion(&mut items[start..end]);
            start = end;
        }
    }

    Ok(finish(items, reverse))
}

/// LSD radix sort in base [`DEFAULT_RADIX_BASE`].
///
/// See [`radix_sort_with_base`].
pub fn radix_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> SortResult<Vec<T>>
where
    T: Clone,
    K: IntegerKey,
    F: Fn(&T) -> K,
{
    radix_sort_with_base(data, key, reverse, DEFAULT_RADIX_BASE)
}

/// LSD radix sort for non-negative integer keys.
///
/// One stable counting pass per digit, least significant first, stopping once
/// the largest key has no digits left. Stable.
///
/// # Errors
///
/// - [`SortError::InvalidOption`] if `base` is outside `2..=MAX_RADIX_BASE`.
/// - [`SortError::NegativeKey`] if any key is below zero.
///
/// # Examples
///
/// ```
/// use keysort::distribution::radix_sort_with_base;
///
/// let sorted = radix_sort_with_base(&[170u32, 45, 75, 90, 802, 24, 2, 66], |&x| x, false, 16).unwrap();
/// assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn radix_sort_with_base<T, K, F>(
    data: &[T],
    key: F,
    reverse: bool,
    base: usize,
) -> SortResult<Vec<T>>
where
    T: Clone,
    K: IntegerKey,
    F: Fn(&T) -> K,
{
    check_option(Algorithm::Radix, "base", base, 2, MAX_RADIX_BASE)?;
    let mut items = decorate(data, key);
    let mut values = non_negative(Algorithm::Radix, &items)?;

    if items.len() > 1 {
        let max = values.iter().copied().max().unwrap_or(0);
        let radix = base as u128;
        let mut counts = RadixCounts {
            data: [0; MAX_RADIX_BASE],
        };
        let mut slots = vec![0; items.len()];
        let mut exp: u128 = 1;

        while max / exp > 0 {
            slots
                .iter_mut()
                .zip(values.iter())
                .for_each(|(slot, &v)| *slot = ((v / exp) % radix) as usize);

            counts.data.fill(0);
            let order = counting_order(&slots, &mut counts.data[..base]);
            values = order.iter().map(|&i| values[i]).collect();
            apply_permutation(&mut items, order);

            match exp.checked_mul(radix) {
                Some(next) => exp = next,
                None => break,
            }
        }
    }

    Ok(finish(items, reverse))
}

/// Stable counting placement.
///
/// `counts` must be zeroed and have one entry per slot value. Returns the gather
/// order listing elements slot by slot, in input order within each slot. On
/// return `counts[s]` holds the end offset of slot `s`.
fn counting_order(slots: &[usize], counts: &mut [usize]) -> Vec<usize> {
    slots.iter().for_each(|&s| counts[s] += 1);

    let mut sum = 0;
    counts.iter_mut().for_each(|count| {
        let n = *count;
        *count = sum;
        sum += n;
    });

    let mut order = vec![0; slots.len()];
    slots.iter().enumerate().for_each(|(i, &s)| {
        order[counts[s]] = i;
        counts[s] += 1;
    });
    order
}

/// Stable insertion sort on the exact (already validated) keys.
fn insertion<K: PartialOrd, T>(v: &mut [Keyed<K, T>]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j - 1].key > v[j].key {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn non_negative<K: IntegerKey, T>(
    algorithm: Algorithm,
    items: &[Keyed<K, T>],
) -> SortResult<Vec<u128>> {
    items
        .iter()
        .enumerate()
        .map(|(index, e)| {
            let value = e.key.to_i128();
            u128::try_from(value).map_err(|_| SortError::NegativeKey {
                algorithm,
                index,
                value,
            })
        })
        .collect::<SortResult<Vec<u128>>>()
        .inspect_err(|e| debug!("{e}"))
}

fn finite<K: NumericKey, T>(algorithm: Algorithm, items: &[Keyed<K, T>]) -> SortResult<Vec<f64>> {
    items
        .iter()
        .enumerate()
        .map(|(index, e)| {
            let value = e.key.to_f64();
            if value.is_finite() {
                Ok(value)
            } else {
                Err(SortError::NonFiniteKey { algorithm, index })
            }
        })
        .collect::<SortResult<Vec<f64>>>()
        .inspect_err(|e| debug!("{e}"))
}

fn check_option(
    algorithm: Algorithm,
    option: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> SortResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SortError::InvalidOption {
            algorithm,
            option,
            min,
            max,
            value,
        })
    }
}
