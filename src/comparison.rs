//! Comparison-based sorts.
//!
//! All of these accept any totally ordered key and never fail. Each one copies
//! the caller's slice on entry (see [`crate::core`]), sorts the copy ascending,
//! and reverses the result when asked to.
//!
//! | Function | Stable | Worst case |
//! |---|---|---|
//! | [`adaptive_hybrid_sort`] | yes | O(n log n) |
//! | [`binary_insertion_sort`] | yes | O(n²) moves |
//! | [`selection_sort`] | no | O(n²) |
//! | [`comb_sort`] | no | O(n²) |
//! | [`gnome_sort`] | no | O(n²) |
//! | [`quick_sort`] | no | O(n²) |
//! | [`heap_sort`] | no | O(n log n) |
//! | [`bitonic_sort`] | no | O(n log² n) |

use crate::core::{Keyed, decorate, finish};
use log::{debug, trace};

/// Shortest run the adaptive hybrid sort keeps before merging.
pub const MIN_RUN: usize = 32;

/// Factor by which comb sort shrinks its gap on every pass.
pub const COMB_SHRINK: f64 = 1.3;

/// Copies, sorts with `algorithm`, and unwraps. Inputs shorter than two skip the sort.
fn sort_in_place<T, K, F>(
    data: &[T],
    key: F,
    reverse: bool,
    algorithm: fn(&mut [Keyed<K, T>]),
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> K,
{
    let mut items = decorate(data, key);
    if items.len() > 1 {
        algorithm(&mut items);
    }
    finish(items, reverse)
}

/// Run-detecting merge sort with binary-insertion run extension.
///
/// Scans left to right for maximal non-descending runs; strictly descending runs
/// are reversed in place. Runs shorter than [`MIN_RUN`] are extended with binary
/// insertion sort up to `MIN_RUN` elements (or the end of the input). The runs are
/// then merged pairwise, left-biased on ties, until one remains. Stable.
///
/// # Examples
///
/// ```
/// use keysort::comparison::adaptive_hybrid_sort;
///
/// let words = vec!["pear", "fig", "banana", "kiwi"];
/// let sorted = adaptive_hybrid_sort(&words, |w| w.len(), false);
///
/// assert_eq!(sorted, vec!["fig", "pear", "kiwi", "banana"]);
/// ```
pub fn adaptive_hybrid_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let items = decorate(data, key);
    let sorted = if items.len() > 1 {
        adaptive_hybrid(items)
    } else {
        items
    };
    finish(sorted, reverse)
}

fn adaptive_hybrid<K: Ord, T>(mut items: Vec<Keyed<K, T>>) -> Vec<Keyed<K, T>> {
    let n = items.len();
    let mut run_starts = Vec::new();
    let mut i = 0;

    while i < n {
        let start = i;
        run_starts.push(start);
        i += 1;
        if i == n {
            break;
        }

        if items[i].key >= items[i - 1].key {
            while i < n && items[i].key >= items[i - 1].key {
                i += 1;
            }
        } else {
            while i < n && items[i].key < items[i - 1].key {
                i += 1;
            }
            items[start..i].reverse();
        }

        if i - start < MIN_RUN {
            let end = (start + MIN_RUN).min(n);
            binary_insertion(&mut items[start..end]);
            i = end;
        }
    }

    trace!("adaptive hybrid sort: {} runs over {} elements", run_starts.len(), n);

    let mut pieces = Vec::with_capacity(run_starts.len());
    for &start in run_starts.iter().rev() {
        pieces.push(items.split_off(start));
    }
    pieces.reverse();

    while pieces.len() > 1 {
        let mut merged = Vec::with_capacity(pieces.len().div_ceil(2));
        let mut iter = pieces.into_iter();
        while let Some(left) = iter.next() {
            match iter.next() {
                Some(right) => merged.push(merge(left, right)),
                None => merged.push(left),
            }
        }
        pieces = merged;
    }

    pieces.pop().unwrap_or_default()
}

/// Stable two-way merge. On equal keys the left element goes first.
fn merge<K: Ord, T>(left: Vec<Keyed<K, T>>, right: Vec<Keyed<K, T>>) -> Vec<Keyed<K, T>> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.key <= r.key,
            _ => break,
        };
        out.extend(if take_left { left.next() } else { right.next() });
    }

    out.extend(left);
    out.extend(right);
    out
}

/// Binary insertion sort.
///
/// Each element is inserted after the last element of the sorted prefix whose key
/// is less than or equal to its own, so equal keys keep their input order. Stable.
pub fn binary_insertion_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(data, key, reverse, binary_insertion)
}

fn binary_insertion<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    for i in 1..v.len() {
        let (sorted, rest) = v.split_at(i);
        let pos = sorted.partition_point(|e| e.key <= rest[0].key);
        v[pos..=i].rotate_right(1);
    }
}

/// Selection sort. Not stable: the swap can carry an element past its equals.
pub fn selection_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(data, key, reverse, selection)
}

fn selection<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    let n = v.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if v[j].key < v[min].key {
                min = j;
            }
        }
        v.swap(i, min);
    }
}

/// Comb sort.
///
/// Bubble sort over a gap that starts at the input length and shrinks by
/// [`COMB_SHRINK`] before every pass, never below 1. Finishes once a pass at gap 1
/// makes no swaps. Not stable.
pub fn comb_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(data, key, reverse, comb)
}

fn comb<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    let n = v.len();
    let mut gap = n;
    let mut swapped = true;

    while gap > 1 || swapped {
        gap = ((gap as f64 / COMB_SHRINK) as usize).max(1);
        swapped = false;
        for i in 0..n - gap {
            if v[i].key > v[i + gap].key {
                v.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}

/// Gnome sort. Not stable.
pub fn gnome_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(data, key, reverse, gnome)
}

fn gnome<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    let mut i = 0;
    while i < v.len() {
        if i == 0 || v[i].key >= v[i - 1].key {
            i += 1;
        } else {
            v.swap(i, i - 1);
            i -= 1;
        }
    }
}

/// Hoare-style quicksort with a middle-element pivot.
///
/// The pivot choice is deterministic, so adversarial inputs still cost O(n²)
/// comparisons, but the partitions are processed from an explicit stack
/// (smaller side first), which keeps the auxiliary space at O(log n). Not stable.
///
/// # Examples
///
/// ```
/// use keysort::comparison::quick_sort;
///
/// let sorted = quick_sort(&[5, 3, 8, 3, 1], |&x| x, true);
/// assert_eq!(sorted, vec![8, 5, 3, 3, 1]);
/// ```
pub fn quick_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(data, key, reverse, quick)
}

pub(crate) fn quick<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    let mut stack = vec![(0, v.len())];

    while let Some((lo, hi)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }

        let (left_end, right_start) = hoare_partition(&mut v[lo..hi]);
        let left = (lo, lo + left_end);
        let right = (lo + right_start, hi);

        // Pop the smaller side next.
        if left.1 - left.0 > right.1 - right.0 {
            stack.push(left);
            stack.push(right);
        } else {
            stack.push(right);
            stack.push(left);
        }
    }
}

/// Partitions `v` around the key of its middle element.
///
/// Returns `(left_end, right_start)`: every key in `v[..left_end]` is `<=` the
/// pivot, every key in `v[right_start..]` is `>=` it, and anything in between
/// equals it. The pivot element may move during swaps, so its index is tracked.
fn hoare_partition<K: Ord, T>(v: &mut [Keyed<K, T>]) -> (usize, usize) {
    let mut pivot = (v.len() - 1) / 2;
    let mut i = 0;
    let mut j = v.len();

    while i < j {
        while v[i].key < v[pivot].key {
            i += 1;
        }
        while v[j - 1].key > v[pivot].key {
            j -= 1;
        }
        if i < j {
            v.swap(i, j - 1);
            if pivot == i {
                pivot = j - 1;
            } else if pivot == j - 1 {
                pivot = i;
            }
            i += 1;
            j -= 1;
        }
    }

    (j, i)
}

/// Heap sort over an in-place max-heap. Not stable.
pub fn heap_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(data, key, reverse, heap)
}

fn heap<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    let n = v.len();
    for root in (0..n / 2).rev() {
        sift_down(v, root, n);
    }
    for end in (1..n).rev() {
        v.swap(0, end);
        sift_down(v, 0, end);
    }
}

fn sift_down<K: Ord, T>(v: &mut [Keyed<K, T>], mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && v[left].key > v[largest].key {
            largest = left;
        }
        if right < len && v[right].key > v[largest].key {
            largest = right;
        }
        if largest == root {
            return;
        }

        v.swap(root, largest);
        root = largest;
    }
}

/// Bitonic sorting network.
///
/// Defined for power-of-two lengths only. Any other length is sorted with
/// [`quick_sort`]'s partitioning instead; this is a normal path, not an error.
/// Not stable.
pub fn bitonic_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_in_place(data, key, reverse, bitonic_or_quick)
}

fn bitonic_or_quick<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    if v.len().is_power_of_two() {
        bitonic(v);
    } else {
        debug!(
            "bitonic sort: length {} is not a power of two, falling back to quicksort",
            v.len()
        );
        quick(v);
    }
}

/// Iterative form of the network: stage `k` builds bitonic blocks of size `k`,
/// stride `j` compare-exchanges within them. Blocks with bit `k` clear sort up.
fn bitonic<K: Ord, T>(v: &mut [Keyed<K, T>]) {
    let n = v.len();
    let mut k = 2;
    while k <= n {
        let mut j = k / 2;
        while j > 0 {
            for i in 0..n {
                let partner = i ^ j;
                if partner > i {
                    let ascending = i & k == 0;
                    if (v[i].key > v[partner].key) == ascending {
                        v.swap(i, partner);
                    }
                }
            }
            j /= 2;
        }
        k *= 2;
    }
}
