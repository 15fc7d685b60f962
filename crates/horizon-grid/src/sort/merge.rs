//! Merge sort.

use std::cmp::Ordering;

use super::insertion::insertion_sort_by;

/// Runs at or below this length are finished with insertion sort.
const SMALL_RUN: usize = 16;

/// Stable top-down merge sort.
///
/// Allocates one auxiliary buffer of at most `v.len() / 2` elements for the
/// duration of the call. O(n log n) comparisons.
pub fn merge_sort<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let mut buffer = Vec::with_capacity(v.len() / 2 + 1);
    merge_sort_by(v, &mut buffer, &mut compare);
}

fn merge_sort_by<T, F>(v: &mut [T], buffer: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= SMALL_RUN {
        insertion_sort_by(v, compare);
        return;
    }

    let mid = len / 2;
    merge_sort_by(&mut v[..mid], buffer, compare);
    merge_sort_by(&mut v[mid..], buffer, compare);

    // Halves already in order.
    if compare(&v[mid - 1], &v[mid]) != Ordering::Greater {
        return;
    }

    buffer.clear();
    buffer.extend_from_slice(&v[..mid]);

    // The write cursor never passes the right read cursor.
    let (mut left, mut right, mut out) = (0, mid, 0);
    while left < buffer.len() && right < len {
        if compare(&v[right], &buffer[left]) == Ordering::Less {
            v[out] = v[right].clone();
            right += 1;
        } else {
            v[out] = buffer[left].clone();
            left += 1;
        }
        out += 1;
    }
    while left < buffer.len() {
        v[out] = buffer[left].clone();
        left += 1;
        out += 1;
    }
}
