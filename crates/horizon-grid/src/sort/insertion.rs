//! Insertion sort.

use std::cmp::Ordering;

/// Stable in-place insertion sort.
///
/// Each element is shifted left past every strictly greater element, so
/// equal elements keep their relative order. O(n²) comparisons in the worst
/// case, O(n) on already sorted input.
pub fn insertion_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort_by(v, &mut compare);
}

pub(super) fn insertion_sort_by<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[i]) == Ordering::Greater {
            j -= 1;
        }
        if j < i {
            v[j..=i].rotate_right(1);
        }
    }
}
