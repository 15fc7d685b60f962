//! Shell sort.

use std::cmp::Ordering;

/// Ciura's experimentally derived gap sequence.
const CIURA_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Unstable in-place shell sort.
///
/// Runs gapped insertion passes over a decreasing gap sequence ending in 1.
/// Long-gap passes can move equal elements past each other.
pub fn shell_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for gap in gaps(len) {
        for i in gap..len {
            let mut j = i;
            while j >= gap && compare(&v[j - gap], &v[j]) == Ordering::Greater {
                v.swap(j - gap, j);
                j -= gap;
            }
        }
    }
}

/// Gaps smaller than `len`, largest first. Ciura's sequence is extended by a
/// factor of 2.25 for long inputs.
fn gaps(len: usize) -> Vec<usize> {
    let mut extended = Vec::new();
    let mut gap = CIURA_GAPS[0];
    loop {
        gap = gap * 9 / 4;
        if gap >= len {
            break;
        }
        extended.push(gap);
    }
    extended.reverse();
    extended.extend(CIURA_GAPS.iter().copied().filter(|&gap| gap < len));
    extended
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let mut v: Vec<i32> = (0..2000).map(|i| (i * 7919) % 2003).collect();
        shell_sort(&mut v, |a, b| a.cmp(b));
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_gaps_end_with_one() {
        assert_eq!(gaps(2), vec![1]);
        assert_eq!(gaps(24), vec![23, 10, 4, 1]);
        let long = gaps(10_000);
        assert_eq!(long[..3], [7983, 3548, 1577]);
        assert_eq!(long.last(), Some(&1));
        assert!(long.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_descending_comparator() {
        let mut v = vec![3, 9, 1, 7];
        shell_sort(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, vec![9, 7, 3, 1]);
    }
}
