//! Top-down merge sort with an insertion sort cutover, expressed purely in terms of
//! [`Sequence`] index access so that it runs unchanged over any container.

use crate::sequence::Sequence;

/// Ranges of at most this many elements are sorted with insertion sort instead of recursing.
pub const DEFAULT_CUTOVER: usize = 10;

/// Sorts the whole sequence in ascending order.
#[inline]
pub fn sort<S: Sequence>(v: &mut S) {
    sort_with_cutover(v, DEFAULT_CUTOVER);
}

#[inline]
pub fn sort_with_cutover<S: Sequence>(v: &mut S, cutover: usize) {
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    sort_range_with_cutover(v, 0, len - 1, cutover);
}

/// Sorts the inclusive index range `[left, right]` of `v`.
///
/// `left >= right` is treated as a sorted range of zero or one elements. A non-empty range that
/// reaches past the end of `v` is a caller bug and panics.
#[inline]
pub fn sort_range<S: Sequence>(v: &mut S, left: usize, right: usize) {
    sort_range_with_cutover(v, left, right, DEFAULT_CUTOVER);
}

pub fn sort_range_with_cutover<S: Sequence>(v: &mut S, left: usize, right: usize, cutover: usize) {
    if left >= right {
        return;
    }

    assert!(
        right < v.len(),
        "sort range [{left}, {right}] out of bounds for length {}",
        v.len()
    );

    merge_sort(v, left, right, cutover);
}

fn merge_sort<S: Sequence>(v: &mut S, left: usize, right: usize, cutover: usize) {
    debug_assert!(left < right);

    if right - left + 1 <= cutover {
        insertion_sort(v, left, right);
        return;
    }

    let mid = left + (right - left) / 2;

    if left < mid {
        merge_sort(v, left, mid, cutover);
    }
    if mid + 1 < right {
        merge_sort(v, mid + 1, right, cutover);
    }

    merge(v, left, mid, right);
}

/// Stable shift-and-insert sort of the inclusive range `[left, right]`.
pub fn insertion_sort<S: Sequence>(v: &mut S, left: usize, right: usize) {
    for i in (left + 1)..=right {
        let key = v.get(i);
        let mut hole = i;

        // Strict `>` keeps equal elements in their original order.
        while hole > left && v.get(hole - 1) > key {
            let prev = v.get(hole - 1);
            v.set(hole, prev);
            hole -= 1;
        }

        v.set(hole, key);
    }
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]` back into `[left, right]`.
///
/// Both runs are copied into scratch buffers first. On equal keys the left run wins, which keeps
/// the merge stable.
pub fn merge<S: Sequence>(v: &mut S, left: usize, mid: usize, right: usize) {
    debug_assert!(left <= mid && mid < right);

    let left_run: Vec<S::Item> = (left..=mid).map(|i| v.get(i)).collect();
    let right_run: Vec<S::Item> = ((mid + 1)..=right).map(|i| v.get(i)).collect();

    let mut l = 0;
    let mut r = 0;
    let mut out = left;

    while l < left_run.len() && r < right_run.len() {
        if left_run[l] <= right_run[r] {
            v.set(out, left_run[l]);
            l += 1;
        } else {
            v.set(out, right_run[r]);
            r += 1;
        }
        out += 1;
    }

    for &val in left_run[l..].iter().chain(&right_run[r..]) {
        v.set(out, val);
        out += 1;
    }

    debug_assert_eq!(out, right + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    #[test]
    fn insertion_sort_subrange_only() {
        let mut v = vec![9, 5, 4, 3, 0];
        insertion_sort(&mut v, 1, 3);
        assert_eq!(v, [9, 3, 4, 5, 0]);
    }

    #[test]
    fn merge_two_runs() {
        let mut d: VecDeque<i32> = [1, 4, 9, 2, 4, 5].into_iter().collect();
        merge(&mut d, 0, 2, 5);
        assert_eq!(d, [1, 2, 4, 4, 5, 9]);
    }

    #[test]
    fn empty_range_is_noop() {
        let mut v: Vec<i32> = Vec::new();
        sort_range(&mut v, 0, 0);
        sort(&mut v);
        assert!(v.is_empty());

        // left > right, even past the end, is an empty range.
        let mut v = vec![3, 2, 1];
        sort_range(&mut v, 3, 2);
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn range_past_end_panics() {
        let mut v = vec![3, 2, 1];
        sort_range(&mut v, 0, 3);
    }

    #[test]
    fn cutover_zero_is_pure_merge_sort() {
        let mut v = vec![5, 1, 4, 2, 3, 0, 7, 6];
        sort_with_cutover(&mut v, 0);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn partial_range_leaves_rest_untouched() {
        let mut v: Vec<i32> = (0..30).rev().collect();
        sort_range(&mut v, 5, 24);

        assert_eq!(&v[..5], &[29, 28, 27, 26, 25]);
        assert_eq!(v[5..25].to_vec(), (5..25).collect::<Vec<_>>());
        assert_eq!(&v[25..], &[4, 3, 2, 1, 0]);
    }
}
