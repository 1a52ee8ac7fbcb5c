//! Binary search over a sorted slice of distinct elements.
//!
//! Variables:
//!   arr    : &[T]    — strictly ascending haystack, length N
//!   target : &T      — value to locate
//!   w      : Window  — closed [front, back], initially [0, N-1]
//!
//! Equations:
//!   m = front + (back - front) / 2
//!   arr[m] == target  →  return m
//!   arr[m] <  target  →  front' = m + 1
//!   arr[m] >  target  →  back'  = m - 1
//!   front > back      →  not found
//!
//!   O(log N) comparisons, O(1) extra space.

use std::cmp::Ordering;

use crate::window::Window;

/// Sentinel returned by [`search`] when the target is absent.
pub const NOT_FOUND: i32 = -1;

/// Returns the index of `target` in `arr`, or `None`.
///
/// `arr` must be sorted ascending with no repeats. An unsorted slice is not
/// detected here; use [`crate::validate::checked_search`] for that.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut window = Window::closed(arr.len())?;
    while window.is_open() {
        let m = window.mid();
        match arr[m].cmp(target) {
            Ordering::Equal => return Some(m),
            Ordering::Less => window.discard_left(m),
            Ordering::Greater => {
                if !window.discard_right(m) {
                    break;
                }
            }
        }
    }
    None
}

/// Integer form with a `-1` sentinel instead of `Option`.
///
/// An index that does not fit in `i32` is also reported as `-1`; slices
/// longer than `i32::MAX` elements should go through [`binary_search`].
pub fn search(nums: &[i32], target: i32) -> i32 {
    to_sentinel(binary_search(nums, &target))
}

fn to_sentinel(index: Option<usize>) -> i32 {
    index
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(NOT_FOUND)
}
