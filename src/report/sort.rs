//! Warning ordering.
//!
//! Errors come first. Within one severity, warnings are ordered by line and
//! then by column. The comparator never reports equality: a pair that is
//! not strictly less goes after. Missing lines or columns never compare as
//! less than anything.

use std::cmp::Ordering;

use super::model::Warning;

fn less(a: Option<u64>, b: Option<u64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a < b)
}

/// Two-branch comparator used to order warnings within a result.
pub fn compare(a: &Warning, b: &Warning) -> Ordering {
    if a.severity == b.severity {
        if a.line == b.line {
            return if less(a.column, b.column) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        return if less(a.line, b.line) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    if a.severity.is_error() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Stable in-place binary insertion sort driven by [`compare`].
///
/// Each element is placed after every element of the sorted prefix that it
/// does not compare as strictly less than, so ties keep their input order.
/// This takes O(n log n) comparisons; moves stay quadratic, which is cheap
/// at the size of one file's warnings.
pub fn sort_warnings(warnings: &mut [Warning]) {
    for i in 1..warnings.len() {
        let (mut left, mut right) = (0, i);
        while left < right {
            let mid = left + (right - left) / 2;
            if compare(&warnings[i], &warnings[mid]) == Ordering::Less {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        warnings[left..=i].rotate_right(1);
    }
}
