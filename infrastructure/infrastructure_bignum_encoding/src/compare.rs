//! Magnitude Comparison Module
//!
//! Unsigned comparison of [`FixedBignum`] values that ignores how either side
//! is stored. Leading zero bytes are skipped for the comparison only; neither
//! magnitude is modified.

use std::cmp::Ordering;

use crate::bignum::FixedBignum;

/// Compare two magnitudes by unsigned value
///
/// The magnitude with more significant bytes is larger. Equal lengths are
/// decided by the first differing byte, scanning from the most significant.
///
/// `compare(a, b) as i32` yields the conventional -1, 0 or 1.
pub fn compare(a: &FixedBignum, b: &FixedBignum) -> Ordering {
    let len_a = a.significant_len();
    let len_b = b.significant_len();
    if len_a != len_b {
        return len_a.cmp(&len_b);
    }

    (0..len_a)
        .rev()
        .map(|position| a.byte_at(position).cmp(&b.byte_at(position)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl PartialEq for FixedBignum {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for FixedBignum {}

impl PartialOrd for FixedBignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedBignum {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
