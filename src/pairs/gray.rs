// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gray-code sequence over subset masks.
//!
//! The reflected binary Gray code orders the integers 0..2^n so that
//! consecutive values differ in exactly one bit. Traversing subsets in this
//! order lets the evaluator maintain its active-pair list with a single
//! toggle per step instead of rebuilding it from the mask.

/// The t-th subset mask in reflected-binary Gray-code order.
pub fn gray(t: u64) -> u64 {
    t ^ (t >> 1)
}

/// The pair whose membership flips between `gray(t - 1)` and `gray(t)`.
///
/// This is the position of the lowest set bit of `t`.
///
/// # Panics
///
/// Panics in debug builds if `t` is 0 (there is no predecessor).
pub fn flipped_pair(t: u64) -> usize {
    debug_assert!(t > 0, "step 0 has no predecessor");
    t.trailing_zeros() as usize
}
