// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel Gray-code band traversal.
//!
//! Subset terms are independent, so the Gray-code step range [1, 2^n) is
//! split into contiguous bands. Each band seeds its active-pair list from
//! its first mask (the one non-incremental rebuild per band) and then steps
//! incrementally, exactly like the sequential traversal.
//!
//! Band sums are collected into a vector indexed by band and reduced in
//! band order, so the result is deterministic for a fixed band count.
//! Changing the thread count changes the grouping of floating-point
//! additions, which can move the least-significant bits relative to the
//! sequential sum; this is inherent to parallel reduction, not a bug.

use crate::powtrace::band_sum;
use crate::scalar::HafnianScalar;
use ndarray::ArrayView2;
use rayon::prelude::*;

/// Bands per worker thread. More bands than threads smooths out the load
/// imbalance between small-subset and large-subset regions of the sequence.
const BANDS_PER_THREAD: u64 = 4;

/// Sum all subset terms using banded parallel traversal.
pub(crate) fn banded_sum<T: HafnianScalar>(a: &ArrayView2<T>, n: usize) -> T {
    let steps = (1u64 << n) - 1; // steps 1..2^n
    let bands = band_count(steps);

    let sums: Vec<T> = (0..bands)
        .into_par_iter()
        .map(|band| {
            let lo = 1 + split_point(steps, band, bands);
            let hi = 1 + split_point(steps, band + 1, bands);
            band_sum(a, n, lo, hi)
        })
        .collect();

    sums.into_iter().fold(T::zero(), |acc, s| acc + s)
}

fn band_count(steps: u64) -> u64 {
    let threads = rayon::current_num_threads() as u64;
    (threads * BANDS_PER_THREAD).clamp(1, steps)
}

/// Proportional split of `steps` into `bands` near-equal ranges.
fn split_point(steps: u64, band: u64, bands: u64) -> u64 {
    // u128 to avoid overflow for large subset spaces
    ((steps as u128 * band as u128) / bands as u128) as u64
}
