// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! General hafnian evaluator: Gray-coded subset sums over power traces.
//!
//! For a 2n x 2n symmetric matrix A, group the indices into n pairs
//! (2i, 2i+1). For a subset S of pairs, let A_S be the submatrix keeping the
//! rows and columns of the pairs in S, and let X be the block-diagonal
//! matrix of 2x2 swaps. Then
//!
//! ```text
//! haf(A) = sum over S of (-1)^(n - |S|) [z^n] exp( sum_{k=1..n} tr((A_S X)^k) z^k / 2k )
//! ```
//!
//! an exact finite sum over the 2^n subsets, each term costing a handful of
//! dense matrix products. See Björklund (SODA 2012) and Björklund, Gupt,
//! Quesada (ACM JEA 2019).
//!
//! # Traversal
//!
//! Subsets are visited in Gray-code order, so consecutive steps change
//! exactly one pair and the sorted active-pair list is maintained by a
//! single toggle ([`crate::pairs`]). The per-step work is dominated by the
//! n matrix products needed for the power traces.
//!
//! The empty subset contributes nothing for n >= 1 (its polynomial is the
//! constant 1), so the traversal starts at step 1.

#[cfg(feature = "parallel")]
pub mod bands;

use crate::pairs::{flipped_pair, gray, ActivePairs, PairSet};
use crate::scalar::HafnianScalar;
use ndarray::{Array2, ArrayView2};

/// Hafnian by the power-trace subset sum.
///
/// Assumes a validated matrix: square, even order, symmetric. With the
/// `parallel` feature the subset space is split into bands summed on the
/// rayon pool; band sums are reduced in band order, so the result is
/// deterministic for a fixed thread count.
pub fn hafnian_powtrace<T: HafnianScalar>(a: &ArrayView2<T>) -> T {
    let n = a.nrows() / 2;
    if n == 0 {
        return T::one();
    }
    assert!(n < 64, "order {} exceeds the addressable subset space", 2 * n);

    #[cfg(feature = "parallel")]
    {
        bands::banded_sum(a, n)
    }
    #[cfg(not(feature = "parallel"))]
    {
        band_sum(a, n, 1, 1u64 << n)
    }
}

/// Sum the signed subset terms for Gray-code steps in `lo..hi`.
///
/// The active-pair list is seeded non-incrementally from the first mask and
/// then updated by one toggle per step, so a band can start anywhere in the
/// sequence.
pub(crate) fn band_sum<T: HafnianScalar>(a: &ArrayView2<T>, n: usize, lo: u64, hi: u64) -> T {
    debug_assert!(lo >= 1, "step 0 is the empty subset and contributes nothing");

    let mut active = ActivePairs::from_set(PairSet::from_bits(gray(lo)));
    let mut total = subset_term(a, n, active.as_slice());
    for t in (lo + 1)..hi {
        active.toggle(flipped_pair(t));
        total = total + subset_term(a, n, active.as_slice());
    }
    total
}

/// One subset's signed contribution.
fn subset_term<T: HafnianScalar>(a: &ArrayView2<T>, n: usize, active: &[usize]) -> T {
    let b = pair_swapped_submatrix(a, active);
    let traces = power_traces(&b, n);
    let coeff = z_n_coefficient(&traces, n);
    if (n - active.len()) % 2 == 1 {
        T::zero() - coeff
    } else {
        coeff
    }
}

/// Build B = A_S X for the active pairs.
///
/// X swaps the two columns of each local pair, so B[r][c] = A_S[r][c ^ 1]
/// with local row r and local column c over the expanded index list
/// [2p, 2p+1 for p in S].
fn pair_swapped_submatrix<T: HafnianScalar>(a: &ArrayView2<T>, active: &[usize]) -> Array2<T> {
    let rows: Vec<usize> = active.iter().flat_map(|&p| [2 * p, 2 * p + 1]).collect();
    let m = rows.len();
    Array2::from_shape_fn((m, m), |(r, c)| a[[rows[r], rows[c ^ 1]]])
}

/// Traces of B, B^2, ..., B^n by repeated multiplication.
fn power_traces<T: HafnianScalar>(b: &Array2<T>, n: usize) -> Vec<T> {
    let mut traces = Vec::with_capacity(n);
    let mut power = b.clone();
    for k in 0..n {
        traces.push(power.diag().sum());
        if k + 1 < n {
            power = mat_mul(&power, b);
        }
    }
    traces
}

/// Naive dense product.
///
/// Not `ndarray::Dot`: the real and complex instantiations must perform the
/// same operation sequence so that real input gives bit-identical results
/// on both paths, and gemm backends do not guarantee that.
fn mat_mul<T: HafnianScalar>(lhs: &Array2<T>, rhs: &Array2<T>) -> Array2<T> {
    let m = lhs.nrows();
    let mut out = Array2::zeros((m, m));
    for r in 0..m {
        for c in 0..m {
            let mut acc = T::zero();
            for k in 0..m {
                acc = acc + lhs[[r, k]] * rhs[[k, c]];
            }
            out[[r, c]] = acc;
        }
    }
    out
}

/// The z^n coefficient of exp(sum_{k=1..n} traces[k-1] z^k / 2k).
///
/// Multiplies the factors exp(t_k z^k / 2k) one at a time, truncating at
/// degree n. Each factor expands as sum_j (t_k / 2k)^j z^(kj) / j!, and the
/// inner loops add those terms against a snapshot of the polynomial before
/// this factor was applied.
///
/// Scalar divisions are written as reciprocal multiplications: complex
/// division would round the real part differently from plain f64 division
/// and break the real-path/complex-path bit compatibility.
fn z_n_coefficient<T: HafnianScalar>(traces: &[T], n: usize) -> T {
    let mut poly = vec![T::zero(); n + 1];
    poly[0] = T::one();
    for k in 1..=n {
        let factor = traces[k - 1] * T::from_real(1.0 / (2.0 * k as f64));
        let base = poly.clone();
        let mut powfactor = T::one();
        for j in 1..=n / k {
            powfactor = powfactor * factor * T::from_real(1.0 / j as f64);
            for deg in (k * j)..=n {
                poly[deg] = poly[deg] + base[deg - k * j] * powfactor;
            }
        }
    }
    poly[n]
}
