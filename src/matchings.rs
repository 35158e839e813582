// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direct perfect-matching enumeration.
//!
//! Pairs the first free vertex with each remaining vertex, multiplies by
//! that pair's entry and recurses on the rest. The number of matchings is
//! the double factorial (2n-1)!!, so this is only viable for small orders,
//! but it is exact and follows the defining sum directly, which makes it
//! the correctness oracle for the power-trace evaluator.
//!
//! Recursion depth is n, so no explicit stack is needed.

use crate::scalar::HafnianScalar;
use ndarray::ArrayView2;

/// Hafnian by recursive matching enumeration.
///
/// Assumes a validated matrix: square, even order, symmetric. Called by the
/// dispatcher for orders at or below [`crate::Config::small_order_limit`];
/// exposed for use as an oracle against the general evaluator.
pub fn hafnian_by_enumeration<T: HafnianScalar>(a: &ArrayView2<T>) -> T {
    let vertices: Vec<usize> = (0..a.nrows()).collect();
    matchings_sum(a, &vertices)
}

/// Sum of matching products over the given free vertices.
fn matchings_sum<T: HafnianScalar>(a: &ArrayView2<T>, free: &[usize]) -> T {
    // An empty vertex set has exactly one (empty) matching with product 1;
    // this is also what makes the 0x0 hafnian equal 1.
    if free.is_empty() {
        return T::one();
    }

    let first = free[0];
    let mut total = T::zero();
    for i in 1..free.len() {
        let partner = free[i];
        let mut rest = Vec::with_capacity(free.len() - 2);
        rest.extend_from_slice(&free[1..i]);
        rest.extend_from_slice(&free[i + 1..]);
        total = total + a[[first, partner]] * matchings_sum(a, &rest);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};
    use num_complex::Complex64;

    #[test]
    fn test_empty_matrix() {
        let a = Array2::<f64>::zeros((0, 0));
        assert_eq!(hafnian_by_enumeration(&a.view()), 1.0);
    }

    #[test]
    fn test_order_2() {
        let a = arr2(&[[3.0, 5.0], [5.0, 7.0]]);
        assert_eq!(hafnian_by_enumeration(&a.view()), 5.0);
    }

    #[test]
    fn test_order_4_three_matchings() {
        let a = arr2(&[
            [0.0, 1.0, 2.0, 3.0],
            [1.0, 0.0, 4.0, 5.0],
            [2.0, 4.0, 0.0, 6.0],
            [3.0, 5.0, 6.0, 0.0],
        ]);
        // a01*a23 + a02*a13 + a03*a12
        let expected = 1.0 * 6.0 + 2.0 * 5.0 + 3.0 * 4.0;
        assert_eq!(hafnian_by_enumeration(&a.view()), expected);
    }

    #[test]
    fn test_diagonal_entries_never_used() {
        // Matchings pair distinct vertices, so the diagonal is irrelevant.
        let mut a = arr2(&[[0.0, 2.0], [2.0, 0.0]]);
        let base = hafnian_by_enumeration(&a.view());
        a[[0, 0]] = 99.0;
        a[[1, 1]] = -99.0;
        assert_eq!(hafnian_by_enumeration(&a.view()), base);
    }

    #[test]
    fn test_ones_order_6_counts_matchings() {
        // All-ones: every product is 1, so the result is the number of
        // perfect matchings of K6, which is 5!! = 15.
        let a = Array2::<f64>::ones((6, 6));
        assert_eq!(hafnian_by_enumeration(&a.view()), 15.0);
    }

    #[test]
    fn test_complex_order_4() {
        let i = Complex64::new(0.0, 1.0);
        let one = Complex64::new(1.0, 0.0);
        let a = arr2(&[
            [Complex64::new(0.0, 0.0), i, one, i],
            [i, Complex64::new(0.0, 0.0), i, one],
            [one, i, Complex64::new(0.0, 0.0), i],
            [i, one, i, Complex64::new(0.0, 0.0)],
        ]);
        // a01*a23 + a02*a13 + a03*a12 = i*i + 1*1 + i*i = -1 + 1 - 1 = -1
        let haf = hafnian_by_enumeration(&a.view());
        assert_eq!(haf, Complex64::new(-1.0, 0.0));
    }
}
