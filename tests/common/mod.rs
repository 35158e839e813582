// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

// Each integration-test binary uses its own subset of these helpers.
#![allow(dead_code)]

use hafnian::Complex64;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random dense complex matrix symmetrized as M + M^T.
pub fn random_symmetric_complex(order: usize, seed: u64) -> Array2<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = Array2::from_shape_fn((order, order), |_| {
        Complex64::new(rng.gen::<f64>(), rng.gen::<f64>())
    });
    &m + &m.t()
}

/// Random dense real matrix symmetrized as M + M^T.
pub fn random_symmetric_real(order: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = Array2::from_shape_fn((order, order), |_| rng.gen::<f64>());
    &m + &m.t()
}

/// n! as f64.
pub fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Number of perfect matchings of K_{2n}: (2n)! / (n! 2^n) = (2n-1)!!.
pub fn perfect_matching_count(n: usize) -> f64 {
    (0..n).fold(1.0, |acc, k| acc * (2 * k + 1) as f64)
}

/// Assert two complex values agree to a relative tolerance.
pub fn assert_close(actual: Complex64, expected: Complex64, tol: f64) {
    let scale = expected.norm().max(1.0);
    assert!(
        (actual - expected).norm() <= tol * scale,
        "expected {}, got {} (tolerance {:e})",
        expected,
        actual,
        tol * scale
    );
}
