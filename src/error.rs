// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for hafnian evaluation.
//!
//! All errors are raised at the validation boundary before any computation
//! begins; the evaluators themselves do not fail on well-formed input.

use thiserror::Error;

/// Errors reported by [`crate::hafnian`] and [`crate::hafnian_with`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HafnianError {
    /// Input matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Input matrix has odd order. The hafnian is only defined for even
    /// order (a set of odd size has no perfect matching).
    #[error("matrix order {order} is odd; the hafnian requires even order")]
    OddOrder { order: usize },

    /// Input matrix fails the symmetry check beyond tolerance.
    #[error(
        "matrix is asymmetric at ({row}, {col}): \
         |a[{row}][{col}] - a[{col}][{row}]| = {delta:e} exceeds {tolerance:e}"
    )]
    Asymmetric {
        row: usize,
        col: usize,
        delta: f64,
        tolerance: f64,
    },

    /// Rescaling was requested but the scale factor (the largest entry
    /// modulus) is not a usable finite value.
    #[error("rescaling requested but the scale factor {scale} is not finite")]
    NumericOverflow { scale: f64 },
}
