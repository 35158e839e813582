// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input validation and evaluator dispatch.
//!
//! The entry points validate the matrix (square, even order, symmetric
//! within tolerance) and then branch on the order:
//!
//! - 0: the empty product, 1
//! - 2: the single off-diagonal entry
//! - 4: the three-matching closed form
//! - up to [`Config::small_order_limit`]: recursive matching enumeration
//! - otherwise: the power-trace subset sum
//!
//! The closed forms are mathematical identities of the defining sum, not
//! approximations; every branch computes the same function.
//!
//! Validation is the only failure point. Non-finite entries are not
//! rejected: NaN and infinity propagate through the arithmetic, except that
//! the rescaling path reports [`HafnianError::NumericOverflow`] when the
//! scale factor itself is not finite.

use crate::config::Config;
use crate::error::HafnianError;
use crate::matchings::hafnian_by_enumeration;
use crate::powtrace::hafnian_powtrace;
use crate::scalar::HafnianScalar;
use ndarray::ArrayView2;

/// Compute the hafnian of a symmetric matrix of even order.
///
/// Works on `f64` and `Complex64` matrices; the real path is the same
/// monomorphized kernel and produces bit-identical results to the complex
/// path on real input.
///
/// # Errors
///
/// [`HafnianError::NotSquare`], [`HafnianError::OddOrder`] or
/// [`HafnianError::Asymmetric`] when the input violates the corresponding
/// property. No computation is performed on invalid input.
///
/// # Examples
///
/// ```
/// use hafnian::hafnian;
/// use ndarray::arr2;
///
/// let a = arr2(&[[0.0, 2.0], [2.0, 0.0]]);
/// assert_eq!(hafnian(a.view()).unwrap(), 2.0);
/// ```
pub fn hafnian<T: HafnianScalar>(a: ArrayView2<T>) -> Result<T, HafnianError> {
    hafnian_with(a, &Config::default())
}

/// [`hafnian`] with explicit tuning configuration.
pub fn hafnian_with<T: HafnianScalar>(
    a: ArrayView2<T>,
    config: &Config,
) -> Result<T, HafnianError> {
    validate(&a, config.symmetry_tolerance)?;

    let order = a.nrows();
    match order {
        0 => Ok(T::one()),
        2 => Ok(a[[0, 1]]),
        4 => Ok(a[[0, 1]] * a[[2, 3]] + a[[0, 2]] * a[[1, 3]] + a[[0, 3]] * a[[1, 2]]),
        _ if order <= config.small_order_limit && config.rescale => {
            rescaled(&a, hafnian_by_enumeration)
        }
        _ if order <= config.small_order_limit => Ok(hafnian_by_enumeration(&a)),
        _ if config.rescale => rescaled(&a, hafnian_powtrace),
        _ => Ok(hafnian_powtrace(&a)),
    }
}

/// Check shape and symmetry; fail fast before any computation.
fn validate<T: HafnianScalar>(a: &ArrayView2<T>, tolerance: f64) -> Result<(), HafnianError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(HafnianError::NotSquare { rows, cols });
    }
    if rows % 2 != 0 {
        return Err(HafnianError::OddOrder { order: rows });
    }
    for i in 0..rows {
        for j in (i + 1)..rows {
            let delta = (a[[i, j]] - a[[j, i]]).modulus();
            let scale = a[[i, j]].modulus().max(a[[j, i]].modulus()).max(1.0);
            if delta > tolerance * scale {
                return Err(HafnianError::Asymmetric {
                    row: i,
                    col: j,
                    delta,
                    tolerance: tolerance * scale,
                });
            }
        }
    }
    Ok(())
}

/// Evaluate A / scale with the given evaluator, corrected by scale^n.
///
/// scale is the largest entry modulus, which keeps every scaled entry at
/// modulus <= 1 and intermediate products away from overflow. The
/// correction haf(cA) = c^n haf(A) is exact as an identity; in floating
/// point it trades overflow risk for one rounding per entry. Wraps both
/// the enumeration and power-trace branches, so `Config::rescale` behaves
/// the same wherever the order dispatches.
fn rescaled<T: HafnianScalar>(
    a: &ArrayView2<T>,
    evaluate: fn(&ArrayView2<T>) -> T,
) -> Result<T, HafnianError> {
    let n = a.nrows() / 2;
    let scale = a.iter().fold(0.0f64, |m, &x| m.max(x.modulus()));
    if !scale.is_finite() {
        return Err(HafnianError::NumericOverflow { scale });
    }
    if scale == 0.0 {
        // All-zero matrix: every matching product is zero (n >= 1 here).
        return Ok(T::zero());
    }
    let scaled = a.mapv(|x| x * T::from_real(1.0 / scale));
    let haf = evaluate(&scaled.view());
    Ok(haf * T::from_real(scale.powi(n as i32)))
}
