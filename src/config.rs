// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Evaluation configuration.
//!
//! All settings are performance tuning knobs, not correctness knobs: every
//! configuration computes the same hafnian up to floating-point rounding.

/// Default largest order routed to the recursive matching enumerator.
///
/// 7!! = 105 products for order 8; below the setup cost of the subset-sum
/// machinery.
pub const DEFAULT_SMALL_ORDER_LIMIT: usize = 8;

/// Default relative tolerance for the symmetry check.
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-12;

/// Tuning knobs for [`crate::hafnian_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Orders at or below this limit (and above 4, which has a closed form)
    /// use the recursive matching enumerator instead of the power-trace
    /// subset sum. Set to 0 to always use the iterative subset sum.
    pub small_order_limit: usize,

    /// Relative tolerance for the symmetry check: entry pairs must satisfy
    /// `|a[i][j] - a[j][i]| <= tol * max(1, |a[i][j]|, |a[j][i]|)`.
    pub symmetry_tolerance: f64,

    /// Divide the input by its largest entry modulus and multiply the result
    /// by scale^n afterwards. Avoids intermediate overflow for matrices with
    /// numerically large entries, at the cost of one extra matrix copy.
    /// Wraps both the enumeration and power-trace branches; the closed forms
    /// for orders 0, 2 and 4 are never rescaled (at most two factors per
    /// product, nothing to gain).
    pub rescale: bool,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the largest order handled by matching enumeration (0 disables it).
    pub fn with_small_order_limit(mut self, limit: usize) -> Self {
        self.small_order_limit = limit;
        self
    }

    /// Set the relative symmetry tolerance.
    pub fn with_symmetry_tolerance(mut self, tolerance: f64) -> Self {
        self.symmetry_tolerance = tolerance;
        self
    }

    /// Enable or disable rescaling of large-entry inputs.
    pub fn with_rescale(mut self, rescale: bool) -> Self {
        self.rescale = rescale;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            small_order_limit: DEFAULT_SMALL_ORDER_LIMIT,
            symmetry_tolerance: DEFAULT_SYMMETRY_TOLERANCE,
            rescale: false,
        }
    }
}
