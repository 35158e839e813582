// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scalar abstraction over `f64` and `Complex64`.
//!
//! The evaluators are generic over [`HafnianScalar`] so that real input can
//! run a real-only code path without complex overhead. Because both paths
//! monomorphize the same kernel, a real matrix produces bit-identical
//! results on either path: every complex intermediate built from real input
//! has an exactly-zero imaginary part, and the real parts follow the same
//! operation sequence.

use ndarray::LinalgScalar;
use num_complex::Complex64;

mod private {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for num_complex::Complex64 {}
}

/// Element type accepted by the hafnian evaluators.
///
/// Sealed: implemented for `f64` and `Complex64` only. `LinalgScalar`
/// supplies the ring operations and the `ndarray` matrix product.
pub trait HafnianScalar: LinalgScalar + Send + Sync + private::Sealed {
    /// Embed a real value.
    fn from_real(x: f64) -> Self;

    /// Modulus (absolute value), used for symmetry tolerance and rescaling.
    fn modulus(self) -> f64;
}

impl HafnianScalar for f64 {
    fn from_real(x: f64) -> Self {
        x
    }

    fn modulus(self) -> f64 {
        self.abs()
    }
}

impl HafnianScalar for Complex64 {
    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }

    fn modulus(self) -> f64 {
        self.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_real() {
        assert_eq!(f64::from_real(2.5), 2.5);
        assert_eq!(Complex64::from_real(2.5), Complex64::new(2.5, 0.0));
    }

    #[test]
    fn test_modulus() {
        assert_eq!((-3.0f64).modulus(), 3.0);
        assert_eq!(Complex64::new(3.0, 4.0).modulus(), 5.0);
    }

    #[test]
    fn test_real_embedding_arithmetic_is_exact() {
        // A complex value with zero imaginary part keeps it exactly zero
        // under addition and multiplication, and the real parts round
        // exactly as the f64 operations do; this is what makes the two
        // paths agree bit-for-bit on real input. (Division does not share
        // this property, which is why the kernel multiplies by
        // reciprocals instead.)
        let a = Complex64::from_real(0.1);
        let b = Complex64::from_real(-0.3);
        assert_eq!((a * b).im, 0.0);
        assert_eq!((a + b).im, 0.0);
        assert_eq!((a * b).re, 0.1 * -0.3);
        assert_eq!((a + b).re, 0.1 + -0.3);
    }
}
