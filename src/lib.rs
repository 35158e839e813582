// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hafnian of a complex symmetric matrix.
//!
//! For a symmetric matrix `A` of even order 2n, the hafnian is the sum over
//! all perfect matchings of the complete graph on 2n vertices of the product
//! of matched-pair entries:
//!
//! ```text
//! haf(A) = sum over matchings M of  prod over {i,j} in M of  A[i][j]
//! ```
//!
//! It generalizes the permanent in the way the Pfaffian generalizes the
//! determinant, and it has no polynomial-time evaluation. This crate computes
//! it exactly (up to floating-point rounding) in O(2^n poly(n)) time.
//!
//! # Architecture
//!
//! The crate is a pure evaluation kernel with three layers:
//!
//! ## Validation and dispatch ([`engine`])
//!
//! [`hafnian`] checks that the input is square, of even order, and symmetric
//! within tolerance, then branches on the order: 0, 2 and 4 have closed
//! forms, orders up to a configurable threshold use direct matching
//! enumeration, and everything else goes to the power-trace evaluator.
//!
//! ## Matching enumeration ([`matchings`])
//!
//! Recursive enumeration of perfect matchings: pair the first free vertex
//! with each remaining vertex and recurse. Double-factorial growth, but
//! simple and exact, so it doubles as a correctness oracle for the general
//! evaluator.
//!
//! ## Power-trace subset sum ([`powtrace`])
//!
//! The general evaluator sums, over all 2^n subsets S of the n index pairs,
//! the z^n coefficient of exp(sum_k tr((A_S X)^k) z^k / 2k), weighted by the
//! inclusion-exclusion sign (-1)^(n-|S|). Subsets are traversed in Gray-code
//! order so each step changes exactly one pair in the active set ([`pairs`]).
//!
//! # Parallelization
//!
//! With the `parallel` feature (default), the Gray-code sequence is split
//! into contiguous bands summed on a rayon pool. Band sums are reduced in
//! band order, so results are deterministic for a fixed band count; the
//! least-significant bits may still differ from the sequential sum because
//! floating-point addition is not associative.
//!
//! # Numerics
//!
//! All arithmetic is `f64` or `Complex64` through the [`scalar::HafnianScalar`]
//! seam. A real input evaluated on the real path produces bit-identical
//! results to the complex path, since both monomorphize the same kernel.
//! Non-finite entries are not rejected; NaN and infinity propagate through
//! the arithmetic (see [`Config::rescale`] for overflow-prone inputs).
//!
//! # References
//!
//! - Björklund, A. (2012). "Counting perfect matchings as fast as Ryser." SODA 2012.
//! - Björklund, A., Gupt, B., Quesada, N. (2019). "A faster hafnian formula for
//!   complex matrices and its benchmarking on a supercomputer." ACM JEA 24.

pub mod config;
pub mod engine;
pub mod error;
pub mod matchings;
pub mod pairs;
pub mod powtrace;
pub mod scalar;

// Re-export commonly used types
pub use config::Config;
pub use engine::{hafnian, hafnian_with};
pub use error::HafnianError;
pub use num_complex::Complex64;
pub use scalar::HafnianScalar;
