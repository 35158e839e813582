// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Closed forms for orders 2 and 4 on randomized symmetric matrices.

mod common;

use common::{assert_close, random_symmetric_complex};
use hafnian::hafnian;
use hafnian::powtrace::hafnian_powtrace;

#[test]
fn test_2x2_is_the_off_diagonal_entry() {
    for seed in 0..20 {
        let a = random_symmetric_complex(2, seed);
        let haf = hafnian(a.view()).unwrap();
        assert_eq!(haf, a[[0, 1]]);
    }
}

#[test]
fn test_4x4_is_the_three_matching_sum() {
    for seed in 0..20 {
        let a = random_symmetric_complex(4, seed);
        let haf = hafnian(a.view()).unwrap();
        let expected =
            a[[0, 1]] * a[[2, 3]] + a[[0, 2]] * a[[1, 3]] + a[[0, 3]] * a[[1, 2]];
        assert_eq!(haf, expected);
    }
}

#[test]
fn test_closed_forms_agree_with_powtrace() {
    // The dispatcher always takes the closed forms for orders 2 and 4, so
    // exercise the general evaluator directly: the closed forms are
    // identities of the same sum and must agree to rounding.
    for seed in 0..10 {
        let a = random_symmetric_complex(2, seed);
        assert_close(hafnian_powtrace(&a.view()), a[[0, 1]], 1e-12);

        let b = random_symmetric_complex(4, 100 + seed);
        let expected =
            b[[0, 1]] * b[[2, 3]] + b[[0, 2]] * b[[1, 3]] + b[[0, 3]] * b[[1, 2]];
        assert_close(hafnian_powtrace(&b.view()), expected, 1e-12);
    }
}
