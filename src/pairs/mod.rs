// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subset machinery for the n index pairs of a 2n x 2n matrix.
//!
//! Rows 2i and 2i+1 of the input form index pair i. The general evaluator
//! sums over all 2^n subsets of the n pairs; this module provides the
//! compact subset representation ([`PairSet`]) and the sorted active-pair
//! list ([`ActivePairs`]) that is updated incrementally as the Gray-code
//! traversal flips one pair per step.

pub mod gray;

pub use gray::{flipped_pair, gray};

/// A set of index pairs represented as a bitset.
///
/// Bit i (counting from LSB) is set if pair i is in the set. This is the
/// same integer that identifies a subset in the Gray-code traversal, so a
/// traversal mask converts to a pair set for free; mutation happens on
/// [`ActivePairs`], not here.
///
/// Uses u64, which bounds the evaluator at n = 64 pairs; the 2^n running
/// time is unreachable long before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairSet(u64);

impl PairSet {
    /// Create a pair set from a raw subset mask.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Get the number of pairs in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all pairs in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let bits = self.0;
        (0..64usize).filter(move |i| (bits >> i) & 1 != 0)
    }
}

/// Sorted list of the pairs currently in the subset.
///
/// The Gray-code traversal changes exactly one pair per step, so the list
/// is maintained by a single binary-search insert or remove rather than
/// being rebuilt from the mask. The evaluator reads it as a slice to
/// assemble the reduced matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePairs {
    pairs: Vec<usize>,
}

impl ActivePairs {
    /// Build the sorted list from a pair set. Used to seed a traversal (or
    /// a band of one) at an arbitrary starting mask.
    pub fn from_set(set: PairSet) -> Self {
        Self {
            pairs: set.iter().collect(),
        }
    }

    /// Flip membership of one pair, keeping the list sorted.
    pub fn toggle(&mut self, pair: usize) {
        match self.pairs.binary_search(&pair) {
            Ok(pos) => {
                self.pairs.remove(pos);
            }
            Err(pos) => {
                self.pairs.insert(pos, pair);
            }
        }
    }

    /// The active pairs in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.pairs
    }

    /// Number of active pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if no pairs are active.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
