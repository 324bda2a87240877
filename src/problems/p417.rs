//! Reciprocal cycles, summed.
//!
//! L(n) is the length of the repeating part of 1/n: the multiplicative
//! order of 10 modulo n with all factors of 2 and 5 removed, or 0 when the
//! expansion terminates. Per-n computations are independent, so the sum is
//! a parallel map-reduce over disjoint ranges.

use rayon::prelude::*;

use crate::modular::multiplicative_order;

use super::Answer;

/// Cycle length of the decimal expansion of 1/n (0 when it terminates).
pub fn cycle_length(n: u64) -> u64 {
    let mut m = n;
    while m % 2 == 0 {
        m /= 2;
    }
    while m % 5 == 0 {
        m /= 5;
    }
    if m == 1 {
        return 0;
    }
    // m is coprime to 10 after stripping, so the order exists
    multiplicative_order(10, m).unwrap_or(0)
}

/// Σ L(n) for 3 ≤ n ≤ `limit`.
pub fn sum_cycle_lengths(limit: u64) -> u64 {
    (3..=limit).into_par_iter().map(cycle_length).sum()
}

pub fn solve() -> Answer {
    Answer::UInt(sum_cycle_lengths(100_000_000))
}
