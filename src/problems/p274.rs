//! Divisibility multipliers.
//!
//! For a prime p coprime to 10, the divisibility multiplier M(p) is the
//! inverse of 10 modulo p: by Fermat, M(p) = 10^(p−2) mod p. Sum M(p) over
//! all primes below a limit.

use crate::modular::mod_pow;
use crate::primes::Sieve;

use super::Answer;

/// Σ M(p) over primes p < `limit`, p ∉ {2, 5}.
pub fn sum_multipliers(limit: u64) -> u64 {
    Sieve::new(limit)
        .iter()
        .filter(|&p| p != 2 && p != 5 && p < limit)
        .map(|p| mod_pow(10, p - 2, p))
        .sum()
}

pub fn solve() -> Answer {
    Answer::UInt(sum_multipliers(10_000_000))
}
