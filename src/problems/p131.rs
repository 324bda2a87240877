//! Primes with a cube partnership.
//!
//! A prime p admits n³ + n²p = m³ exactly when p = 3k² + 3k + 1 for some k
//! (the difference of consecutive cubes). Count such primes below a limit.

use crate::primes::Sieve;

use super::Answer;

/// Count primes below `limit` of the form 3k² + 3k + 1.
pub fn count_below(limit: u64) -> u64 {
    let sieve = Sieve::new(limit);
    let mut count = 0;
    let mut k = 1u64;
    loop {
        let p = 3 * k * k + 3 * k + 1;
        if p >= limit {
            return count;
        }
        if sieve.is_prime(p) {
            count += 1;
        }
        k += 1;
    }
}

pub fn solve() -> Answer {
    Answer::UInt(count_below(1_000_000))
}
