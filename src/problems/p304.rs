//! Fibonacci at large primes.
//!
//! Walk the first 100000 primes a(n) past 10¹⁴ with Miller–Rabin and sum
//! F(a(n)) mod 1234567891011 by fast doubling.

use crate::linrec::fibonacci_mod;
use crate::primes::next_prime;

use super::Answer;

/// Σ F(p) mod `modulus` over the first `count` primes strictly above `start`.
pub fn sum_fibonacci_at_primes(start: u64, count: usize, modulus: u64) -> u64 {
    let mut p = start;
    let mut total = 0u64;
    for _ in 0..count {
        p = next_prime(p);
        total = (total + fibonacci_mod(p, modulus)) % modulus;
    }
    total
}

pub fn solve() -> Answer {
    Answer::UInt(sum_fibonacci_at_primes(100_000_000_000_000, 100_000, 1_234_567_891_011))
}
