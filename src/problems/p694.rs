//! Cube-full divisors.
//!
//! A number is cube-full when every prime in it appears cubed or more.
//! Σ f(n) for n ≤ N, with f(n) the count of cube-full divisors of n,
//! equals Σ ⌊N/v⌋ over cube-full v ≤ N (including v = 1); enumerate the
//! cube-full v by depth-first search over primes up to ∛N.

use crate::arith::icbrt;
use crate::primes::Sieve;

use super::Answer;

/// Σ over n ≤ `n` of the number of cube-full divisors of n.
pub fn sum_cubefull_divisors(n: u64) -> u64 {
    let primes = Sieve::new(icbrt(n) + 10).primes();
    let mut total = 0u64;
    let mut stack = vec![(0usize, 1u64)];
    while let Some((start, val)) = stack.pop() {
        total += n / val;
        for (j, &p) in primes.iter().enumerate().skip(start) {
            let p3 = (p as u128).pow(3);
            if val as u128 * p3 > n as u128 {
                break;
            }
            let mut pw = p3;
            while val as u128 * pw <= n as u128 {
                stack.push((j + 1, (val as u128 * pw) as u64));
                pw *= p as u128;
            }
        }
    }
    total
}

pub fn solve() -> Answer {
    Answer::UInt(sum_cubefull_divisors(1_000_000_000_000_000_000))
}
