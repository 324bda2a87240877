//! Sum of largest square divisors.
//!
//! Every n factors uniquely as d²·s with s squarefree, so g(n) = d² and
//! S(N) = Σ_d d² · Q(N/d²), where Q(x) counts squarefree numbers ≤ x via
//! the Möbius inclusion-exclusion Q(x) = Σⱼ μ(j)·⌊x/j²⌋.

use crate::arith::isqrt;
use crate::primes::mobius_sieve;

use super::Answer;

const MOD: u64 = 1_000_000_007;

/// S(N) = Σ_{n ≤ N} g(n) mod 10⁹+7, with g(n) the largest square dividing n.
pub fn sum_largest_squares(n: u64) -> u64 {
    let r = isqrt(n);
    let mu = mobius_sieve(r as usize);
    // only squarefree j contribute to Q
    let nonzero: Vec<(u64, i64)> = (1..=r)
        .filter(|&j| mu[j as usize] != 0)
        .map(|j| (j, mu[j as usize] as i64))
        .collect();
    let squarefree_count = |x: u64| -> u64 {
        let sq = isqrt(x);
        let mut s = 0i64;
        for &(j, m) in &nonzero {
            if j > sq {
                break;
            }
            s += m * (x / (j * j)) as i64;
        }
        s as u64
    };
    let mut total = 0u128;
    for d in 1..=r {
        let dd = d as u128 * d as u128 % MOD as u128;
        let q = squarefree_count(n / (d * d)) % MOD;
        total += dd * q as u128 % MOD as u128;
    }
    (total % MOD as u128) as u64
}

/// O(N √N) reference for small N.
pub fn sum_largest_squares_brute(n: u64) -> u64 {
    let mut total = 0u64;
    for m in 1..=n {
        let mut g = 1;
        let mut d = 1;
        while d * d <= m {
            if m % (d * d) == 0 {
                g = d * d;
            }
            d += 1;
        }
        total += g;
    }
    total % MOD
}

pub fn solve() -> Answer {
    Answer::UInt(sum_largest_squares(100_000_000_000_000))
}
