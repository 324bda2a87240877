//! Eulerian numbers modulo a prime.
//!
//! A(n, k) = Σᵢ (−1)ⁱ C(n+1, i) (k+1−i)ⁿ with the binomial prefix built
//! incrementally by Fermat inverses, O(k log n) total.

use crate::modular::{mod_mul, mod_pow};

use super::Answer;

const MOD: u64 = 1_000_000_007;

/// Eulerian number A(n, k) mod 10⁹+7.
pub fn eulerian_mod(n: u64, k: u64) -> u64 {
    let mut binom = 1u64; // C(n+1, i), starting at i = 0
    let mut result = 0u64;
    for i in 0..=k {
        let term = mod_mul(binom, mod_pow(k + 1 - i, n, MOD), MOD);
        result = if i % 2 == 0 {
            (result + term) % MOD
        } else {
            (result + MOD - term) % MOD
        };
        // C(n+1, i+1) = C(n+1, i) * (n+1-i) / (i+1)
        binom = mod_mul(binom, (n + 1 - i) % MOD, MOD);
        binom = mod_mul(binom, mod_pow(i + 1, MOD - 2, MOD), MOD);
    }
    result
}

pub fn solve() -> Answer {
    Answer::UInt(eulerian_mod(10_000_000, 4_000_000 - 1))
}
