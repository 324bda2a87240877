//! Riffle shuffles.
//!
//! A perfect riffle of a deck of n cards returns to start after the
//! multiplicative order of 2 modulo n − 1 shuffles. Decks with shuffle
//! order exactly s therefore correspond to divisors d of 2^s − 1 whose
//! order of 2 is exactly s; sum the deck sizes d + 1.

use crate::modular::mod_pow;
use crate::primes::divisors;

use super::Answer;

/// Σ n over deck sizes n whose riffle-shuffle order is exactly `s`.
pub fn sum_deck_sizes(s: u32) -> u64 {
    let n = 2u64.pow(s) - 1;
    let exponents = divisors(s as u64);
    let mut total = 0u64;
    for d in divisors(n) {
        if d == 1 {
            continue;
        }
        // d divides 2^s - 1, so ord_d(2) divides s; take the least exponent
        let ord = exponents
            .iter()
            .copied()
            .find(|&e| mod_pow(2, e, d) == 1)
            .expect("2^s ≡ 1 mod every divisor of 2^s - 1");
        if ord == s as u64 {
            total += d + 1;
        }
    }
    total
}

pub fn solve() -> Answer {
    Answer::UInt(sum_deck_sizes(60))
}
