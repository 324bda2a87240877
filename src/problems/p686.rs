//! Powers of two with a fixed leading-digit prefix.
//!
//! 2^j starts with the digits of `prefix` exactly when the fractional part
//! of j·log₁₀2 lands in [log₁₀ 1.23, log₁₀ 1.24) (for prefix 123). Walk j
//! upward counting hits.

use super::Answer;

/// Index j of the `nth` power of two whose decimal expansion starts with
/// `prefix`. `prefix + 1` must not be a power of ten.
pub fn nth_power_with_prefix(prefix: u64, nth: u64) -> u64 {
    let scale = 10u64.pow(prefix.ilog10());
    let lo = (prefix as f64 / scale as f64).log10();
    let hi = ((prefix + 1) as f64 / scale as f64).log10();
    let log2 = 2f64.log10();
    let mut count = 0u64;
    let mut j = 0u64;
    loop {
        j += 1;
        let frac = (j as f64 * log2).fract();
        if frac >= lo && frac < hi {
            count += 1;
            if count == nth {
                return j;
            }
        }
    }
}

pub fn solve() -> Answer {
    Answer::UInt(nth_power_with_prefix(123, 678_910))
}
