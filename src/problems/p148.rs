//! Pascal's triangle modulo 7.
//!
//! By Lucas' theorem, row n contains ∏(dᵢ + 1) entries not divisible by 7,
//! where dᵢ are the base-7 digits of n. The row-prefix sum has a closed
//! form over those digits, so the first 10⁹ rows need no iteration at all.

use crate::arith::digits;

use super::Answer;

/// Entries not divisible by 7 in rows `0..nrows`, by the digit closed form.
///
/// Scanning the base-7 digits of `nrows` most significant first: rows whose
/// prefix matches and whose next digit is smaller contribute
/// `prefix_product * (d(d+1)/2) * 28^(remaining digits)`.
pub fn count_rows(nrows: u64) -> u64 {
    // sum over one full digit position: 1 + 2 + ... + 7 = 28
    let mut total = 0u64;
    let mut prefix = 1u64;
    for &d in digits(nrows, 7).iter().rev() {
        total = total * 28 + prefix * (d * (d + 1) / 2);
        prefix *= d + 1;
    }
    total
}

/// Row-by-row reference count, O(nrows log nrows).
pub fn count_rows_brute(nrows: u64) -> u64 {
    (0..nrows)
        .map(|n| digits(n, 7).iter().map(|&d| d + 1).product::<u64>())
        .sum()
}

pub fn solve() -> Answer {
    Answer::UInt(count_rows(1_000_000_000))
}
