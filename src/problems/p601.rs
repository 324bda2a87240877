//! Divisibility streaks.
//!
//! streak(n) = s means k divides n + k − 1 for k = 1..s but not k = s + 1,
//! which holds exactly when n ≡ 1 (mod lcm(1..s)) and n ≢ 1 (mod lcm(1..s+1)).
//! P(s, N) counts 1 < n < N with streak exactly s.

use crate::arith::lcm;

use super::Answer;

/// lcm(1..=s).
fn lcm_to(s: u64) -> u64 {
    (2..=s).fold(1, lcm)
}

/// P(s, n): numbers 1 < x < n with divisibility streak exactly s.
pub fn streak_count(s: u64, n: u64) -> u64 {
    (n - 2) / lcm_to(s) - (n - 2) / lcm_to(s + 1)
}

/// streak(n) by direct checking, for cross-validation.
pub fn streak(n: u64) -> u64 {
    let mut s = 1;
    while (n + s - 1) % s == 0 {
        s += 1;
    }
    s - 1
}

/// Σ P(i, 4^i) for i = 1..=31.
pub fn sum_streak_counts() -> u64 {
    (1..=31).map(|i| streak_count(i, 4u64.pow(i as u32))).sum()
}

pub fn solve() -> Answer {
    Answer::UInt(sum_streak_counts())
}
