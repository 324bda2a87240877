//! Tours on a 4 × n playing board.
//!
//! The tour count T(n) obeys the order-4 recurrence
//! T(n) = 2T(n−1) + 2T(n−2) − 2T(n−3) + T(n−4) with T(1..4) = 1, 1, 4, 8;
//! evaluate T(10¹²) mod 10⁸ by companion-matrix power.

use crate::linrec::LinearRecurrence;

use super::Answer;

/// T(n) mod `modulus`.
pub fn tours(n: u64, modulus: u64) -> u64 {
    LinearRecurrence::new(&[2, 2, -2, 1], &[1, 1, 4, 8], modulus).nth(n)
}

pub fn solve() -> Answer {
    Answer::UInt(tours(1_000_000_000_000, 100_000_000))
}
