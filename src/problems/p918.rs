//! Partial sums of a halving recurrence.
//!
//! a(1) = 1, a(2n) = 2a(n), a(2n+1) = a(n) − 3a(n+1). The partial sum
//! telescopes: S(2n) = 4 − a(n), so S(10¹²) needs only the O(log n) chain
//! of a-values reachable by repeated halving.

use std::collections::HashMap;

use super::Answer;

fn a(n: u64, memo: &mut HashMap<u64, i64>) -> i64 {
    if n == 1 {
        return 1;
    }
    if let Some(&v) = memo.get(&n) {
        return v;
    }
    let v = if n % 2 == 0 {
        2 * a(n / 2, memo)
    } else {
        a(n / 2, memo) - 3 * a(n / 2 + 1, memo)
    };
    memo.insert(n, v);
    v
}

/// S(n) = Σ_{k=1..n} a(k).
pub fn series_sum(n: u64) -> i64 {
    fn s(n: u64, memo: &mut HashMap<u64, i64>) -> i64 {
        match n {
            0 => 0,
            1 => 1,
            n if n % 2 == 0 => 4 - a(n / 2, memo),
            n => s(n - 1, memo) + a(n, memo),
        }
    }
    s(n, &mut HashMap::new())
}

pub fn solve() -> Answer {
    Answer::Int(series_sum(1_000_000_000_000))
}
