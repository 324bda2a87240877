//! Maximum product of equal parts.
//!
//! Splitting N into k equal parts maximizes (N/k)^k near k = N/e. The
//! maximum M(N) is a terminating decimal exactly when k/gcd(N, k) has no
//! prime factor besides 2 and 5; sum −N for terminating, +N otherwise.

use crate::arith::gcd;

use super::Answer;

/// The part count k maximizing k·ln(N/k), checked against its neighbors.
fn best_part_count(n: u64) -> u64 {
    let k0 = (n as f64 / core::f64::consts::E).round() as u64;
    let score = |k: u64| {
        if k == 0 {
            f64::NEG_INFINITY
        } else {
            k as f64 * (n as f64 / k as f64).ln()
        }
    };
    [k0.saturating_sub(1), k0, k0 + 1]
        .into_iter()
        .max_by(|&a, &b| score(a).total_cmp(&score(b)))
        .unwrap()
}

/// Does M(N) terminate as a decimal?
fn terminates(n: u64, k: u64) -> bool {
    let mut d = k / gcd(n, k);
    while d % 2 == 0 {
        d /= 2;
    }
    while d % 5 == 0 {
        d /= 5;
    }
    d == 1
}

/// Sum of D(N) = −N (terminating) or +N over `5 <= N <= limit`.
pub fn sum_d(limit: u64) -> i64 {
    (5..=limit)
        .map(|n| {
            let k = best_part_count(n);
            if terminates(n, k) {
                -(n as i64)
            } else {
                n as i64
            }
        })
        .sum()
}

pub fn solve() -> Answer {
    Answer::Int(sum_d(10_000))
}
