//! Stealthy numbers.
//!
//! N is stealthy when N = ab = cd with a + b = c + d + 1. Every stealthy
//! number has the form x(x+1)·y(y+1); enumerate all such products up to
//! the limit and count them once each.

use super::Answer;

/// Count stealthy numbers ≤ `limit`.
pub fn count_stealthy(limit: u64) -> u64 {
    let mut vals: Vec<u64> = Vec::new();
    let mut x = 1u64;
    loop {
        let xt = x * (x + 1);
        if (xt as u128) * (xt as u128) > limit as u128 {
            break;
        }
        // y starts at x; smaller y were already produced with roles swapped
        let mut y = x;
        loop {
            let v = xt as u128 * (y as u128 * (y + 1) as u128);
            if v > limit as u128 {
                break;
            }
            vals.push(v as u64);
            y += 1;
        }
        x += 1;
    }
    vals.sort_unstable();
    vals.dedup();
    vals.len() as u64
}

pub fn solve() -> Answer {
    Answer::UInt(count_stealthy(100_000_000_000_000))
}
