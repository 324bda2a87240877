//! Cubic roots of unity modulo a primorial.
//!
//! For n = 2·3·5···43 (squarefree), x³ ≡ 1 (mod n) exactly when x is a cube
//! root of unity modulo every prime factor; combine one root per prime by
//! the Chinese remainder theorem and sum the solutions with 1 < x < n.

use crate::modular::{crt, mod_pow};

use super::Answer;

const PRIMES: [u64; 14] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43];

/// Cube roots of unity modulo a prime p; three when p ≡ 1 (mod 3), else one.
fn cube_roots_mod(p: u64) -> Vec<u64> {
    (1..p).filter(|&x| mod_pow(x, 3, p) == 1).collect()
}

/// Sum of all 1 < x < primorial(43) with x³ ≡ 1.
pub fn sum_cube_roots() -> u64 {
    let roots: Vec<Vec<u64>> = PRIMES.iter().map(|&p| cube_roots_mod(p)).collect();
    // odometer over one residue choice per prime
    let mut choice = vec![0usize; PRIMES.len()];
    let mut total = 0u64;
    loop {
        let residues: Vec<u64> = roots
            .iter()
            .zip(&choice)
            .map(|(rs, &i)| rs[i])
            .collect();
        let x = crt(&residues, &PRIMES).expect("primes are pairwise coprime");
        if x > 1 {
            total += x;
        }
        // advance the odometer
        let mut pos = 0;
        loop {
            if pos == choice.len() {
                return total;
            }
            choice[pos] += 1;
            if choice[pos] < roots[pos].len() {
                break;
            }
            choice[pos] = 0;
            pos += 1;
        }
    }
}

pub fn solve() -> Answer {
    Answer::UInt(sum_cube_roots())
}
