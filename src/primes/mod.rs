//! Primes: sieving, primality testing, factorization.
//!
//! # Contents
//!
//! | Item | Description |
//! |------|-------------|
//! | [`Sieve`] | Bit-packed Eratosthenes sieve with membership and iteration |
//! | [`is_prime_u64`] | Deterministic Miller–Rabin, valid for all `u64` |
//! | [`next_prime`] | Smallest prime strictly greater than `n` |
//! | [`factorize`] | Prime factorization (trial division + Pollard rho) |
//! | [`divisors`] | All divisors, ascending |
//! | [`divisor_count`] | Number of divisors |
//! | [`totient`] | Euler's φ |
//! | [`mobius_sieve`] | Linear sieve of the Möbius function |
//!
//! # Example
//!
//! ```
//! use euleris::primes::{Sieve, factorize, totient};
//!
//! let sieve = Sieve::new(30);
//! assert!(sieve.is_prime(29));
//! assert_eq!(sieve.primes(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//!
//! assert_eq!(factorize(360), vec![(2, 3), (3, 2), (5, 1)]);
//! assert_eq!(totient(10), 4);
//! ```

mod factor;
mod miller_rabin;
mod mobius;
mod sieve;

#[cfg(test)]
mod tests;

pub use factor::{divisor_count, divisors, factorize, totient};
pub use miller_rabin::{is_prime_u64, next_prime};
pub use mobius::mobius_sieve;
pub use sieve::Sieve;
