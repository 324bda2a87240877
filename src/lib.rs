//! # euleris
//!
//! Number-theory primitives and a registry of self-contained numeric puzzle
//! solvers. The library half provides the arithmetic the solvers share;
//! each solver is an independent pure function computing one puzzle's answer.
//!
//! ## Quick start
//!
//! ```
//! use euleris::primes::Sieve;
//! use euleris::modular::mod_pow;
//!
//! let sieve = Sieve::new(100);
//! assert_eq!(sieve.primes().len(), 25);
//!
//! // 2^10 mod 1000 = 24
//! assert_eq!(mod_pow(2, 10, 1000), 24);
//! ```
//!
//! ## Modules
//!
//! - [`arith`] — integer helpers: `gcd`/`lcm` generic over [`num_traits::PrimInt`],
//!   exact integer square and cube roots, digit extraction in any base.
//!
//! - [`primes`] — bit-packed Eratosthenes [`primes::Sieve`], deterministic
//!   Miller–Rabin for all of u64 ([`primes::is_prime_u64`], [`primes::next_prime`]),
//!   Pollard-rho factorization with divisor enumeration and Euler totient,
//!   and a linear Möbius sieve.
//!
//! - [`modular`] — arithmetic in Z/m: overflow-safe [`modular::mod_mul`] /
//!   [`modular::mod_pow`], extended gcd and [`modular::mod_inverse`],
//!   Chinese remainder ([`modular::crt`]), and [`modular::multiplicative_order`].
//!
//! - [`linrec`] — binary exponentiation of square matrices under a modulus
//!   ([`linrec::ModMatrix`]), order-k linear recurrences via companion-matrix
//!   power ([`linrec::LinearRecurrence`]), and fast-doubling
//!   [`linrec::fibonacci_mod`].
//!
//! - [`problems`] — one module per puzzle plus a static [`problems::Problem`]
//!   registry. The `euleris` binary runs solvers by id and prints their answers.

pub mod arith;
pub mod linrec;
pub mod modular;
pub mod primes;
pub mod problems;

pub use arith::{gcd, icbrt, isqrt, lcm};
pub use linrec::{fibonacci_mod, LinearRecurrence, ModMatrix};
pub use modular::{mod_inverse, mod_mul, mod_pow};
pub use primes::Sieve;
pub use problems::{Answer, Problem};
