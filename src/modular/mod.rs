//! Arithmetic in Z/m.
//!
//! All operations take `u64` operands and go through `u128` intermediates,
//! so they are overflow-safe for any modulus that fits `u64`.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`mod_mul`] | `a * b mod m` without overflow |
//! | [`mod_pow`] | `base^exp mod m` by binary exponentiation |
//! | [`ext_gcd`] | Extended Euclid: `(g, x, y)` with `a*x + b*y = g` |
//! | [`mod_inverse`] | Multiplicative inverse, `None` if not coprime |
//! | [`crt`] | Chinese remainder for pairwise-coprime moduli |
//! | [`multiplicative_order`] | Order of `a` in (Z/m)*, `None` if not coprime |
//!
//! # Example
//!
//! ```
//! use euleris::modular::{mod_pow, mod_inverse, multiplicative_order};
//!
//! assert_eq!(mod_pow(3, 100, 7), 4);
//! assert_eq!(mod_inverse(10, 17), Some(12)); // 10 * 12 = 120 ≡ 1 (mod 17)
//! assert_eq!(multiplicative_order(10, 7), Some(6)); // 1/7 repeats with period 6
//! ```

mod crt;
mod inverse;
mod order;
mod pow;

#[cfg(test)]
mod tests;

pub use crt::crt;
pub use inverse::{ext_gcd, mod_inverse};
pub use order::multiplicative_order;
pub use pow::{mod_mul, mod_pow};
