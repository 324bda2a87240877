//! Integer helpers shared across the solvers.
//!
//! Generic where it is natural (`gcd`/`lcm`/digits over [`num_traits::PrimInt`]),
//! concrete `u64` where exactness matters (integer roots).
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gcd`] | Greatest common divisor (Euclid) |
//! | [`lcm`] | Least common multiple, divide-before-multiply |
//! | [`isqrt`] | Exact floor square root of a `u64` |
//! | [`icbrt`] | Exact floor cube root of a `u64` |
//! | [`digits`] | Base-b digits, least significant first |
//! | [`digit_sum`] | Sum of base-b digits |
//!
//! # Example
//!
//! ```
//! use euleris::arith::{gcd, lcm, isqrt, digit_sum};
//!
//! assert_eq!(gcd(12u64, 18), 6);
//! assert_eq!(lcm(4u64, 6), 12);
//! assert_eq!(isqrt(10), 3);
//! assert_eq!(digit_sum(1234u32, 10), 10);
//! ```

mod digits;
mod gcd;
mod roots;

#[cfg(test)]
mod tests;

pub use digits::{digit_sum, digits};
pub use gcd::{gcd, lcm};
pub use roots::{icbrt, isqrt};
