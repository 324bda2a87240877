//! Linear recurrences via modular matrix exponentiation.
//!
//! Binary exponentiation of a square matrix over Z/m, used to evaluate
//! terms of linear recurrences at indices far beyond anything iterable.
//!
//! # Contents
//!
//! | Item | Description |
//! |------|-------------|
//! | [`ModMatrix`] | Runtime-size square matrix over Z/m with `mul` and `pow` |
//! | [`LinearRecurrence`] | Order-k recurrence evaluated by companion-matrix power |
//! | [`fibonacci_mod`] | Fast-doubling Fibonacci, F(1) = F(2) = 1 |
//!
//! # Example
//!
//! ```
//! use euleris::linrec::{LinearRecurrence, fibonacci_mod};
//!
//! // Fibonacci as an order-2 recurrence
//! let fib = LinearRecurrence::new(&[1, 1], &[1, 1], 1_000_000_007);
//! assert_eq!(fib.nth(10), 55);
//! assert_eq!(fib.nth(90), fibonacci_mod(90, 1_000_000_007));
//! ```

mod fibonacci;
mod matrix;
mod recurrence;


pub use fibonacci::fibonacci_mod;
pub use matrix::ModMatrix;
pub use recurrence::LinearRecurrence;
