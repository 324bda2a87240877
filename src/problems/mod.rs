//! One module per puzzle, plus the registry the runner binary consumes.
//!
//! Each solver is a pure function from nothing to its puzzle's numeric
//! answer. The heavy computations are parameterized so tests can exercise
//! reduced limits against brute-force oracles; `solve()` always uses the
//! puzzle's stated parameters.
//!
//! ```
//! use euleris::problems;
//!
//! let p = problems::find(131).unwrap();
//! assert_eq!((p.solve)().to_string(), "173");
//! ```

use core::fmt;

pub mod p131;
pub mod p148;
pub mod p183;
pub mod p237;
pub mod p271;
pub mod p274;
pub mod p304;
pub mod p327;
pub mod p417;
pub mod p601;
pub mod p602;
pub mod p622;
pub mod p686;
pub mod p694;
pub mod p745;
pub mod p757;
pub mod p918;


/// A solver's numeric answer.
///
/// Most puzzles produce a non-negative integer; a few recurrences go
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Non-negative integer answer.
    UInt(u64),
    /// Signed integer answer.
    Int(i64),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::UInt(v) => write!(f, "{v}"),
            Answer::Int(v) => write!(f, "{v}"),
        }
    }
}

/// A registered puzzle solver.
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    /// Puzzle number.
    pub id: u32,
    /// Short description of the computation.
    pub title: &'static str,
    /// Computes the answer from scratch on every call.
    pub solve: fn() -> Answer,
}

/// All registered solvers, ascending by id.
pub static PROBLEMS: &[Problem] = &[
    Problem { id: 131, title: "primes of the form 3k^2 + 3k + 1 below 10^6", solve: p131::solve },
    Problem { id: 148, title: "Pascal-triangle entries not divisible by 7 in 10^9 rows", solve: p148::solve },
    Problem { id: 183, title: "maximum-product partitions with terminating decimals", solve: p183::solve },
    Problem { id: 237, title: "tours on a 4 x 10^12 board, mod 10^8", solve: p237::solve },
    Problem { id: 271, title: "cubic roots of unity modulo primorial(43)", solve: p271::solve },
    Problem { id: 274, title: "divisibility multipliers of primes below 10^7", solve: p274::solve },
    Problem { id: 304, title: "Fibonacci at 10^5 primes past 10^14, mod 1234567891011", solve: p304::solve },
    Problem { id: 327, title: "cards needed to pass 30 security rooms", solve: p327::solve },
    Problem { id: 417, title: "sum of reciprocal cycle lengths up to 10^8", solve: p417::solve },
    Problem { id: 601, title: "divisibility streak counts below powers of four", solve: p601::solve },
    Problem { id: 602, title: "Eulerian number A(10^7, 4*10^6 - 1) mod 10^9 + 7", solve: p602::solve },
    Problem { id: 622, title: "deck sizes whose riffle-shuffle order is sixty", solve: p622::solve },
    Problem { id: 686, title: "index of the 678910th power of two starting with 123", solve: p686::solve },
    Problem { id: 694, title: "cube-full divisor counts summed to 10^18", solve: p694::solve },
    Problem { id: 745, title: "largest square divisors summed to 10^14, mod 10^9 + 7", solve: p745::solve },
    Problem { id: 757, title: "stealthy numbers up to 10^14", solve: p757::solve },
    Problem { id: 918, title: "halving-recurrence partial sum S(10^12)", solve: p918::solve },
];

/// Look up a solver by puzzle number.
pub fn find(id: u32) -> Option<&'static Problem> {
    PROBLEMS.binary_search_by_key(&id, |p| p.id).ok().map(|i| &PROBLEMS[i])
}
