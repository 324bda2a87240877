use crate::arith::gcd;
use crate::primes::{factorize, totient};

use super::mod_pow;

/// Multiplicative order of `a` in (Z/m)*: the least `k > 0` with
/// `a^k ≡ 1 (mod m)`.
///
/// Returns `None` when `gcd(a, m) != 1` (no power of `a` is ever 1).
/// Starts from φ(m) and divides out prime factors while the power stays 1,
/// so only O(log φ) exponentiations are needed.
///
/// Panics if `m == 0`. `multiplicative_order(_, 1)` is `Some(1)`.
///
/// # Example
///
/// ```
/// use euleris::modular::multiplicative_order;
///
/// // 1/7 = 0.(142857): period 6
/// assert_eq!(multiplicative_order(10, 7), Some(6));
/// // 10 and 14 share a factor of 2
/// assert_eq!(multiplicative_order(10, 14), None);
/// assert_eq!(multiplicative_order(2, 2u64.pow(20) - 1), Some(20));
/// ```
pub fn multiplicative_order(a: u64, m: u64) -> Option<u64> {
    assert!(m > 0, "modulus must be nonzero");
    if m == 1 {
        return Some(1);
    }
    if gcd(a % m, m) != 1 {
        return None;
    }
    let phi = totient(m);
    let mut order = phi;
    for (p, _) in factorize(phi) {
        while order % p == 0 && mod_pow(a, order / p, m) == 1 {
            order /= p;
        }
    }
    Some(order)
}
