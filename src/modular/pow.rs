/// `a * b mod m` with a `u128` intermediate, safe for any `u64` modulus.
///
/// Panics if `m == 0`.
///
/// ```
/// use euleris::modular::mod_mul;
///
/// assert_eq!(mod_mul(1 << 40, 1 << 40, 1_000_000_007), 496641140);
/// ```
#[inline]
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    (a as u128 * b as u128 % m as u128) as u64
}

/// `base^exp mod m` by binary exponentiation.
///
/// `mod_pow(_, 0, m)` is `1 % m`; panics if `m == 0`.
///
/// ```
/// use euleris::modular::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1_000), 24);
/// assert_eq!(mod_pow(10, 0, 7), 1);
/// assert_eq!(mod_pow(7, 644, 645), 436);
/// ```
pub fn mod_pow(base: u64, exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut base = base % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }
        base = mod_mul(base, base, m);
        exp >>= 1;
    }
    result
}
