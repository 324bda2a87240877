/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
///
/// ```
/// use euleris::modular::ext_gcd;
///
/// let (g, x, y) = ext_gcd(240, 46);
/// assert_eq!(g, 2);
/// assert_eq!(240 * x + 46 * y, 2);
/// ```
pub fn ext_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (g, x, y) = ext_gcd(b, a % b);
    (g, y, x - (a / b) * y)
}

/// Multiplicative inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
///
/// Panics if `m == 0`.
///
/// ```
/// use euleris::modular::mod_inverse;
///
/// assert_eq!(mod_inverse(3, 7), Some(5));
/// assert_eq!(mod_inverse(10, 17), Some(12));
/// assert_eq!(mod_inverse(6, 9), None);
/// ```
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    assert!(m > 0, "modulus must be nonzero");
    if m == 1 {
        return Some(0);
    }
    let (g, x, _) = ext_gcd((a % m) as i128, m as i128);
    if g != 1 {
        return None;
    }
    Some(x.rem_euclid(m as i128) as u64)
}
