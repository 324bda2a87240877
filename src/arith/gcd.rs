use num_traits::PrimInt;

/// Greatest common divisor by Euclid's algorithm.
///
/// Inputs are expected non-negative; `gcd(0, 0) = 0`.
///
/// # Example
///
/// ```
/// use euleris::arith::gcd;
///
/// assert_eq!(gcd(54u64, 24), 6);
/// assert_eq!(gcd(17u64, 5), 1);
/// assert_eq!(gcd(0u64, 9), 9);
/// ```
pub fn gcd<T: PrimInt>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple.
///
/// Divides before multiplying, so the result is exact whenever it fits `T`.
/// `lcm(0, n) = 0`.
///
/// # Example
///
/// ```
/// use euleris::arith::lcm;
///
/// assert_eq!(lcm(4u64, 6), 12);
/// assert_eq!(lcm(21u128, 6), 42);
/// assert_eq!(lcm(0u64, 5), 0);
/// ```
pub fn lcm<T: PrimInt>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }
    a / gcd(a, b) * b
}
