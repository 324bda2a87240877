use num_traits::PrimInt;

/// Base-b digits of `n`, least significant first.
///
/// Returns `[0]` for `n = 0`. Panics if `base < 2`.
///
/// # Example
///
/// ```
/// use euleris::arith::digits;
///
/// assert_eq!(digits(1234u32, 10), vec![4, 3, 2, 1]);
/// assert_eq!(digits(10u32, 7), vec![3, 1]);
/// assert_eq!(digits(0u32, 2), vec![0]);
/// ```
pub fn digits<T: PrimInt>(mut n: T, base: T) -> Vec<T> {
    assert!(base >= T::from(2).unwrap(), "base must be at least 2");
    if n == T::zero() {
        return vec![T::zero()];
    }
    let mut out = Vec::new();
    while n != T::zero() {
        out.push(n % base);
        n = n / base;
    }
    out
}

/// Sum of the base-b digits of `n`.
///
/// ```
/// use euleris::arith::digit_sum;
///
/// assert_eq!(digit_sum(1234u32, 10), 10);
/// assert_eq!(digit_sum(255u32, 16), 30);
/// ```
pub fn digit_sum<T: PrimInt>(mut n: T, base: T) -> T {
    assert!(base >= T::from(2).unwrap(), "base must be at least 2");
    let mut sum = T::zero();
    while n != T::zero() {
        sum = sum + n % base;
        n = n / base;
    }
    sum
}
