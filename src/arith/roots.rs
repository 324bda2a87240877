/// Exact floor square root of a `u64`.
///
/// Seeds from the hardware `f64` square root, then corrects in integer
/// arithmetic, so the result is exact for the full `u64` range.
///
/// # Example
///
/// ```
/// use euleris::arith::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// assert_eq!(isqrt(u64::MAX), 4294967295);
/// ```
pub fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |s| s > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|s| s <= n) {
        r += 1;
    }
    r
}

/// Exact floor cube root of a `u64`.
///
/// ```
/// use euleris::arith::icbrt;
///
/// assert_eq!(icbrt(26), 2);
/// assert_eq!(icbrt(27), 3);
/// assert_eq!(icbrt(1_000_000_000_000_000_000), 1_000_000);
/// ```
pub fn icbrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let cube = |r: u64| r.checked_mul(r).and_then(|s| s.checked_mul(r));
    let mut r = (n as f64).cbrt() as u64;
    while cube(r).map_or(true, |c| c > n) {
        r -= 1;
    }
    while cube(r + 1).is_some_and(|c| c <= n) {
        r += 1;
    }
    r
}
