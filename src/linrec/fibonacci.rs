use crate::modular::mod_mul;

/// F(n) mod m by fast doubling, with F(1) = F(2) = 1 and F(0) = 0.
///
/// Uses the identities F(2j) = F(j)·(2·F(j+1) − F(j)) and
/// F(2j+1) = F(j)² + F(j+1)², O(log n) multiplications.
///
/// # Example
///
/// ```
/// use euleris::linrec::fibonacci_mod;
///
/// assert_eq!(fibonacci_mod(0, 1_000), 0);
/// assert_eq!(fibonacci_mod(10, 1_000), 55);
/// assert_eq!(fibonacci_mod(50, 1_000_000_007), 586268941); // F(50) = 12586269025
/// ```
pub fn fibonacci_mod(n: u64, m: u64) -> u64 {
    fn doubling(n: u64, m: u64) -> (u64, u64) {
        if n == 0 {
            return (0, 1 % m);
        }
        let (a, b) = doubling(n >> 1, m);
        // c = F(2j), d = F(2j+1); sums stay in u128 until reduced
        let two_b_minus_a = ((2 * b as u128 + m as u128 - a as u128) % m as u128) as u64;
        let c = mod_mul(a, two_b_minus_a, m);
        let d = ((mod_mul(a, a, m) as u128 + mod_mul(b, b, m) as u128) % m as u128) as u64;
        if n & 1 == 0 {
            (c, d)
        } else {
            (d, ((c as u128 + d as u128) % m as u128) as u64)
        }
    }
    doubling(n, m).0
}
