use crate::modular::mod_mul;

use super::is_prime_u64;

/// Prime factorization of `n`, sorted by prime.
///
/// Trial division strips small factors, then Pollard's rho splits the
/// remaining composite part. `factorize(0)` and `factorize(1)` return an
/// empty vector.
///
/// # Example
///
/// ```
/// use euleris::primes::factorize;
///
/// assert_eq!(factorize(1), vec![]);
/// assert_eq!(factorize(360), vec![(2, 3), (3, 2), (5, 1)]);
/// assert_eq!(factorize(2u64.pow(60) - 1)[0], (3, 2));
/// ```
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }
    for p in [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47] {
        if n % p == 0 {
            let mut exp = 0;
            while n % p == 0 {
                n /= p;
                exp += 1;
            }
            factors.push((p, exp));
        }
    }
    let mut stack = Vec::new();
    if n > 1 {
        stack.push(n);
    }
    let mut large = Vec::new();
    while let Some(m) = stack.pop() {
        if is_prime_u64(m) {
            large.push(m);
            continue;
        }
        let d = pollard_rho(m);
        stack.push(d);
        stack.push(m / d);
    }
    large.sort_unstable();
    let mut i = 0;
    while i < large.len() {
        let p = large[i];
        let mut exp = 0;
        while i < large.len() && large[i] == p {
            exp += 1;
            i += 1;
        }
        factors.push((p, exp));
    }
    factors
}

/// Nontrivial factor of an odd composite `n` with no factor below 50.
///
/// Floyd-cycle Pollard rho; retries with successive polynomial offsets
/// until a split is found, which terminates for all composites.
fn pollard_rho(n: u64) -> u64 {
    debug_assert!(!is_prime_u64(n));
    let mut c = 1u64;
    loop {
        let f = |x: u64| (mod_mul(x, x, n) + c) % n;
        let mut x = 2u64;
        let mut y = 2u64;
        let mut d = 1u64;
        while d == 1 {
            x = f(x);
            y = f(f(y));
            d = crate::arith::gcd(x.abs_diff(y), n);
        }
        if d != n {
            return d;
        }
        c += 1;
    }
}

/// All divisors of `n` in ascending order. `divisors(1) == [1]`.
///
/// ```
/// use euleris::primes::divisors;
///
/// assert_eq!(divisors(1), vec![1]);
/// assert_eq!(divisors(28), vec![1, 2, 4, 7, 14, 28]);
/// ```
pub fn divisors(n: u64) -> Vec<u64> {
    let mut out = vec![1u64];
    for (p, exp) in factorize(n) {
        let prev = out.len();
        let mut pk = 1u64;
        for _ in 0..exp {
            pk *= p;
            for i in 0..prev {
                out.push(out[i] * pk);
            }
        }
    }
    out.sort_unstable();
    out
}

/// Number of divisors of `n`.
///
/// ```
/// use euleris::primes::divisor_count;
///
/// assert_eq!(divisor_count(1), 1);
/// assert_eq!(divisor_count(28), 6);
/// ```
pub fn divisor_count(n: u64) -> u64 {
    factorize(n)
        .iter()
        .map(|&(_, exp)| exp as u64 + 1)
        .product()
}

/// Euler's totient φ(n): count of 1 ≤ k ≤ n coprime to n.
///
/// ```
/// use euleris::primes::totient;
///
/// assert_eq!(totient(1), 1);
/// assert_eq!(totient(10), 4);
/// assert_eq!(totient(97), 96);
/// ```
pub fn totient(n: u64) -> u64 {
    let mut phi = n;
    for (p, _) in factorize(n) {
        phi -= phi / p;
    }
    phi
}
