use crate::modular::{mod_mul, mod_pow};

// Deterministic witness set for n < 2^64 (Sorenson & Webster).
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller–Rabin primality test, valid for all `u64`.
///
/// # Example
///
/// ```
/// use euleris::primes::is_prime_u64;
///
/// assert!(is_prime_u64(2));
/// assert!(is_prime_u64(1_000_000_007));
/// assert!(is_prime_u64(100_000_000_000_031));
/// assert!(!is_prime_u64(1));
/// assert!(!is_prime_u64(100_000_000_000_033));
/// ```
pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37] {
        if n % p == 0 {
            return n == p;
        }
    }
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }
    'witness: for &a in &WITNESSES {
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 0..s - 1 {
            x = mod_mul(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Smallest prime strictly greater than `n`.
///
/// ```
/// use euleris::primes::next_prime;
///
/// assert_eq!(next_prime(0), 2);
/// assert_eq!(next_prime(2), 3);
/// assert_eq!(next_prime(14), 17);
/// assert_eq!(next_prime(100_000_000_000_000), 100_000_000_000_031);
/// ```
pub fn next_prime(n: u64) -> u64 {
    if n < 2 {
        return 2;
    }
    let mut c = n + 1 + (n % 2);
    while !is_prime_u64(c) {
        c += 2;
    }
    c
}
