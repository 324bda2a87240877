use super::*;

// =====================================================================
// Sieve
// =====================================================================

#[test]
fn sieve_small_primes() {
    let s = Sieve::new(30);
    let expected = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29];
    assert_eq!(s.primes(), expected);
    assert_eq!(s.count(), 10);
}

#[test]
fn sieve_membership() {
    let s = Sieve::new(1000);
    assert!(!s.is_prime(0));
    assert!(!s.is_prime(1));
    assert!(s.is_prime(2));
    assert!(s.is_prime(997));
    assert!(!s.is_prime(1000));
    assert!(!s.is_prime(561)); // Carmichael number
}

#[test]
fn sieve_counts_match_pi() {
    // π(10^k) for k = 1..6
    for (limit, pi) in [(10u64, 4), (100, 25), (1_000, 168), (10_000, 1_229), (100_000, 9_592), (1_000_000, 78_498)] {
        assert_eq!(Sieve::new(limit).count(), pi, "pi({limit})");
    }
}

#[test]
fn sieve_tiny_limits() {
    assert_eq!(Sieve::new(0).count(), 0);
    assert_eq!(Sieve::new(1).count(), 0);
    assert_eq!(Sieve::new(2).primes(), vec![2]);
}

#[test]
fn sieve_agrees_with_miller_rabin() {
    let s = Sieve::new(10_000);
    for n in 0..=10_000u64 {
        assert_eq!(s.is_prime(n), is_prime_u64(n), "n = {n}");
    }
}

#[test]
#[should_panic(expected = "beyond sieve limit")]
fn sieve_rejects_out_of_range() {
    Sieve::new(10).is_prime(11);
}

// =====================================================================
// Miller-Rabin / next_prime
// =====================================================================

#[test]
fn miller_rabin_known_primes() {
    for p in [2u64, 3, 5, 31, 997, 1_000_000_007, 1_000_000_000_039, 1_234_567_891, 100_000_000_000_031] {
        assert!(is_prime_u64(p), "{p} is prime");
    }
}

#[test]
fn miller_rabin_known_composites() {
    // includes strong-pseudoprime candidates to small bases
    for n in [0u64, 1, 4, 561, 3_215_031_751, 3_474_749_660_383, 341_550_071_728_321] {
        assert!(!is_prime_u64(n), "{n} is composite");
    }
}

#[test]
fn miller_rabin_large_semiprime() {
    // 1_000_000_007 * 1_000_000_009
    assert!(!is_prime_u64(1_000_000_016_000_000_063));
}

#[test]
fn next_prime_basic() {
    assert_eq!(next_prime(0), 2);
    assert_eq!(next_prime(1), 2);
    assert_eq!(next_prime(2), 3);
    assert_eq!(next_prime(3), 5);
    assert_eq!(next_prime(13), 17);
    assert_eq!(next_prime(89), 97);
}

#[test]
fn next_prime_past_1e14() {
    assert_eq!(next_prime(100_000_000_000_000), 100_000_000_000_031);
    assert_eq!(next_prime(100_000_000_000_031), 100_000_000_000_067);
}

#[test]
fn next_prime_chain_matches_sieve() {
    let s = Sieve::new(10_000);
    let mut expected = s.iter();
    let mut p = 0u64;
    for _ in 0..s.count() {
        p = next_prime(p);
        assert_eq!(Some(p), expected.next());
    }
}

// =====================================================================
// factorize / divisors / totient
// =====================================================================

#[test]
fn factorize_small() {
    assert_eq!(factorize(0), vec![]);
    assert_eq!(factorize(1), vec![]);
    assert_eq!(factorize(2), vec![(2, 1)]);
    assert_eq!(factorize(12), vec![(2, 2), (3, 1)]);
    assert_eq!(factorize(360), vec![(2, 3), (3, 2), (5, 1)]);
    assert_eq!(factorize(97), vec![(97, 1)]);
}

#[test]
fn factorize_reconstructs() {
    for n in 1u64..2000 {
        let prod: u64 = factorize(n).iter().map(|&(p, e)| p.pow(e)).product();
        assert_eq!(prod, n);
    }
}

#[test]
fn factorize_needs_rho() {
    // 1_000_003 * 1_000_033: both beyond the trial-division cutoff
    let n = 1_000_003u64 * 1_000_033;
    assert_eq!(factorize(n), vec![(1_000_003, 1), (1_000_033, 1)]);
    // prime square
    assert_eq!(factorize(1_000_003u64 * 1_000_003), vec![(1_000_003, 2)]);
}

#[test]
fn factorize_mersenne_like() {
    // 2^60 - 1 = 3^2 * 5^2 * 7 * 11 * 13 * 31 * 41 * 61 * 151 * 331 * 1321
    let f = factorize(2u64.pow(60) - 1);
    assert_eq!(
        f,
        vec![
            (3, 2),
            (5, 2),
            (7, 1),
            (11, 1),
            (13, 1),
            (31, 1),
            (41, 1),
            (61, 1),
            (151, 1),
            (331, 1),
            (1321, 1)
        ]
    );
}

#[test]
fn divisors_small() {
    assert_eq!(divisors(1), vec![1]);
    assert_eq!(divisors(28), vec![1, 2, 4, 7, 14, 28]);
    assert_eq!(divisors(97), vec![1, 97]);
}

#[test]
fn divisors_sorted_and_complete() {
    for n in 1u64..500 {
        let ds = divisors(n);
        let brute: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
        assert_eq!(ds, brute, "n = {n}");
    }
}

#[test]
fn divisor_count_matches() {
    for n in 1u64..500 {
        assert_eq!(divisor_count(n), divisors(n).len() as u64);
    }
}

#[test]
fn totient_small() {
    assert_eq!(totient(1), 1);
    assert_eq!(totient(9), 6);
    assert_eq!(totient(10), 4);
    assert_eq!(totient(36), 12);
    assert_eq!(totient(97), 96);
}

#[test]
fn totient_brute() {
    for n in 1u64..300 {
        let brute = (1..=n).filter(|&k| crate::arith::gcd(k, n) == 1).count() as u64;
        assert_eq!(totient(n), brute, "n = {n}");
    }
}

// =====================================================================
// mobius_sieve
// =====================================================================

#[test]
fn mobius_known_values() {
    let mu = mobius_sieve(30);
    assert_eq!(mu[1], 1);
    assert_eq!(mu[2], -1);
    assert_eq!(mu[4], 0);
    assert_eq!(mu[6], 1);
    assert_eq!(mu[30], -1); // 2*3*5
    assert_eq!(mu[12], 0);
}

#[test]
fn mobius_matches_factorization() {
    let mu = mobius_sieve(2000);
    for n in 1usize..=2000 {
        let f = factorize(n as u64);
        let squarefree = f.iter().all(|&(_, e)| e == 1);
        let expected = if !squarefree {
            0
        } else if f.len() % 2 == 0 {
            1
        } else {
            -1
        };
        assert_eq!(mu[n], expected, "n = {n}");
    }
}

#[test]
fn mobius_mertens_partial_sum() {
    // Mertens function M(1000) = 2
    let mu = mobius_sieve(1000);
    let m: i64 = mu[1..].iter().map(|&x| x as i64).sum();
    assert_eq!(m, 2);
}
