use super::*;
use crate::arith::gcd;

// =====================================================================
// mod_mul / mod_pow
// =====================================================================

#[test]
fn mod_mul_no_overflow() {
    let m = u64::MAX - 58; // large prime-ish modulus
    let a = u64::MAX - 100;
    let b = u64::MAX - 200;
    let expect = (a as u128 * b as u128 % m as u128) as u64;
    assert_eq!(mod_mul(a, b, m), expect);
}

#[test]
fn mod_pow_small() {
    assert_eq!(mod_pow(2, 10, 1_000_000), 1024);
    assert_eq!(mod_pow(2, 10, 1_000), 24);
    assert_eq!(mod_pow(3, 0, 7), 1);
    assert_eq!(mod_pow(0, 5, 7), 0);
    assert_eq!(mod_pow(5, 3, 1), 0); // everything is 0 mod 1
}

#[test]
fn mod_pow_fermat() {
    // a^(p-1) ≡ 1 (mod p) for prime p, gcd(a, p) = 1
    for p in [7u64, 97, 1_000_000_007] {
        for a in [2u64, 3, 10, 123_456] {
            assert_eq!(mod_pow(a, p - 1, p), 1, "a = {a}, p = {p}");
        }
    }
}

#[test]
fn mod_pow_matches_naive() {
    for base in 0u64..8 {
        for exp in 0u64..12 {
            for m in [2u64, 7, 100, 1_000_003] {
                let naive = (0..exp).fold(1 % m, |acc, _| acc * base % m);
                assert_eq!(mod_pow(base, exp, m), naive);
            }
        }
    }
}

// =====================================================================
// ext_gcd / mod_inverse
// =====================================================================

#[test]
fn ext_gcd_bezout() {
    for (a, b) in [(240i128, 46), (17, 5), (1, 1), (12, 0), (0, 12)] {
        let (g, x, y) = ext_gcd(a, b);
        assert_eq!(a * x + b * y, g, "({a}, {b})");
        assert_eq!(g, gcd(a.unsigned_abs() as u64, b.unsigned_abs() as u64) as i128);
    }
}

#[test]
fn mod_inverse_roundtrip() {
    for m in [7u64, 97, 1_000_000_007, 1_234_567_891_011] {
        for a in [1u64, 2, 10, 999, 123_456_789] {
            if gcd(a, m) != 1 {
                continue;
            }
            let inv = mod_inverse(a, m).unwrap();
            assert_eq!(mod_mul(a % m, inv, m), 1, "a = {a}, m = {m}");
        }
    }
}

#[test]
fn mod_inverse_not_coprime() {
    assert_eq!(mod_inverse(6, 9), None);
    assert_eq!(mod_inverse(0, 5), None);
    assert_eq!(mod_inverse(10, 25), None);
}

#[test]
fn mod_inverse_modulus_one() {
    assert_eq!(mod_inverse(3, 1), Some(0));
}

// =====================================================================
// crt
// =====================================================================

#[test]
fn crt_textbook() {
    // Sun Tzu: x ≡ 2 (3), x ≡ 3 (5), x ≡ 2 (7)
    assert_eq!(crt(&[2, 3, 2], &[3, 5, 7]), Some(23));
}

#[test]
fn crt_single_congruence() {
    assert_eq!(crt(&[5], &[7]), Some(5));
    assert_eq!(crt(&[12], &[7]), Some(5));
}

#[test]
fn crt_residues_recovered() {
    let moduli = [3u64, 5, 7, 11, 13];
    let x0 = 12_345u64;
    let residues: Vec<u64> = moduli.iter().map(|&m| x0 % m).collect();
    let x = crt(&residues, &moduli).unwrap();
    assert_eq!(x, x0 % moduli.iter().product::<u64>());
    for (&r, &m) in residues.iter().zip(&moduli) {
        assert_eq!(x % m, r);
    }
}

#[test]
fn crt_non_coprime() {
    assert_eq!(crt(&[1, 2], &[4, 6]), None);
}

#[test]
fn crt_large_moduli() {
    // primorial(43) = 13082761331670030 still fits u64
    let moduli = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43];
    let residues: Vec<u64> = moduli.iter().map(|&m| (m - 1) % m).collect();
    let prod: u64 = moduli.iter().product();
    assert_eq!(prod, 13_082_761_331_670_030);
    // x ≡ -1 mod every modulus => x = prod - 1
    assert_eq!(crt(&residues, &moduli), Some(prod - 1));
}

#[test]
#[should_panic(expected = "equal length")]
fn crt_length_mismatch() {
    crt(&[1, 2], &[3]);
}

// =====================================================================
// multiplicative_order
// =====================================================================

#[test]
fn order_of_ten_small() {
    // periods of 1/n for n coprime to 10
    assert_eq!(multiplicative_order(10, 3), Some(1));
    assert_eq!(multiplicative_order(10, 7), Some(6));
    assert_eq!(multiplicative_order(10, 11), Some(2));
    assert_eq!(multiplicative_order(10, 13), Some(6));
    assert_eq!(multiplicative_order(10, 21), Some(6));
    assert_eq!(multiplicative_order(10, 49), Some(42));
}

#[test]
fn order_none_when_not_coprime() {
    assert_eq!(multiplicative_order(10, 14), None);
    assert_eq!(multiplicative_order(6, 9), None);
}

#[test]
fn order_divides_totient_and_is_minimal() {
    for m in 2u64..200 {
        for a in 2u64..20 {
            let Some(k) = multiplicative_order(a, m) else {
                continue;
            };
            let phi = crate::primes::totient(m);
            assert_eq!(phi % k, 0, "ord divides phi: a={a}, m={m}");
            assert_eq!(mod_pow(a, k, m), 1 % m);
            // minimality by brute force
            let brute = (1..=phi).find(|&j| mod_pow(a, j, m) == 1).unwrap();
            assert_eq!(k, brute, "a={a}, m={m}");
        }
    }
}

#[test]
fn order_of_two_mod_mersenne() {
    assert_eq!(multiplicative_order(2, 2u64.pow(20) - 1), Some(20));
    assert_eq!(multiplicative_order(2, 2u64.pow(60) - 1), Some(60));
}
