use super::*;

// =====================================================================
// gcd / lcm
// =====================================================================

#[test]
fn gcd_basic() {
    assert_eq!(gcd(54u64, 24), 6);
    assert_eq!(gcd(24u64, 54), 6);
    assert_eq!(gcd(17u64, 5), 1);
    assert_eq!(gcd(100u64, 100), 100);
}

#[test]
fn gcd_zero() {
    assert_eq!(gcd(0u64, 0), 0);
    assert_eq!(gcd(0u64, 7), 7);
    assert_eq!(gcd(7u64, 0), 7);
}

#[test]
fn gcd_other_widths() {
    assert_eq!(gcd(48u32, 36), 12);
    assert_eq!(gcd(48u128, 36), 12);
    assert_eq!(gcd(48i64, 36), 12);
}

#[test]
fn lcm_basic() {
    assert_eq!(lcm(4u64, 6), 12);
    assert_eq!(lcm(7u64, 13), 91);
    assert_eq!(lcm(0u64, 5), 0);
}

#[test]
fn lcm_no_intermediate_overflow() {
    // a * b overflows u64 but lcm itself fits
    let a = 1u64 << 40;
    let b = 1u64 << 41;
    assert_eq!(lcm(a, b), 1u64 << 41);
}

#[test]
fn lcm_of_range() {
    // lcm(1..=10) = 2520
    let l = (1u64..=10).fold(1, lcm);
    assert_eq!(l, 2520);
}

// =====================================================================
// isqrt / icbrt
// =====================================================================

#[test]
fn isqrt_small() {
    for n in 0u64..1000 {
        let r = isqrt(n);
        assert!(r * r <= n && (r + 1) * (r + 1) > n, "isqrt({n}) = {r}");
    }
}

#[test]
fn isqrt_around_squares() {
    for k in [3u64, 1_000, 1_000_000, 3_037_000_499] {
        assert_eq!(isqrt(k * k - 1), k - 1);
        assert_eq!(isqrt(k * k), k);
        assert_eq!(isqrt(k * k + 1), k);
    }
}

#[test]
fn isqrt_extremes() {
    assert_eq!(isqrt(u64::MAX), 4294967295);
    assert_eq!(isqrt(u64::MAX - 1), 4294967295);
}

#[test]
fn icbrt_small() {
    for n in 0u64..2000 {
        let r = icbrt(n);
        assert!(r * r * r <= n, "icbrt({n}) = {r}");
        assert!((r + 1) * (r + 1) * (r + 1) > n, "icbrt({n}) = {r}");
    }
}

#[test]
fn icbrt_around_cubes() {
    for k in [10u64, 1_000, 100_000, 2_642_245] {
        assert_eq!(icbrt(k * k * k - 1), k - 1);
        assert_eq!(icbrt(k * k * k), k);
    }
    assert_eq!(icbrt(u64::MAX), 2_642_245);
}

// =====================================================================
// digits
// =====================================================================

#[test]
fn digits_decimal() {
    assert_eq!(digits(1234u32, 10), vec![4, 3, 2, 1]);
    assert_eq!(digits(7u32, 10), vec![7]);
    assert_eq!(digits(0u32, 10), vec![0]);
}

#[test]
fn digits_base7() {
    // 100 = 2*49 + 0*7 + 2
    assert_eq!(digits(100u64, 7), vec![2, 0, 2]);
}

#[test]
fn digits_reconstruct() {
    for n in [0u64, 1, 6, 7, 48, 49, 342, 123_456_789] {
        for base in [2u64, 7, 10, 16] {
            let ds = digits(n, base);
            let back = ds.iter().rev().fold(0, |acc, &d| acc * base + d);
            assert_eq!(back, n, "base {base}");
        }
    }
}

#[test]
fn digit_sum_basic() {
    assert_eq!(digit_sum(0u32, 10), 0);
    assert_eq!(digit_sum(1234u32, 10), 10);
    assert_eq!(digit_sum(999u32, 10), 27);
    // 137 * 9 has the same digit sum mod 9 as 9 * anything
    assert_eq!(digit_sum(137u32 * 9, 10) % 9, 0);
}

#[test]
#[should_panic(expected = "base must be at least 2")]
fn digits_rejects_base_one() {
    digits(5u32, 1);
}
