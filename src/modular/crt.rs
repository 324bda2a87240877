use super::mod_inverse;

/// Chinese remainder theorem for pairwise-coprime moduli.
///
/// Finds the unique `x` in `0..moduli.product()` with
/// `x ≡ residues[i] (mod moduli[i])` for every `i`, by Garner's incremental
/// reconstruction. Returns `None` if any pair of moduli shares a factor
/// (detected when an inverse fails to exist). The product of the moduli must
/// fit `u64`.
///
/// Panics if the slices differ in length or are empty.
///
/// # Example
///
/// ```
/// use euleris::modular::crt;
///
/// // x ≡ 2 (mod 3), x ≡ 3 (mod 5), x ≡ 2 (mod 7)  =>  x = 23
/// assert_eq!(crt(&[2, 3, 2], &[3, 5, 7]), Some(23));
/// assert_eq!(crt(&[1, 2], &[4, 6]), None); // not coprime
/// ```
pub fn crt(residues: &[u64], moduli: &[u64]) -> Option<u64> {
    assert_eq!(
        residues.len(),
        moduli.len(),
        "residues and moduli must have equal length"
    );
    assert!(!moduli.is_empty(), "need at least one congruence");
    let mut x = residues[0] % moduli[0];
    let mut m = moduli[0];
    for (&r, &p) in residues[1..].iter().zip(&moduli[1..]) {
        // solve x + m*t ≡ r (mod p)
        let inv = mod_inverse(m % p, p)?;
        let diff = (r % p + p - x % p) % p;
        let t = diff as u128 * inv as u128 % p as u128;
        x += m * t as u64;
        m *= p;
    }
    Some(x)
}
