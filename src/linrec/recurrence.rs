use super::ModMatrix;

/// Order-k linear recurrence over Z/m:
///
/// a(n) = c1·a(n−1) + c2·a(n−2) + … + ck·a(n−k)
///
/// evaluated at arbitrary 1-based indices by raising the companion matrix
/// to the `n − k` power, O(k³ log n).
///
/// # Example
///
/// ```
/// use euleris::linrec::LinearRecurrence;
///
/// // Tribonacci: a(n) = a(n-1) + a(n-2) + a(n-3), 1, 1, 2, 4, 7, 13, ...
/// let trib = LinearRecurrence::new(&[1, 1, 1], &[1, 1, 2], 1_000_000);
/// assert_eq!(trib.nth(4), 4);
/// assert_eq!(trib.nth(6), 13);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRecurrence {
    companion: ModMatrix,
    // initial terms a(1)..a(k), reduced
    init: Vec<u64>,
    modulus: u64,
}

impl LinearRecurrence {
    /// Build from coefficients `[c1, …, ck]` and initial terms
    /// `[a(1), …, a(k)]`. Coefficients may be negative.
    ///
    /// Panics if the slices differ in length, are empty, or `modulus == 0`.
    pub fn new(coeffs: &[i64], init: &[i64], modulus: u64) -> Self {
        assert_eq!(
            coeffs.len(),
            init.len(),
            "need as many initial terms as coefficients"
        );
        assert!(!coeffs.is_empty(), "recurrence order must be at least 1");
        let k = coeffs.len();
        let mut companion = ModMatrix::zeros(k, modulus);
        for (j, &c) in coeffs.iter().enumerate() {
            companion[(0, j)] = c.rem_euclid(modulus as i64) as u64;
        }
        for i in 1..k {
            companion[(i, i - 1)] = 1 % modulus;
        }
        let init = init
            .iter()
            .map(|&a| a.rem_euclid(modulus as i64) as u64)
            .collect();
        Self {
            companion,
            init,
            modulus,
        }
    }

    /// The modulus terms are reduced by.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// a(n) mod m for 1-based `n`. Panics if `n == 0`.
    pub fn nth(&self, n: u64) -> u64 {
        assert!(n > 0, "recurrence indices are 1-based");
        let k = self.init.len();
        if n <= k as u64 {
            return self.init[(n - 1) as usize];
        }
        let p = self.companion.pow(n - k as u64);
        // state vector is [a(k), a(k-1), ..., a(1)]
        let m = self.modulus as u128;
        let mut acc: u128 = 0;
        for j in 0..k {
            acc = (acc + p[(0, j)] as u128 * self.init[k - 1 - j] as u128) % m;
        }
        acc as u64
    }
}
