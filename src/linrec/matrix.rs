use core::ops::{Index, IndexMut};

/// Square matrix over Z/m with runtime dimension.
///
/// Row-major `Vec<u64>` storage; every entry is kept reduced into `0..m`.
/// Multiplication reduces each product in `u128`, so any `u64` modulus
/// is safe.
///
/// # Example
///
/// ```
/// use euleris::linrec::ModMatrix;
///
/// // Fibonacci Q-matrix
/// let q = ModMatrix::from_rows(2, 1_000_000, &[1, 1, 1, 0]);
/// let p = q.pow(10);
/// assert_eq!(p[(0, 1)], 55); // F(10)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMatrix {
    data: Vec<u64>,
    n: usize,
    modulus: u64,
}

impl ModMatrix {
    /// `n x n` zero matrix over Z/`modulus`. Panics if `modulus == 0`.
    pub fn zeros(n: usize, modulus: u64) -> Self {
        assert!(modulus > 0, "modulus must be nonzero");
        Self {
            data: vec![0; n * n],
            n,
            modulus,
        }
    }

    /// `n x n` identity matrix over Z/`modulus`.
    pub fn eye(n: usize, modulus: u64) -> Self {
        let mut m = Self::zeros(n, modulus);
        for i in 0..n {
            m[(i, i)] = 1 % modulus;
        }
        m
    }

    /// Build from row-major signed entries, reducing each into `0..modulus`.
    ///
    /// Signed input keeps recurrence coefficients like `-2` readable at the
    /// call site. Panics unless `entries.len() == n * n`.
    pub fn from_rows(n: usize, modulus: u64, entries: &[i64]) -> Self {
        assert_eq!(
            entries.len(),
            n * n,
            "expected {} entries for a {n}x{n} matrix, got {}",
            n * n,
            entries.len()
        );
        let mut m = Self::zeros(n, modulus);
        for (slot, &e) in m.data.iter_mut().zip(entries) {
            *slot = e.rem_euclid(modulus as i64) as u64;
        }
        m
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The modulus all entries are reduced by.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Matrix product `self * rhs` over Z/m.
    ///
    /// Panics on dimension or modulus mismatch.
    pub fn mul(&self, rhs: &ModMatrix) -> ModMatrix {
        assert_eq!(
            self.n, rhs.n,
            "dimension mismatch: {}x{} * {}x{}",
            self.n, self.n, rhs.n, rhs.n
        );
        assert_eq!(self.modulus, rhs.modulus, "modulus mismatch");
        let n = self.n;
        let m = self.modulus as u128;
        let mut out = ModMatrix::zeros(n, self.modulus);
        for i in 0..n {
            for k in 0..n {
                let a = self.data[i * n + k] as u128;
                if a == 0 {
                    continue;
                }
                for j in 0..n {
                    let cur = out.data[i * n + j] as u128;
                    out.data[i * n + j] = ((cur + a * rhs.data[k * n + j] as u128) % m) as u64;
                }
            }
        }
        out
    }

    /// `self^exp` by binary exponentiation; `pow(0)` is the identity.
    pub fn pow(&self, mut exp: u64) -> ModMatrix {
        let mut result = ModMatrix::eye(self.n, self.modulus);
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        result
    }
}

impl Index<(usize, usize)> for ModMatrix {
    type Output = u64;

    fn index(&self, (row, col): (usize, usize)) -> &u64 {
        &self.data[row * self.n + col]
    }
}

impl IndexMut<(usize, usize)> for ModMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u64 {
        &mut self.data[row * self.n + col]
    }
}
