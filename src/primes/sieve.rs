/// Bit-packed sieve of Eratosthenes over `0..=limit`.
///
/// One bit per integer, 64 integers per word. Construction is O(n log log n);
/// membership queries are O(1).
///
/// # Example
///
/// ```
/// use euleris::primes::Sieve;
///
/// let sieve = Sieve::new(100);
/// assert!(sieve.is_prime(97));
/// assert!(!sieve.is_prime(91)); // 7 * 13
/// assert_eq!(sieve.count(), 25);
/// assert_eq!(sieve.iter().take(4).collect::<Vec<_>>(), vec![2, 3, 5, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct Sieve {
    limit: u64,
    // bit set => composite (or 0, 1)
    composite: Vec<u64>,
}

impl Sieve {
    /// Sieve all primes up to and including `limit`.
    pub fn new(limit: u64) -> Self {
        let nwords = (limit / 64 + 1) as usize;
        let mut composite = vec![0u64; nwords];
        let set = |bits: &mut [u64], n: u64| bits[(n / 64) as usize] |= 1 << (n % 64);
        set(&mut composite, 0);
        if limit >= 1 {
            set(&mut composite, 1);
        }
        let mut i = 2u64;
        while i * i <= limit {
            if composite[(i / 64) as usize] & (1 << (i % 64)) == 0 {
                let mut j = i * i;
                while j <= limit {
                    set(&mut composite, j);
                    j += i;
                }
            }
            i += 1;
        }
        Self { limit, composite }
    }

    /// Upper bound the sieve was built for.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Is `n` prime? Panics if `n` exceeds the sieve limit.
    pub fn is_prime(&self, n: u64) -> bool {
        assert!(n <= self.limit, "n = {n} beyond sieve limit {}", self.limit);
        self.composite[(n / 64) as usize] & (1 << (n % 64)) == 0
    }

    /// Iterate over the primes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (2..=self.limit).filter(move |&n| self.composite[(n / 64) as usize] & (1 << (n % 64)) == 0)
    }

    /// Collect all primes up to the limit.
    pub fn primes(&self) -> Vec<u64> {
        self.iter().collect()
    }

    /// Number of primes up to the limit.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}
