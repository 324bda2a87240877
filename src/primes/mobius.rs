/// Möbius function μ(n) for all `n <= limit`, by linear sieve.
///
/// `out[n]` is μ(n); `out[0]` is 0 by convention. One pass, O(n) time,
/// each composite crossed off exactly once by its smallest prime factor.
///
/// # Example
///
/// ```
/// use euleris::primes::mobius_sieve;
///
/// let mu = mobius_sieve(12);
/// assert_eq!(&mu[1..=12], &[1, -1, -1, 0, -1, 1, -1, 0, 0, 1, -1, 0]);
/// ```
pub fn mobius_sieve(limit: usize) -> Vec<i8> {
    let mut mu = vec![1i8; limit + 1];
    mu[0] = 0;
    let mut is_comp = vec![false; limit + 1];
    let mut primes = Vec::new();
    for i in 2..=limit {
        if !is_comp[i] {
            primes.push(i);
            mu[i] = -1;
        }
        for &p in &primes {
            let ip = i * p;
            if ip > limit {
                break;
            }
            is_comp[ip] = true;
            if i % p == 0 {
                mu[ip] = 0;
                break;
            }
            mu[ip] = -mu[i];
        }
    }
    mu
}
