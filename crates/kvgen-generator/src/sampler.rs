//! Uniform sampling over pools, digit strings and numeric ranges.
//!
//! The sampler owns its random source; nothing is process-global. The default
//! source is `StdRng`, a cryptographically secure generator, because the data
//! includes identifier-like fields (ssn, license) that should not be
//! predictable. Tests pass a fixed seed for reproducibility.

use crate::pools::Pool;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};

/// Draws uniformly from pools and ranges.
///
/// Not shared between threads; wrap it in a lock if it must be.
#[derive(Debug)]
pub struct Sampler<R = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Sampler seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Sampler with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore + CryptoRng> Sampler<R> {
    /// Wrap an existing cryptographically secure source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Index in `[0, pool_size)`.
    ///
    /// Panics if `pool_size` is zero; pools are never empty.
    pub fn sample_index(&mut self, pool_size: usize) -> usize {
        self.rng.gen_range(0..pool_size)
    }

    /// `n` uniformly random decimal digits.
    pub fn sample_digits(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    /// A literal `prefix` followed by `n` random digits.
    pub fn sample_prefixed_digits(&mut self, prefix: &str, n: usize) -> String {
        let mut out = String::with_capacity(prefix.len() + n);
        out.push_str(prefix);
        out.push_str(&self.sample_digits(n));
        out
    }

    /// Value in `[min, max_inclusive]`.
    pub fn sample_range<T>(&mut self, min: T, max_inclusive: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.gen_range(min..=max_inclusive)
    }

    /// Fair coin.
    pub fn sample_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Single-precision value in `[0, 1)`.
    pub fn sample_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// One element of `pool`.
    pub fn choose<'p, T>(&mut self, pool: &'p Pool<T>) -> &'p T {
        &pool.as_slice()[self.sample_index(pool.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_index_bounds() {
        let mut sampler = Sampler::seeded(42);
        for _ in 0..1000 {
            assert!(sampler.sample_index(7) < 7);
        }
        assert_eq!(sampler.sample_index(1), 0);
    }

    #[test]
    fn test_sample_digits() {
        let mut sampler = Sampler::seeded(42);
        for n in [0, 1, 5, 9] {
            let digits = sampler.sample_digits(n);
            assert_eq!(digits.len(), n);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_prefixed_digits() {
        let mut sampler = Sampler::seeded(42);
        let license = sampler.sample_prefixed_digits("S", 8);
        assert_eq!(license.len(), 9);
        assert!(license.starts_with('S'));
        assert!(license[1..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sample_range_inclusive() {
        let mut sampler = Sampler::seeded(42);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let v = sampler.sample_range(-1, 9);
            assert!((-1..=9).contains(&v));
            seen_min |= v == -1;
            seen_max |= v == 9;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_unit_interval() {
        let mut sampler = Sampler::seeded(42);
        for _ in 0..1000 {
            let u = sampler.sample_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = Sampler::seeded(7);
        let mut b = Sampler::seeded(7);
        assert_eq!(a.sample_digits(20), b.sample_digits(20));
    }

    #[test]
    fn test_choose_from_pool() {
        let pool = Pool::of_strs("colors", &["red", "blue"]).unwrap();
        let mut sampler = Sampler::seeded(42);
        for _ in 0..50 {
            assert!(pool.contains(sampler.choose(&pool)));
        }
    }
}
