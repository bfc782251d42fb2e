//! Secret number sources
//!
//! The game never calls the RNG directly; it asks a `NumberSource` for each
//! secret so tests and reproducible sessions can substitute their own.

use super::SecretRange;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Capability for drawing a secret from a range
pub trait NumberSource {
    /// Produce the next secret. Must lie within `range`.
    fn next_secret(&mut self, range: SecretRange) -> u32;
}

impl<S: NumberSource + ?Sized> NumberSource for Box<S> {
    fn next_secret(&mut self, range: SecretRange) -> u32 {
        (**self).next_secret(range)
    }
}

/// Uniform secrets from the thread-local RNG
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberSource for ThreadRngSource {
    fn next_secret(&mut self, range: SecretRange) -> u32 {
        self.rng.random_range(range.min()..=range.max())
    }
}

/// Reproducible secrets from a seeded RNG
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NumberSource for SeededSource {
    fn next_secret(&mut self, range: SecretRange) -> u32 {
        self.rng.random_range(range.min()..=range.max())
    }
}

/// Fixed sequence of secrets, repeated cyclically
///
/// Values outside the requested range are clamped into it. An empty sequence
/// always yields the range minimum.
///
/// # Examples
/// ```
/// use guessing_game::core::{FixedSequence, NumberSource, SecretRange};
///
/// let range = SecretRange::new(1, 10).unwrap();
/// let mut source = FixedSequence::new(vec![4, 8]);
/// assert_eq!(source.next_secret(range), 4);
/// assert_eq!(source.next_secret(range), 8);
/// assert_eq!(source.next_secret(range), 4);
/// ```
pub struct FixedSequence {
    values: Vec<u32>,
    next: usize,
}

impl FixedSequence {
    #[must_use]
    pub const fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }
}

impl NumberSource for FixedSequence {
    fn next_secret(&mut self, range: SecretRange) -> u32 {
        let Some(&value) = self.values.get(self.next) else {
            return range.min();
        };
        self.next = (self.next + 1) % self.values.len();
        range.clamp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let range = SecretRange::new(5, 9).unwrap();
        let mut source = ThreadRngSource::new();
        for _ in 0..500 {
            assert!(range.contains(source.next_secret(range)));
        }
    }

    #[test]
    fn thread_rng_single_value_range() {
        let range = SecretRange::new(42, 42).unwrap();
        let mut source = ThreadRngSource::default();
        assert_eq!(source.next_secret(range), 42);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let range = SecretRange::default();
        let mut a = SeededSource::new(7);
        let mut b = SeededSource::new(7);
        let first: Vec<u32> = (0..20).map(|_| a.next_secret(range)).collect();
        let second: Vec<u32> = (0..20).map(|_| b.next_secret(range)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&v| range.contains(v)));
    }

    #[test]
    fn fixed_sequence_cycles() {
        let range = SecretRange::default();
        let mut source = FixedSequence::new(vec![1, 2, 3]);
        let drawn: Vec<u32> = (0..5).map(|_| source.next_secret(range)).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn fixed_sequence_clamps_out_of_range() {
        let range = SecretRange::new(10, 20).unwrap();
        let mut source = FixedSequence::new(vec![0, 50]);
        assert_eq!(source.next_secret(range), 10);
        assert_eq!(source.next_secret(range), 20);
    }

    #[test]
    fn empty_fixed_sequence_yields_minimum() {
        let range = SecretRange::new(3, 9).unwrap();
        let mut source = FixedSequence::new(Vec::new());
        assert_eq!(source.next_secret(range), 3);
        assert_eq!(source.next_secret(range), 3);
    }

    #[test]
    fn boxed_source_delegates() {
        let range = SecretRange::default();
        let mut source: Box<dyn NumberSource> = Box::new(FixedSequence::new(vec![55]));
        assert_eq!(source.next_secret(range), 55);
    }
}
