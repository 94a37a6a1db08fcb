//! Injectable randomness for phrase selection and shuffling.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of pseudo-random indices.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `0..len`. Callers never pass `len == 0`.
    fn next_index(&self, len: usize) -> usize;
}

/// Thread-local RNG, used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always yields the same offset (modulo `len`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn next_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Reproducible sequence from a seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// Pick one element, or `None` for an empty slice
pub fn choose<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()))
}

/// In-place Fisher-Yates shuffle
pub fn shuffle<T>(rng: &dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_random_wraps() {
        let rng = FixedRandom(7);
        assert_eq!(rng.next_index(3), 1);
        assert_eq!(choose(&rng, &["a", "b", "c"]), Some(&"b"));
    }

    #[test]
    fn test_choose_empty() {
        let empty: [u8; 0] = [];
        assert!(choose(&ThreadRandom, &empty).is_none());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&SeededRandom::new(42), &mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededRandom::new(9);
        let b = SeededRandom::new(9);
        let xs: Vec<usize> = (0..10).map(|_| a.next_index(100)).collect();
        let ys: Vec<usize> = (0..10).map(|_| b.next_index(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_fixed_zero_shuffle_is_deterministic() {
        // j is always 0, so each step swaps the tail into the front
        let mut items = vec![1, 2, 3];
        shuffle(&FixedRandom(0), &mut items);
        assert_eq!(items, vec![2, 3, 1]);
    }
}
