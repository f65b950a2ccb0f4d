use rand::Rng;

/// Numbers still eligible to be drawn in the current round.
///
/// Backed by a `Vec` whose capacity is fixed at `max_number` when the pool
/// is created; `reset` refills it in place, so the storage is never
/// reallocated for the life of the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPool {
    max_number: u8,
    nums: Vec<u8>,
}

impl NumberPool {
    /// Pool holding `1..=max_number` in ascending order.
    pub fn initialize(max_number: u8) -> Self {
        let mut pool = Self {
            max_number,
            nums: Vec::with_capacity(max_number as usize),
        };
        pool.reset();
        pool
    }

    /// Restore the full ascending sequence.
    pub fn reset(&mut self) {
        self.nums.clear();
        self.nums.extend(1..=self.max_number);
    }

    pub fn max_number(&self) -> u8 {
        self.max_number
    }

    pub fn len(&self) -> usize {
        self.nums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nums.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.nums.len() == self.max_number as usize
    }

    pub fn contains(&self, value: u8) -> bool {
        self.nums.contains(&value)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.nums
    }

    /// Remove the entry at `idx`, shifting the tail left by one.
    /// Out-of-range indices leave the pool untouched.
    pub fn remove_at(&mut self, idx: usize) -> Option<u8> {
        if idx >= self.nums.len() {
            return None;
        }
        Some(self.nums.remove(idx))
    }

    /// Pick a uniformly random entry and remove it.
    pub fn draw_and_remove<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u8> {
        if self.nums.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.nums.len());
        self.remove_at(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_initialize_is_ascending_range() {
        for max in 1..=45u8 {
            let pool = NumberPool::initialize(max);
            let expected: Vec<u8> = (1..=max).collect();
            assert_eq!(pool.as_slice(), expected.as_slice());
            assert_eq!(pool.len(), max as usize);
            assert!(pool.is_full());
        }
    }

    #[test]
    fn test_draw_removes_exactly_one_present_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = NumberPool::initialize(45);

        for expected_len in (0..45).rev() {
            let before = pool.clone();
            let value = pool.draw_and_remove(&mut rng).unwrap();
            assert!(before.contains(value));
            assert!(!pool.contains(value));
            assert_eq!(pool.len(), expected_len);
        }
    }

    #[test]
    fn test_exhaustive_draw_yields_every_number_once() {
        let mut rng = StdRng::seed_from_u64(42);
        for max in [1u8, 6, 20, 35, 45] {
            let mut pool = NumberPool::initialize(max);
            let mut seen = HashSet::new();
            while let Some(v) = pool.draw_and_remove(&mut rng) {
                assert!((1..=max).contains(&v));
                assert!(seen.insert(v), "{} drawn twice", v);
            }
            assert_eq!(seen.len(), max as usize);
        }
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = NumberPool::initialize(1);
        assert_eq!(pool.draw_and_remove(&mut rng), Some(1));
        assert!(pool.is_empty());
        assert_eq!(pool.draw_and_remove(&mut rng), None);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_remove_at_keeps_order_of_remaining() {
        let mut pool = NumberPool::initialize(5);
        assert_eq!(pool.remove_at(1), Some(2));
        assert_eq!(pool.as_slice(), &[1, 3, 4, 5]);
        assert_eq!(pool.remove_at(3), Some(5));
        assert_eq!(pool.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn test_remove_at_out_of_range_does_not_mutate() {
        let mut pool = NumberPool::initialize(3);
        assert_eq!(pool.remove_at(3), None);
        assert_eq!(pool.remove_at(usize::MAX), None);
        assert_eq!(pool.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_reset_restores_without_reallocating() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = NumberPool::initialize(45);
        let cap = pool.nums.capacity();
        for _ in 0..10 {
            pool.draw_and_remove(&mut rng);
        }
        pool.reset();
        assert!(pool.is_full());
        assert_eq!(pool.as_slice()[0], 1);
        assert_eq!(pool.nums.capacity(), cap);
    }
}
