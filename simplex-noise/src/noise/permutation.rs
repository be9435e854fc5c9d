//! Shuffled lattice hash table shared by all simplex dimensions.

use crate::random::Random;

/// Number of entries in a [`PermutationTable`]: 256 shuffled values, mirrored.
pub const PERMUTATION_SIZE: usize = 512;

/// A permutation of `0..=255`, stored twice in a row.
///
/// The mirrored second half lets lookups like `p[a + p[b]]` index with sums up
/// to 511 without wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; PERMUTATION_SIZE],
}

impl PermutationTable {
    /// Shuffles a new table with `random`.
    ///
    /// Runs a Fisher-Yates shuffle over indices `0..=254`, drawing
    /// `i + floor(random * (256 - i))` at step `i`, then mirrors the result.
    /// Exactly 255 values are drawn. A biased or out-of-range source still
    /// yields a permutation, just a poorly shuffled one.
    pub fn new<R: Random + ?Sized>(random: &mut R) -> Self {
        let mut p = [0u8; PERMUTATION_SIZE];

        for (i, val) in p.iter_mut().enumerate().take(256) {
            *val = i as u8;
        }

        for i in 0..255 {
            let offset = random.next_bounded(256 - i);
            p.swap(i, i + offset);
        }

        let (first, second) = p.split_at_mut(256);
        second.copy_from_slice(first);

        Self { p }
    }

    /// Returns the entry at `index` (`0..512`).
    #[inline]
    #[must_use]
    pub const fn get(&self, index: usize) -> usize {
        self.p[index] as usize
    }

    /// Returns the full mirrored table.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PERMUTATION_SIZE] {
        &self.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FnRandom, Xoroshiro};

    fn assert_valid(table: &PermutationTable) {
        let bytes = table.as_bytes();
        let mut seen = [false; 256];
        for &b in &bytes[..256] {
            assert!(!seen[b as usize], "duplicate entry {b}");
            seen[b as usize] = true;
        }
        assert_eq!(bytes[..256], bytes[256..]);
    }

    #[test]
    fn seeded_table_is_a_mirrored_permutation() {
        for seed in [0, 1, 42, u64::MAX] {
            assert_valid(&PermutationTable::new(&mut Xoroshiro::from_seed(seed)));
        }
    }

    #[test]
    fn known_prefix_for_seed() {
        let table = PermutationTable::new(&mut Xoroshiro::from_seed(42));
        assert_eq!(table.as_bytes()[..8], [190, 102, 152, 70, 119, 167, 118, 91]);
    }

    #[test]
    fn draws_exactly_255_values() {
        let mut draws = 0;
        let _ = PermutationTable::new(&mut FnRandom::new(|| {
            draws += 1;
            0.5
        }));
        assert_eq!(draws, 255);
    }

    #[test]
    fn zero_source_gives_identity() {
        let table = PermutationTable::new(&mut FnRandom::new(|| 0.0));
        for i in 0..PERMUTATION_SIZE {
            assert_eq!(table.get(i), i % 256);
        }
    }

    #[test]
    fn constant_half_interleaves() {
        let table = PermutationTable::new(&mut FnRandom::new(|| 0.5));
        assert_eq!(table.as_bytes()[..6], [128, 0, 129, 2, 130, 4]);
        assert_valid(&table);
    }

    #[test]
    fn out_of_range_source_still_permutes() {
        let high = PermutationTable::new(&mut FnRandom::new(|| 1.5));
        assert_eq!(high.as_bytes()[..4], [255, 0, 1, 2]);
        assert_valid(&high);

        let low = PermutationTable::new(&mut FnRandom::new(|| -3.0));
        assert_eq!(low.as_bytes()[..4], [0, 1, 2, 3]);
        assert_valid(&low);

        assert_valid(&PermutationTable::new(&mut FnRandom::new(|| f64::NAN)));
    }
}
