//! Coordinate mapper
//!
//! A leaf of the full secret is addressed by a `depth`-digit tuple over
//! `{0..n-1}`. Holder `h` carries every leaf whose tuple never contains the
//! digit `h`. Dropping value `h` from each digit's range turns the carried
//! tuples into a dense base-`(n-1)` numbering, which is the leaf order inside
//! the share.
//!
//! A tuple has only `t-1` digits, so at most `t-1` holders miss any given
//! leaf. Any `t` distinct holders therefore cover the whole secret.
//!
//! Byte positions are split as `leaf * chunk_size + offset`; only the leaf is
//! remapped.

use crate::params::SchemeParameters;
use crate::radix::{from_digits, to_digits};

/// Position mapping between a full secret and one holder's share
#[derive(Debug, Clone)]
pub struct CoordinateMapper {
    holders: usize,
    holder: u16,
    chunk_size: usize,
    digits: Vec<usize>,
}

impl CoordinateMapper {
    /// Create a mapper for `holder`
    ///
    /// `holder` must already be range-checked against `params`.
    pub fn new(params: &SchemeParameters, holder: u16) -> Self {
        Self {
            holders: usize::from(params.holder_count()),
            holder,
            chunk_size: params.chunk_size() as usize,
            digits: vec![0; params.depth()],
        }
    }

    /// Holder index this mapper was built for
    pub fn holder(&self) -> u16 {
        self.holder
    }

    /// Map a full-secret byte position into this holder's share
    ///
    /// Returns `None` when the holder does not carry the position.
    pub fn full_to_compressed(&mut self, pos: usize) -> Option<usize> {
        let (leaf, offset) = (pos / self.chunk_size, pos % self.chunk_size);
        let holder = usize::from(self.holder);
        to_digits(leaf, self.holders, &mut self.digits);
        for digit in self.digits.iter_mut() {
            if *digit == holder {
                return None;
            }
            if *digit > holder {
                *digit -= 1;
            }
        }
        let leaf = from_digits(&self.digits, self.holders - 1);
        Some(leaf * self.chunk_size + offset)
    }

    /// Map a share byte position back to its full-secret position
    pub fn compressed_to_full(&mut self, pos: usize) -> usize {
        let (leaf, offset) = (pos / self.chunk_size, pos % self.chunk_size);
        let holder = usize::from(self.holder);
        to_digits(leaf, self.holders - 1, &mut self.digits);
        for digit in self.digits.iter_mut() {
            if *digit >= holder {
                *digit += 1;
            }
        }
        from_digits(&self.digits, self.holders) * self.chunk_size + offset
    }

    /// Whether this holder carries the full-secret byte at `pos`
    pub fn is_present(&mut self, pos: usize) -> bool {
        self.full_to_compressed(pos).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SchemeParameters {
        SchemeParameters::new(5, 3, 1).unwrap()
    }

    #[test]
    fn test_absent_positions_for_holder_zero() {
        let mut mapper = CoordinateMapper::new(&sample(), 0);
        let absent: Vec<usize> = (0..25).filter(|&p| !mapper.is_present(p)).collect();
        assert_eq!(absent, vec![0, 1, 2, 3, 4, 5, 10, 15, 20]);
    }

    #[test]
    fn test_present_positions_are_dense() {
        let mut mapper = CoordinateMapper::new(&sample(), 2);
        let mapped: Vec<usize> = (0..25).filter_map(|p| mapper.full_to_compressed(p)).collect();
        assert_eq!(mapped, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_inverse_mapping() {
        let params = SchemeParameters::new(4, 4, 3).unwrap();
        for holder in 0..4 {
            let mut mapper = CoordinateMapper::new(&params, holder);
            for pos in 0..params.compressed_size() {
                let full = mapper.compressed_to_full(pos);
                assert!(full < params.full_size());
                assert_eq!(mapper.full_to_compressed(full), Some(pos));
            }
        }
    }

    #[test]
    fn test_chunk_offsets_preserved() {
        let params = SchemeParameters::new(3, 2, 4).unwrap();
        let mut mapper = CoordinateMapper::new(&params, 1);
        // Leaf 0 kept as share leaf 0, leaf 1 dropped, leaf 2 becomes share leaf 1.
        assert_eq!(mapper.full_to_compressed(2), Some(2));
        assert_eq!(mapper.full_to_compressed(5), None);
        assert_eq!(mapper.full_to_compressed(9), Some(5));
        assert_eq!(mapper.compressed_to_full(7), 11);
    }

    #[test]
    fn test_every_leaf_missed_by_at_most_depth_holders() {
        let params = SchemeParameters::new(6, 4, 1).unwrap();
        let mut mappers: Vec<_> = (0..6).map(|h| CoordinateMapper::new(&params, h)).collect();
        for pos in 0..params.full_size() {
            let missing = mappers
                .iter_mut()
                .map(|m| m.is_present(pos))
                .filter(|&present| !present)
                .count();
            assert!(missing <= params.depth());
        }
    }
}
