//! Cover expander
//!
//! Enumerates the C(row_size, k) size-k subsets one candidate row covers and
//! translates them to dense target ids. The sub-mask of each expansion is the
//! row's full mask with the bits of the omitted positions cleared by XOR, so
//! the hot loop is a handful of XORs plus one index lookup per subset.

use itertools::Itertools;

use super::index::TargetIndex;
use super::mask::{binomial, mask_without};

/// All combinations of `row_size - k` positional indices in [0, row_size),
/// lexicographic. Built once per run and shared by every expansion, which is
/// what makes the expansion order deterministic.
#[derive(Debug, Clone)]
pub struct OmissionTable {
    stride: usize,
    count: usize,
    positions: Vec<u8>,
}

impl OmissionTable {
    pub fn new(row_size: usize, k: usize) -> Self {
        assert!(k <= row_size && row_size <= u8::MAX as usize);
        let stride = row_size - k;
        let count = binomial(row_size as u64, stride as u64) as usize;
        let mut positions = Vec::with_capacity(count * stride);
        for combo in (0..row_size as u8).combinations(stride) {
            positions.extend_from_slice(&combo);
        }
        Self {
            stride,
            count,
            positions,
        }
    }

    /// Number of expansions per row, C(row_size, k).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Positions omitted by the i-th expansion.
    #[inline]
    fn omit(&self, i: usize) -> &[u8] {
        &self.positions[i * self.stride..(i + 1) * self.stride]
    }
}

/// Expand one row into the dense ids of the size-k subsets it covers.
///
/// `out` is cleared and refilled in omission-table order. A sub-mask absent
/// from the index is returned as `Err(mask)`; with a complete S{k} input this
/// cannot happen, so callers treat it as corrupt input.
pub fn expand_row(
    bits: &[u32],
    table: &OmissionTable,
    index: &TargetIndex,
    out: &mut Vec<u32>,
) -> Result<(), u32> {
    out.clear();
    let full = bits.iter().fold(0u32, |m, &b| m | b);
    for i in 0..table.len() {
        let sub = mask_without(full, bits, table.omit(i));
        match index.get(sub) {
            Some(id) => out.push(id),
            None => return Err(sub),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::mask::mask_of;

    fn bit_table(seq: &[u8]) -> Vec<u32> {
        seq.iter().map(|&s| 1u32 << (s - 1)).collect()
    }

    #[test]
    fn test_omission_table_is_lexicographic() {
        let t = OmissionTable::new(4, 2);
        assert_eq!(t.len(), 6);
        assert_eq!(t.omit(0), &[0, 1]);
        assert_eq!(t.omit(1), &[0, 2]);
        assert_eq!(t.omit(2), &[0, 3]);
        assert_eq!(t.omit(3), &[1, 2]);
        assert_eq!(t.omit(4), &[1, 3]);
        assert_eq!(t.omit(5), &[2, 3]);
    }

    #[test]
    fn test_omit_nothing_when_k_equals_row_size() {
        let t = OmissionTable::new(3, 3);
        assert_eq!(t.len(), 1);
        assert_eq!(t.omit(0), &[] as &[u8]);
    }

    #[test]
    fn test_expansion_masks_have_popcount_k() {
        // targets: all 2-subsets of {1..5} in lexicographic order
        let masks: Vec<u32> = (1u8..=5)
            .combinations(2)
            .map(|c| mask_of(&c, 5).unwrap())
            .collect();
        let index = TargetIndex::from_masks(masks.clone()).unwrap();
        let table = OmissionTable::new(3, 2);
        let mut out = Vec::new();
        expand_row(&bit_table(&[2, 3, 5]), &table, &index, &mut out).unwrap();
        assert_eq!(out.len(), 3);
        for &id in &out {
            assert_eq!(masks[id as usize].count_ones(), 2);
        }
    }

    #[test]
    fn test_expansion_recovers_sub_subsets() {
        // expansion of a row re-keys to exactly the k-subsets of the row
        let masks: Vec<u32> = (1u8..=6)
            .combinations(3)
            .map(|c| mask_of(&c, 6).unwrap())
            .collect();
        let index = TargetIndex::from_masks(masks.clone()).unwrap();
        let table = OmissionTable::new(4, 3);
        let row = [1u8, 3, 4, 6];
        let mut out = Vec::new();
        expand_row(&bit_table(&row), &table, &index, &mut out).unwrap();

        let mut got: Vec<u32> = out.iter().map(|&id| masks[id as usize]).collect();
        let mut want: Vec<u32> = row
            .iter()
            .copied()
            .combinations(3)
            .map(|c| mask_of(&c, 6).unwrap())
            .collect();
        got.sort_unstable();
        want.sort_unstable();
        assert_eq!(got, want);
    }

    #[test]
    fn test_missing_mask_is_reported() {
        // index is missing the subset {2,3}
        let masks = vec![
            mask_of(&[1, 2], 5).unwrap(),
            mask_of(&[1, 3], 5).unwrap(),
        ];
        let index = TargetIndex::from_masks(masks).unwrap();
        let table = OmissionTable::new(3, 2);
        let mut out = Vec::new();
        let err = expand_row(&bit_table(&[1, 2, 3]), &table, &index, &mut out).unwrap_err();
        assert_eq!(err, mask_of(&[2, 3], 5).unwrap());
    }
}
