//! Greedy selector
//!
//! Classical lazy greedy set cover over a binary max-heap. Every candidate
//! row is primed at the optimistic gain C(row_size, k); at pop time the true
//! gain is measured against the covered bitmap. A row whose stored gain went
//! stale is reinserted with the measured value, which is sound because gains
//! only decrease as coverage grows.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::bitmap::CoverageBitmap;
use super::config::CoverConfig;
use super::error::CoverError;
use super::expand::{OmissionTable, expand_row};
use super::index::TargetIndex;
use super::mask::symbols_of;
use super::rows::RowStore;

/// Heap entry ordered so that maximum gain pops first; equal gains pop in
/// ascending row id, which keeps selection deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    gain: u32,
    row: u32,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gain
            .cmp(&other.gain)
            .then_with(|| other.row.cmp(&self.row))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of one greedy run: chosen row ids in selection order.
#[derive(Debug, Clone)]
pub struct Selection {
    pub chosen: Vec<u32>,
    /// Size of the covered universe (equals |Uₖ| on success)
    pub covered: usize,
}

/// Select a subfamily of the candidate rows whose expansions cover the whole
/// target universe.
///
/// With `store_all` every row's expansion is retained from the priming pass
/// (fanout × 4 bytes per row); otherwise expansions are recomputed at each
/// pop, roughly 3× slower but with a flat memory profile.
pub fn greedy_cover(
    config: &CoverConfig,
    index: &TargetIndex,
    rows: &RowStore,
    store_all: bool,
) -> Result<Selection, CoverError> {
    let universe = index.len();
    let fanout = config.fanout();
    let table = OmissionTable::new(config.row_size, config.k);
    let mut covered = CoverageBitmap::new(universe);
    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::with_capacity(rows.len());
    let mut stored: Vec<u32> = Vec::new();
    let mut scratch: Vec<u32> = Vec::with_capacity(fanout);

    eprintln!("pass 1/2: priming {} candidate rows", rows.len());
    if store_all {
        stored.reserve_exact(rows.len() * fanout);
        for row in 0..rows.len() {
            expand_row(rows.bits(row), &table, index, &mut scratch)
                .map_err(|mask| missing_target(rows, row, mask))?;
            stored.extend_from_slice(&scratch);
            heap.push(HeapEntry {
                gain: fanout as u32,
                row: row as u32,
            });
            if (row + 1) % 500_000 == 0 {
                eprintln!("  {} rows primed", row + 1);
            }
        }
    } else {
        for row in 0..rows.len() {
            heap.push(HeapEntry {
                gain: fanout as u32,
                row: row as u32,
            });
        }
    }

    eprintln!("pass 2/2: draining heap over {} target ids", universe);
    let mut chosen: Vec<u32> = Vec::new();
    let mut next_pct = 5;
    while !covered.all_set() {
        let Some(entry) = heap.pop() else {
            return Err(CoverError::CoverInfeasible {
                missing: covered.missing(),
            });
        };
        let row = entry.row as usize;
        let ids: &[u32] = if store_all {
            &stored[row * fanout..(row + 1) * fanout]
        } else {
            expand_row(rows.bits(row), &table, index, &mut scratch)
                .map_err(|mask| missing_target(rows, row, mask))?;
            &scratch
        };

        let true_gain = ids.iter().filter(|&&id| !covered.get(id as usize)).count() as u32;
        if true_gain == 0 {
            // exhausted, drop
            continue;
        }
        if true_gain < entry.gain {
            // stale entry, reinsert with the measured gain
            heap.push(HeapEntry {
                gain: true_gain,
                row: entry.row,
            });
            continue;
        }

        for &id in ids {
            covered.set(id as usize);
        }
        chosen.push(entry.row);

        let pct = covered.count_ones() * 100 / universe;
        if pct >= next_pct {
            eprintln!("  {:3}% covered | SB size {}", pct, chosen.len());
            next_pct = pct / 5 * 5 + 5;
        }
    }

    Ok(Selection {
        chosen,
        covered: universe,
    })
}

fn missing_target(rows: &RowStore, row: usize, mask: u32) -> CoverError {
    CoverError::input(
        rows.path(),
        row as u64 + 1,
        format!(
            "covered subset {:?} not present in target index",
            symbols_of(mask)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_orders_by_gain_then_row() {
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry { gain: 3, row: 7 });
        heap.push(HeapEntry { gain: 5, row: 9 });
        heap.push(HeapEntry { gain: 5, row: 2 });
        heap.push(HeapEntry { gain: 1, row: 0 });
        assert_eq!(heap.pop(), Some(HeapEntry { gain: 5, row: 2 }));
        assert_eq!(heap.pop(), Some(HeapEntry { gain: 5, row: 9 }));
        assert_eq!(heap.pop(), Some(HeapEntry { gain: 3, row: 7 }));
        assert_eq!(heap.pop(), Some(HeapEntry { gain: 1, row: 0 }));
    }
}
