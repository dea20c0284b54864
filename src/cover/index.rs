//! Target index: dense ids for the size-k universe
//!
//! Maps the canonical mask of each size-k subset to a dense id equal to its
//! 0-based position in the input stream. The map is u32 → u32 and sits on the
//! expander's hot path, so it uses ahash instead of the default SipHash.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use super::config::CoverConfig;
use super::error::CoverError;
use super::mask::{mask_of, parse_symbols};

/// mask → dense id lookup for one size-k universe.
#[derive(Debug, Clone)]
pub struct TargetIndex {
    ids: AHashMap<u32, u32>,
}

impl TargetIndex {
    /// Load S{k}.csv: one k-tuple per line, ids assigned in input order.
    ///
    /// Wrong arity, non-integer tokens, out-of-range symbols, repeated
    /// symbols, and duplicate masks are all input errors located by line.
    pub fn load(path: &Path, config: &CoverConfig) -> Result<Self, CoverError> {
        let file = File::open(path).map_err(|e| CoverError::io(path, e))?;
        let reader = BufReader::with_capacity(1 << 20, file);
        let mut ids = AHashMap::with_capacity(config.universe_size());

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| CoverError::io(path, e))?;
            let lineno = i as u64 + 1;
            let seq = parse_symbols(&line, config.k, config.symbols)
                .map_err(|msg| CoverError::input(path, lineno, msg))?;
            let mask = mask_of(&seq, config.symbols)
                .map_err(|msg| CoverError::input(path, lineno, msg))?;
            if mask.count_ones() as usize != config.k {
                return Err(CoverError::input(path, lineno, "repeated symbol in sequence"));
            }
            if ids.insert(mask, i as u32).is_some() {
                return Err(CoverError::input(path, lineno, "duplicate sequence"));
            }
        }
        Ok(Self { ids })
    }

    /// Build an index directly from masks, ids in iteration order.
    ///
    /// Returns None on a duplicate mask.
    pub fn from_masks<I: IntoIterator<Item = u32>>(masks: I) -> Option<Self> {
        let iter = masks.into_iter();
        let mut ids = AHashMap::with_capacity(iter.size_hint().0);
        for (i, mask) in iter.enumerate() {
            if ids.insert(mask, i as u32).is_some() {
                return None;
            }
        }
        Some(Self { ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn get(&self, mask: u32) -> Option<u32> {
        self.ids.get(&mask).copied()
    }
}
