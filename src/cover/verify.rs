//! Independent cover verifier
//!
//! Rebuilds the target index from the S{k} input, allocates a fresh coverage
//! bitmap, and re-expands every chosen row read back from disk. Shares no
//! state with the selector; a pass here certifies the emitted SB15_k file on
//! its own.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use super::bitmap::CoverageBitmap;
use super::config::CoverConfig;
use super::error::CoverError;
use super::expand::{OmissionTable, expand_row};
use super::index::TargetIndex;
use super::mask::{mask_of, parse_symbols, symbols_of};

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Number of target ids confirmed covered
    pub targets: usize,
    /// Number of chosen rows re-expanded
    pub rows: usize,
}

/// Re-check that the expansions of every row in `sb_path` cover the whole
/// universe described by `targets_path`.
pub fn verify_cover(
    config: &CoverConfig,
    targets_path: &Path,
    sb_path: &Path,
) -> Result<VerifyReport, CoverError> {
    let index = TargetIndex::load(targets_path, config)?;
    let table = OmissionTable::new(config.row_size, config.k);
    let mut covered = CoverageBitmap::new(index.len());
    let mut ids: Vec<u32> = Vec::with_capacity(config.fanout());
    let mut bits: Vec<u32> = Vec::with_capacity(config.row_size);

    let file = File::open(sb_path).map_err(|e| CoverError::io(sb_path, e))?;
    let reader = BufReader::with_capacity(1 << 20, file);
    let mut rows = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CoverError::io(sb_path, e))?;
        let lineno = i as u64 + 1;
        let seq = parse_symbols(&line, config.row_size, config.symbols)
            .map_err(|msg| CoverError::input(sb_path, lineno, msg))?;
        let mask = mask_of(&seq, config.symbols)
            .map_err(|msg| CoverError::input(sb_path, lineno, msg))?;
        if mask.count_ones() as usize != config.row_size {
            return Err(CoverError::input(sb_path, lineno, "repeated symbol in row"));
        }
        bits.clear();
        bits.extend(seq.iter().map(|&s| 1u32 << (s - 1)));
        expand_row(&bits, &table, &index, &mut ids).map_err(|missing| {
            CoverError::input(
                sb_path,
                lineno,
                format!(
                    "covered subset {:?} not present in target index",
                    symbols_of(missing)
                ),
            )
        })?;
        for &id in &ids {
            covered.set(id as usize);
        }
        rows += 1;
    }

    if covered.all_set() {
        Ok(VerifyReport {
            targets: covered.len(),
            rows,
        })
    } else {
        Err(CoverError::VerificationFailed {
            missing: covered.missing(),
        })
    }
}
