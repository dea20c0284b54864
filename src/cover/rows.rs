//! Candidate row store
//!
//! Keeps two parallel views of every S15 row: the verbatim source line, which
//! is echoed untouched into SB15_k, and a per-row table of single-symbol bit
//! values used by the expander. Rows are never reparsed after load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::config::CoverConfig;
use super::error::CoverError;
use super::mask::{mask_of, parse_symbols};

#[derive(Debug)]
pub struct RowStore {
    path: PathBuf,
    row_size: usize,
    lines: Vec<Box<str>>,
    /// row_size single-bit values per row, in source-line order
    bits: Vec<u32>,
}

impl RowStore {
    /// Load S15.csv: one row_size-tuple per line, row ids in input order.
    pub fn load(path: &Path, config: &CoverConfig) -> Result<Self, CoverError> {
        let file = File::open(path).map_err(|e| CoverError::io(path, e))?;
        let reader = BufReader::with_capacity(1 << 20, file);
        let mut lines = Vec::new();
        let mut bits = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| CoverError::io(path, e))?;
            let lineno = i as u64 + 1;
            let seq = parse_symbols(&line, config.row_size, config.symbols)
                .map_err(|msg| CoverError::input(path, lineno, msg))?;
            let mask = mask_of(&seq, config.symbols)
                .map_err(|msg| CoverError::input(path, lineno, msg))?;
            if mask.count_ones() as usize != config.row_size {
                return Err(CoverError::input(path, lineno, "repeated symbol in row"));
            }
            bits.extend(seq.iter().map(|&s| 1u32 << (s - 1)));
            lines.push(line.into_boxed_str());
        }

        Ok(Self {
            path: path.to_path_buf(),
            row_size: config.row_size,
            lines,
            bits,
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Verbatim source line of a row.
    pub fn line(&self, row: usize) -> &str {
        &self.lines[row]
    }

    /// Single-bit values of a row's symbols, in source-line order.
    pub fn bits(&self, row: usize) -> &[u32] {
        &self.bits[row * self.row_size..(row + 1) * self.row_size]
    }
}
