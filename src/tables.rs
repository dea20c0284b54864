//! Combination table generator
//!
//! Enumerates all size-k subsets of {1..symbols} in lexicographic order and
//! writes them as comma-separated ASCII lines, one subset per line. The line
//! position of a subset is exactly the dense id the target index will assign
//! to it, so these files are the ground truth for every later stage.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::cover::CoverError;
use crate::cover::mask::binomial;

const PROGRESS_STEP: u64 = 500_000;

/// Write S{k}.csv into `out_dir`, returning the path and the line count.
pub fn write_table(out_dir: &Path, symbols: u8, k: usize) -> Result<(PathBuf, u64), CoverError> {
    assert!(k >= 1 && k <= symbols as usize);
    let total = binomial(symbols as u64, k as u64);
    let path = out_dir.join(format!("S{}.csv", k));

    fs::create_dir_all(out_dir).map_err(|e| CoverError::io(out_dir, e))?;
    let file = File::create(&path).map_err(|e| CoverError::io(&path, e))?;
    let mut out = BufWriter::with_capacity(1 << 20, file);

    eprintln!("S{}: {} combinations -> {}", k, total, path.display());
    let mut written = 0u64;
    let mut line = String::with_capacity(3 * k);
    for combo in (1..=symbols).combinations(k) {
        line.clear();
        for (i, s) in combo.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            write!(line, "{}", s).expect("writing to a String cannot fail");
        }
        writeln!(out, "{}", line).map_err(|e| CoverError::io(&path, e))?;
        written += 1;
        if written % PROGRESS_STEP == 0 {
            eprintln!("  {}/{} written", written, total);
        }
    }
    out.flush().map_err(|e| CoverError::io(&path, e))?;

    debug_assert_eq!(written, total);
    Ok((path, written))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table_small_universe() {
        let dir = tempfile::tempdir().unwrap();
        let (path, written) = write_table(dir.path(), 5, 3).unwrap();
        assert_eq!(written, 10);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "1,2,3");
        assert_eq!(lines[1], "1,2,4");
        assert_eq!(lines[9], "3,4,5");
    }

    #[test]
    fn test_write_table_k_equals_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let (path, written) = write_table(dir.path(), 4, 4).unwrap();
        assert_eq!(written, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,2,3,4\n");
    }
}
