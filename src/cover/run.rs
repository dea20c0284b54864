//! One-scenario orchestration: load inputs, select, emit SB15_k
//!
//! Verification and log recording stay separate so the verifier never sees
//! selector state; callers chain [`solve`], [`super::verify::verify_cover`],
//! and [`super::recorder::append_log`].

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use super::config::CoverConfig;
use super::error::CoverError;
use super::index::TargetIndex;
use super::recorder::RunSummary;
use super::rows::RowStore;
use super::selector::{Selection, greedy_cover};

/// Run the greedy selector for one scenario and write the chosen rows,
/// verbatim from their source lines, in selection order.
pub fn solve(
    config: &CoverConfig,
    targets_path: &Path,
    rows_path: &Path,
    sb_path: &Path,
    store_all: bool,
) -> Result<RunSummary, CoverError> {
    let started = Instant::now();

    eprintln!("loading target index from {}", targets_path.display());
    let index = TargetIndex::load(targets_path, config)?;
    eprintln!("loading candidate rows from {}", rows_path.display());
    let rows = RowStore::load(rows_path, config)?;

    let selection = greedy_cover(config, &index, &rows, store_all)?;
    write_selection(sb_path, &rows, &selection)?;
    eprintln!(
        "wrote {} rows to {}",
        selection.chosen.len(),
        sb_path.display()
    );

    Ok(RunSummary::new(
        config,
        selection.chosen.len(),
        started.elapsed().as_secs_f64(),
    ))
}

fn write_selection(
    sb_path: &Path,
    rows: &RowStore,
    selection: &Selection,
) -> Result<(), CoverError> {
    if let Some(dir) = sb_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| CoverError::io(dir, e))?;
        }
    }
    let file = File::create(sb_path).map_err(|e| CoverError::io(sb_path, e))?;
    let mut out = BufWriter::new(file);
    for &row in &selection.chosen {
        writeln!(out, "{}", rows.line(row as usize)).map_err(|e| CoverError::io(sb_path, e))?;
    }
    out.flush().map_err(|e| CoverError::io(sb_path, e))
}
