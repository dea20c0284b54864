//! Ticket cost report
//!
//! Counts the rows of each emitted SB15_k file, prices them at a fixed unit
//! cost, and writes the consolidated table as CSV next to a terminal-friendly
//! rendering. Missing files are reported, not fatal.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cover::{CoverError, Scenario};

pub const DEFAULT_TICKET_PRICE: f64 = 3.00;

/// Where the consolidated cost table lands.
pub fn default_output_path() -> PathBuf {
    PathBuf::from("prog7_saida/resultado_custo_sb.csv")
}

#[derive(Debug, Clone, Serialize)]
pub struct CostLine {
    pub label: String,
    /// None when the SB file has not been generated yet
    pub rows: Option<u64>,
    pub cost: Option<f64>,
}

impl CostLine {
    pub fn status(&self) -> &'static str {
        if self.rows.is_some() { "OK" } else { "MISSING" }
    }
}

/// Count and price every shipped SB15_k file.
pub fn cost_report(price: f64) -> Result<Vec<CostLine>, CoverError> {
    let mut lines = Vec::with_capacity(Scenario::SUPPORTED.len());
    for k in Scenario::SUPPORTED {
        let scenario = Scenario::for_k(k);
        let label = format!("SB15_{}", k);
        let rows = match count_lines(&scenario.sb_file) {
            Ok(n) => Some(n),
            Err(CoverError::Io { ref source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                None
            }
            Err(e) => return Err(e),
        };
        lines.push(CostLine {
            label,
            rows,
            cost: rows.map(|n| n as f64 * price),
        });
    }
    Ok(lines)
}

/// Write the consolidated table as CSV.
pub fn write_cost_csv(path: &Path, lines: &[CostLine]) -> Result<(), CoverError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| CoverError::io(dir, e))?;
        }
    }
    let file = File::create(path).map_err(|e| CoverError::io(path, e))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "SB,Linhas,Custo_R$,Status").map_err(|e| CoverError::io(path, e))?;
    for line in lines {
        match (line.rows, line.cost) {
            (Some(rows), Some(cost)) => writeln!(out, "{},{},{:.2},OK", line.label, rows, cost),
            _ => writeln!(out, "{},-,-,MISSING", line.label),
        }
        .map_err(|e| CoverError::io(path, e))?;
    }
    out.flush().map_err(|e| CoverError::io(path, e))
}

fn count_lines(path: &Path) -> Result<u64, CoverError> {
    let file = File::open(path).map_err(|e| CoverError::io(path, e))?;
    let reader = BufReader::with_capacity(1 << 20, file);
    let mut n = 0u64;
    for line in reader.lines() {
        line.map_err(|e| CoverError::io(path, e))?;
        n += 1;
    }
    Ok(n)
}
