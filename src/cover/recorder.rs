//! Run recorder
//!
//! Appends one row of summary metrics per run to the scenario's log CSV. The
//! header is written when the file is first created; afterwards the file only
//! grows, and the recorder is its sole writer within a run.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::config::CoverConfig;
use super::error::CoverError;

const LOG_HEADER: &str = "SB_size,Lower_bound,Approx_factor,ln|U|+1,Alpha_over_ln,Tempo (s),Pico_RAM(MB)";

/// One run's summary metrics.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub sb_size: usize,
    pub lower_bound: usize,
    /// α = sb_size / lower_bound
    pub approx_factor: f64,
    /// ln |Uₖ| + 1, the classical greedy approximation bound
    pub ln_bound: f64,
    /// α / (ln |Uₖ| + 1); ≤ 1 certifies the run is within the bound
    pub alpha_over_ln: f64,
    pub elapsed_s: f64,
    pub peak_rss_mib: f64,
}

impl RunSummary {
    pub fn new(config: &CoverConfig, sb_size: usize, elapsed_s: f64) -> Self {
        let lower_bound = config.lower_bound();
        let approx_factor = sb_size as f64 / lower_bound as f64;
        let ln_bound = (config.universe_size() as f64).ln() + 1.0;
        Self {
            sb_size,
            lower_bound,
            approx_factor,
            ln_bound,
            alpha_over_ln: approx_factor / ln_bound,
            elapsed_s,
            peak_rss_mib: peak_rss_mib(),
        }
    }
}

/// Append one summary row, writing the header first when the log is new.
pub fn append_log(path: &Path, summary: &RunSummary) -> Result<(), CoverError> {
    let write_header = !path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CoverError::io(path, e))?;
    if write_header {
        writeln!(file, "{}", LOG_HEADER).map_err(|e| CoverError::io(path, e))?;
    }
    writeln!(
        file,
        "{},{},{:.4},{:.3},{:.3},{:.2},{:.1}",
        summary.sb_size,
        summary.lower_bound,
        summary.approx_factor,
        summary.ln_bound,
        summary.alpha_over_ln,
        summary.elapsed_s,
        summary.peak_rss_mib,
    )
    .map_err(|e| CoverError::io(path, e))
}

/// Peak resident set size in MiB, from /proc/self/status (VmHWM).
#[cfg(target_os = "linux")]
pub fn peak_rss_mib() -> f64 {
    let Ok(status) = std::fs::read_to_string("/proc/self/status") else {
        return 0.0;
    };
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmHWM:") {
            let kib: f64 = rest
                .trim()
                .trim_end_matches("kB")
                .trim()
                .parse()
                .unwrap_or(0.0);
            return kib / 1024.0;
        }
    }
    0.0
}

#[cfg(not(target_os = "linux"))]
pub fn peak_rss_mib() -> f64 {
    0.0
}
