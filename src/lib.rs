//! lotocover
//!
//! Greedy set-cover engine for Lotofácil dominating subsets. For the fixed
//! universe {1..25}, finds small subfamilies SB15_k of the 3,268,760 size-15
//! combinations whose size-k subsets cover every size-k combination, for
//! k ∈ {14, 13, 12, 11}, then certifies the cover with an independent pass.
//!
//! The selection is the classical lazy-heap greedy: every candidate row is
//! primed at its optimistic gain C(15, k); stale heap entries are reinserted
//! with their measured gain at pop time, which is sound because gains only
//! shrink as coverage grows. The result stays within the (ln |Uₖ| + 1)·OPT
//! approximation bound.

pub mod cover;
pub mod report;
pub mod tables;

// Re-export the main types
pub use cover::{CoverConfig, CoverError, Scenario};
pub use cover::{RowStore, RunSummary, Selection, TargetIndex, VerifyReport};
pub use cover::{greedy_cover, verify_cover};

/// Run the full pipeline for one shipped scenario (k ∈ {11..14}): select,
/// write SB15_k, verify the emitted file, and append the run log.
pub fn run_scenario(k: usize, store_all: bool) -> Result<RunSummary, CoverError> {
    let scenario = Scenario::for_k(k);
    let summary = cover::run::solve(
        &scenario.config,
        &scenario.targets_file,
        &scenario.rows_file,
        &scenario.sb_file,
        store_all,
    )?;
    cover::verify_cover(&scenario.config, &scenario.targets_file, &scenario.sb_file)?;
    cover::append_log(&scenario.log_file, &summary)?;
    Ok(summary)
}
