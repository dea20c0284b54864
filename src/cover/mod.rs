// Greedy set-cover engine for dominating subsets
//
// Pipeline: the target index assigns dense ids to the size-k universe, the
// expander enumerates the subsets a candidate row covers, the selector drains
// a lazily-updated max-heap until the coverage bitmap is full, and the
// verifier re-derives the cover from the emitted file.

pub mod bitmap;
pub mod config;
pub mod error;
pub mod expand;
pub mod index;
pub mod mask;
pub mod recorder;
pub mod rows;
pub mod run;
pub mod selector;
pub mod verify;

// Re-export the main types
pub use bitmap::CoverageBitmap;
pub use config::{CoverConfig, Scenario};
pub use error::CoverError;
pub use expand::{OmissionTable, expand_row};
pub use index::TargetIndex;
pub use recorder::{RunSummary, append_log};
pub use rows::RowStore;
pub use selector::{Selection, greedy_cover};
pub use verify::{VerifyReport, verify_cover};
