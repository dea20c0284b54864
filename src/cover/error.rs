use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by the cover engine
#[derive(Debug)]
pub enum CoverError {
    /// Malformed or inconsistent input data, located by file and 1-based line
    Input {
        path: PathBuf,
        line: u64,
        msg: String,
    },
    /// The heap drained before the target universe was fully covered
    CoverInfeasible { missing: usize },
    /// Independent verification found uncovered target ids
    VerificationFailed { missing: usize },
    /// Failure opening, reading, or writing a file
    Io { path: PathBuf, source: io::Error },
}

impl CoverError {
    pub fn input(path: &Path, line: u64, msg: impl Into<String>) -> Self {
        CoverError::Input {
            path: path.to_path_buf(),
            line,
            msg: msg.into(),
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        CoverError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::Input { path, line, msg } => {
                write!(f, "{}:{}: {}", path.display(), line, msg)
            }
            CoverError::CoverInfeasible { missing } => {
                write!(
                    f,
                    "heap drained with {} target ids still uncovered",
                    missing
                )
            }
            CoverError::VerificationFailed { missing } => {
                write!(f, "verification failed: {} target ids not covered", missing)
            }
            CoverError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoverError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
