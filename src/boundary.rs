use crate::domain::Version;
use std::fmt;

/// Warnings that occur when the repository cannot supply a usable history.
/// These are non-fatal: the calculation falls back to the default version.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The directory is not inside a git working tree
    NotAWorkingDirectory {
        work_dir: String,
        default_version: Version,
    },
    /// HEAD, commits or tags could not be read
    HistoryUnavailable {
        reason: String,
        default_version: Version,
    },
}

impl BoundaryWarning {
    /// Stable numeric code reported alongside the warning
    pub fn code(&self) -> u32 {
        match self {
            BoundaryWarning::NotAWorkingDirectory { .. } => 1001,
            BoundaryWarning::HistoryUnavailable { .. } => 1002,
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NotAWorkingDirectory {
                work_dir,
                default_version,
            } => {
                write!(
                    f,
                    "'{}' is not a valid Git working directory. Using default version {}.",
                    work_dir, default_version
                )
            }
            BoundaryWarning::HistoryUnavailable {
                reason,
                default_version,
            } => {
                write!(
                    f,
                    "Cannot read Git history: {}. Using default version {}.",
                    reason, default_version
                )
            }
        }
    }
}
