pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;

pub use analyzer::{calculate_version, VersionerOptions};
pub use domain::Version;
pub use error::{MinVerError, Result};
