//! Main workflow orchestration logic
//!
//! Resolves configuration for one (sub-)project, then runs the version
//! calculation against the repository in the working directory. Kept apart
//! from `main.rs` so the workflow can be called without clap.

use std::path::PathBuf;

use crate::analyzer::{calculate_version, VersionerOptions};
use crate::config::{load_config, Settings};
use crate::domain::Version;
use crate::error::Result;
use crate::git::Git2Repository;
use crate::logging::{Logger, Verbosity};

/// Arguments for the calculation workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculateArgs {
    /// Directory inside the repository to version
    pub work_dir: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Project table in the config file to apply
    pub project: Option<String>,

    /// Settings given on the command line or through the environment
    pub overrides: Settings,
}

/// A validated calculation, ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCalculation {
    pub work_dir: PathBuf,
    pub options: VersionerOptions,
    pub verbosity: Verbosity,
}

impl PreparedCalculation {
    /// Run the calculation; never fails once prepared
    pub fn run(&self, log: &dyn Logger) -> Version {
        let repo = Git2Repository::discover(&self.work_dir);
        calculate_version(&repo, &self.options, log)
    }
}

/// Load and merge configuration, then validate it
///
/// Precedence: command line / environment, then the project table, then
/// the top level of the config file, then built-in defaults.
///
/// # Returns
/// * `Ok(PreparedCalculation)` - Valid options for the calculation
/// * `Err` - If the config file is unreadable or any value is invalid
pub fn prepare_calculation(args: &CalculateArgs) -> Result<PreparedCalculation> {
    let config = load_config(args.config_path.as_deref(), &args.work_dir)?;
    let settings = config
        .settings_for(args.project.as_deref())?
        .merge(&args.overrides);

    let verbosity = match settings.verbosity.as_deref() {
        Some(text) if !text.trim().is_empty() => text.trim().parse::<Verbosity>()?,
        _ => Verbosity::default(),
    };

    Ok(PreparedCalculation {
        work_dir: args.work_dir.clone(),
        options: settings.resolve()?,
        verbosity,
    })
}

/// Prepare and run in one step
pub fn run_calculation(args: &CalculateArgs, log: &dyn Logger) -> Result<Version> {
    Ok(prepare_calculation(args)?.run(log))
}
