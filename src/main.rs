use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_minver::cli::orchestration::{prepare_calculation, CalculateArgs};
use git_minver::config::Settings;
use git_minver::logging::{TracingLogger, Verbosity};
use git_minver::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-minver",
    version,
    about = "Calculate a SemVer 2.0 version from git tags and commit history"
)]
struct Args {
    #[arg(default_value = ".", help = "Directory inside the repository to version")]
    work_dir: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Use the [projects.<name>] table of the configuration file")]
    project: Option<String>,

    #[arg(
        short = 't',
        long,
        env = "MINVER_TAG_PREFIX",
        help = "Only tags starting with this prefix are versions"
    )]
    tag_prefix: Option<String>,

    #[arg(
        short = 'm',
        long,
        env = "MINVER_MINIMUM_MAJOR_MINOR",
        help = "Minimum major.minor, e.g. 1.0"
    )]
    minimum_major_minor: Option<String>,

    #[arg(
        short = 'b',
        long,
        env = "MINVER_BUILD_METADATA",
        help = "Build metadata appended to the version"
    )]
    build_metadata: Option<String>,

    #[arg(
        short = 'a',
        long,
        env = "MINVER_AUTO_INCREMENT",
        help = "Part to bump after a release tag: major, minor or patch"
    )]
    auto_increment: Option<String>,

    #[arg(
        short = 'p',
        long,
        env = "MINVER_DEFAULT_PRE_RELEASE_PHASE",
        help = "Pre-release phase for untagged heights, e.g. alpha"
    )]
    default_pre_release_phase: Option<String>,

    #[arg(
        short = 'v',
        long,
        env = "MINVER_VERBOSITY",
        help = "error, warn, info, debug or trace"
    )]
    verbosity: Option<String>,
}

impl Args {
    fn to_calculate_args(&self) -> CalculateArgs {
        CalculateArgs {
            work_dir: self.work_dir.clone(),
            config_path: self.config.clone(),
            project: self.project.clone(),
            overrides: Settings {
                tag_prefix: self.tag_prefix.clone(),
                minimum_major_minor: self.minimum_major_minor.clone(),
                build_metadata: self.build_metadata.clone(),
                auto_increment: self.auto_increment.clone(),
                default_pre_release_phase: self.default_pre_release_phase.clone(),
                verbosity: self.verbosity.clone(),
            },
        }
    }
}

fn init_tracing(verbosity: Verbosity) {
    // RUST_LOG, when set, replaces the configured verbosity
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let calculation = match prepare_calculation(&args.to_calculate_args()) {
        Ok(calculation) => calculation,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    init_tracing(calculation.verbosity);

    let version = calculation.run(&TracingLogger);
    ui::display_version(&version);

    Ok(())
}
