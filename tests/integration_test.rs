// tests/integration_test.rs
mod common;

use common::{write_config, TestRepo};
use git_minver::analyzer::{calculate_version, VersionerOptions};
use git_minver::cli::orchestration::{run_calculation, CalculateArgs};
use git_minver::git::Git2Repository;
use git_minver::logging::{LogLevel, MemoryLogger, NullLogger};
use std::process::Command;
use tempfile::TempDir;

fn calculate(repo: &TestRepo, options: &VersionerOptions) -> String {
    let repository = Git2Repository::discover(repo.path());
    calculate_version(&repository, options, &NullLogger).to_string()
}

fn prefixed(prefix: &str) -> VersionerOptions {
    VersionerOptions {
        tag_prefix: prefix.to_string(),
        ..VersionerOptions::default()
    }
}

#[test]
fn test_tagged_head() {
    let repo = TestRepo::init();
    let head = repo.commit("initial");
    repo.tag("1.2.3", head);

    assert_eq!(calculate(&repo, &VersionerOptions::default()), "1.2.3");
}

#[test]
fn test_height_since_tag() {
    let repo = TestRepo::init();
    let tagged = repo.commit("initial");
    repo.annotated_tag("v1.2.3", tagged);
    repo.commit("second");
    repo.commit("third");

    assert_eq!(calculate(&repo, &prefixed("v")), "1.3.0-alpha.2");
}

#[test]
fn test_unborn_repository_uses_default_version() {
    let repo = TestRepo::init();
    let log = MemoryLogger::new(LogLevel::Info);

    let version = calculate_version(
        &Git2Repository::discover(repo.path()),
        &VersionerOptions::default(),
        &log,
    );

    assert_eq!(version.to_string(), "0.0.0-alpha.0");
    assert!(log.entries().iter().all(|e| e.code.is_none()));
}

#[test]
fn test_merge_takes_highest_tag_from_either_parent() {
    let repo = TestRepo::init();
    let root = repo.commit("root");
    repo.tag("1.0.0", root);

    let feature = repo.commit_onto(None, "feature", &[root]);
    repo.annotated_tag("1.5.0", feature);

    let main = repo.commit("main");
    repo.commit_onto(Some("HEAD"), "merge", &[main, feature]);

    assert_eq!(
        calculate(&repo, &VersionerOptions::default()),
        "1.6.0-alpha.1"
    );
}

#[test]
fn test_pre_release_tag_keeps_pre_release() {
    let repo = TestRepo::init();
    let tagged = repo.commit("initial");
    repo.tag("2.0.0-rc.1", tagged);
    repo.commit("fix");

    assert_eq!(
        calculate(&repo, &VersionerOptions::default()),
        "2.0.0-rc.1.1"
    );
}

#[test]
fn test_projects_with_different_prefixes_share_a_commit() {
    let repo = TestRepo::init();
    let head = repo.commit("initial");
    repo.tag("2.3.4", head);
    repo.tag("v5.6.7", head);

    let config = write_config(
        r#"
[projects.app]
tag_prefix = ""

[projects.lib]
tag_prefix = "v"
"#,
    );

    let args = |project: &str| CalculateArgs {
        work_dir: repo.path().to_path_buf(),
        config_path: Some(config.path().to_path_buf()),
        project: Some(project.to_string()),
        ..CalculateArgs::default()
    };

    let app = run_calculation(&args("app"), &NullLogger).unwrap();
    let lib = run_calculation(&args("lib"), &NullLogger).unwrap();

    assert_eq!(app.to_string(), "2.3.4");
    assert_eq!(lib.to_string(), "5.6.7");
}

#[test]
fn test_not_a_repository_uses_default_version() {
    let dir = TempDir::new().unwrap();
    let log = MemoryLogger::new(LogLevel::Warn);

    let version = calculate_version(
        &Git2Repository::discover(dir.path().join("missing")),
        &VersionerOptions::default(),
        &log,
    );

    assert_eq!(version.to_string(), "0.0.0-alpha.0");
    assert_eq!(log.entries()[0].code, Some(1001));
}

// ============================================================================
// Binary Tests
// ============================================================================

fn git_minver() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_git-minver"));
    for var in [
        "MINVER_TAG_PREFIX",
        "MINVER_MINIMUM_MAJOR_MINOR",
        "MINVER_BUILD_METADATA",
        "MINVER_AUTO_INCREMENT",
        "MINVER_DEFAULT_PRE_RELEASE_PHASE",
        "MINVER_VERBOSITY",
        "RUST_LOG",
    ] {
        command.env_remove(var);
    }
    command
}

#[test]
fn test_binary_help() {
    let output = git_minver().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-minver"));
    assert!(stdout.contains("--tag-prefix"));
}

#[test]
fn test_binary_prints_version() {
    let repo = TestRepo::init();
    let tagged = repo.commit("initial");
    repo.tag("v0.9.1", tagged);
    repo.commit("second");
    let config = write_config("");

    let output = git_minver()
        .arg(repo.path())
        .arg("--config")
        .arg(config.path())
        .args(["-t", "v", "-a", "patch", "-b", "build.7"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "0.9.2-alpha.1+build.7\n"
    );
}

#[test]
fn test_binary_reads_environment() {
    let repo = TestRepo::init();
    repo.commit("initial");
    let config = write_config("");

    let output = git_minver()
        .arg(repo.path())
        .arg("--config")
        .arg(config.path())
        .env("MINVER_MINIMUM_MAJOR_MINOR", "2.0")
        .env("MINVER_DEFAULT_PRE_RELEASE_PHASE", "preview")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "2.0.0-preview.0\n"
    );
}

#[test]
fn test_binary_rejects_invalid_option() {
    let repo = TestRepo::init();
    repo.commit("initial");
    let config = write_config("");

    let output = git_minver()
        .arg(repo.path())
        .arg("--config")
        .arg(config.path())
        .args(["--auto-increment", "build"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("ERROR:"));
}

#[test]
fn test_binary_logs_to_stderr_only() {
    let repo = TestRepo::init();
    let tagged = repo.commit("initial");
    repo.tag("1.0.0", tagged);
    let config = write_config("");

    let output = git_minver()
        .arg(repo.path())
        .arg("--config")
        .arg(config.path())
        .args(["-v", "debug"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.0.0\n");
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Calculated version 1.0.0."));
}
