use crate::analyzer::{find_candidates, select_candidate, tags_and_versions};
use crate::boundary::BoundaryWarning;
use crate::domain::{
    BuildMetadata, CommitGraph, CommitId, MajorMinor, PreReleaseIdentifier, Tag, Version,
    VersionPart,
};
use crate::error::Result;
use crate::git::Repository;
use crate::logging::Logger;

/// Validated inputs of one version calculation
#[derive(Debug, Clone, PartialEq)]
pub struct VersionerOptions {
    /// Tags must start with this prefix to count as versions
    pub tag_prefix: String,
    /// Floor for major.minor; `0.0` never raises anything
    pub minimum_major_minor: MajorMinor,
    pub build_metadata: BuildMetadata,
    /// Part bumped when HEAD is past a release tag
    pub auto_increment: VersionPart,
    /// Phase used for fabricated pre-release versions
    pub default_pre_release_phase: PreReleaseIdentifier,
}

impl Default for VersionerOptions {
    fn default() -> Self {
        VersionerOptions {
            tag_prefix: String::new(),
            minimum_major_minor: MajorMinor::default(),
            build_metadata: BuildMetadata::empty(),
            auto_increment: VersionPart::default(),
            default_pre_release_phase: PreReleaseIdentifier::AlphaNumeric("alpha".to_string()),
        }
    }
}

/// Calculate the version of HEAD in `repo`
///
/// Always returns a usable version: a repository that cannot be read
/// produces the default version and a warning instead of an error.
pub fn calculate_version<R: Repository + ?Sized>(
    repo: &R,
    options: &VersionerOptions,
    log: &dyn Logger,
) -> Version {
    let version = version_from_repository(repo, options, log)
        .add_build_metadata(&options.build_metadata);

    let calculated = version.satisfying(
        options.minimum_major_minor,
        &options.default_pre_release_phase,
    );

    if calculated != version {
        log.info(&format!(
            "Bumping version to {} to satisfy minimum major minor {}.",
            calculated, options.minimum_major_minor
        ));
    } else if log.is_debug_enabled() {
        log.debug(&format!(
            "The calculated version {} satisfies the minimum major minor {}.",
            calculated, options.minimum_major_minor
        ));
    }

    log.info(&format!("Calculated version {}.", calculated));

    calculated
}

fn version_from_repository<R: Repository + ?Sized>(
    repo: &R,
    options: &VersionerOptions,
    log: &dyn Logger,
) -> Version {
    let default_version = Version::default_version(&options.default_pre_release_phase);

    if !repo.is_working_directory() {
        let warning = BoundaryWarning::NotAWorkingDirectory {
            work_dir: repo.work_dir().display().to_string(),
            default_version: default_version.clone(),
        };
        log.warn(warning.code(), &warning.to_string());
        return default_version;
    }

    match read_history(repo) {
        Ok(Some((head, graph, tags))) => version_from_history(&head, &graph, &tags, options, log),
        Ok(None) => {
            log.info(&format!(
                "No commits found. Using default version {}.",
                default_version
            ));
            default_version
        }
        Err(e) => {
            let warning = BoundaryWarning::HistoryUnavailable {
                reason: e.to_string(),
                default_version: default_version.clone(),
            };
            log.warn(warning.code(), &warning.to_string());
            default_version
        }
    }
}

fn read_history<R: Repository + ?Sized>(
    repo: &R,
) -> Result<Option<(CommitId, CommitGraph, Vec<Tag>)>> {
    let Some(head) = repo.head()? else {
        return Ok(None);
    };

    let graph = repo.commit_graph(&head)?;
    let tags = repo.tags()?;

    Ok(Some((head, graph, tags)))
}

/// Derive the version of `head` from an already materialized history
///
/// Does not apply build metadata or the minimum major.minor; see
/// [`calculate_version`] for the complete calculation.
pub fn version_from_history(
    head: &CommitId,
    graph: &CommitGraph,
    tags: &[Tag],
    options: &VersionerOptions,
    log: &dyn Logger,
) -> Version {
    let phase = &options.default_pre_release_phase;
    let parsed = tags_and_versions(tags, &options.tag_prefix, log);
    let outcome = find_candidates(graph, head, &parsed, phase, log);

    match select_candidate(outcome.candidates, &options.tag_prefix, log) {
        Some(selected) => {
            match selected
                .version
                .with_height(selected.height, options.auto_increment, phase)
            {
                Some(version) => version,
                None => {
                    log.info(&format!(
                        "Cannot bump {} of {} without overflow. Using {}.",
                        options.auto_increment, selected.version, selected.version
                    ));
                    selected.version
                }
            }
        }
        None => {
            let version = Version::default_version(phase);
            log.info(&format!(
                "Commit {} is not part of the history. Using default version {}.",
                head, version
            ));
            version
        }
    }
}
