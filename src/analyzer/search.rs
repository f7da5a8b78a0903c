use crate::analyzer::Candidate;
use crate::domain::{Commit, CommitGraph, CommitId, PreReleaseIdentifier, Tag, Version};
use crate::logging::Logger;
use std::collections::{HashMap, HashSet};

/// Result of walking the history from HEAD
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub candidates: Vec<Candidate>,
    /// Distinct commits visited (diagnostics only)
    pub commits_checked: usize,
}

/// Parse every tag under `prefix`, dropping tags that are not versions
///
/// The result is sorted by version and then by tag name, which fixes the
/// order in which tags on the same commit become candidates.
pub fn tags_and_versions(tags: &[Tag], prefix: &str, log: &dyn Logger) -> Vec<(Tag, Version)> {
    let mut parsed: Vec<(Tag, Version)> = tags
        .iter()
        .filter_map(|tag| match Version::parse(&tag.name, prefix) {
            Ok(version) => Some((tag.clone(), version)),
            Err(_) => {
                if log.is_debug_enabled() {
                    log.debug(&format!("Ignoring non-version tag {}.", tag));
                }
                None
            }
        })
        .collect();

    parsed.sort_by(|(a_tag, a_version), (b_tag, b_version)| {
        a_version
            .cmp(b_version)
            .then_with(|| a_tag.name.cmp(&b_tag.name))
    });

    parsed
}

/// A commit waiting on the work stack, with the height along the path that
/// reached it and the child it was reached from
struct Pending<'g> {
    commit: &'g Commit,
    height: usize,
    child: &'g Commit,
}

/// Walk the history from `head` and collect version candidates
///
/// Depth-first with an explicit stack, first parent first. Every commit is
/// processed once: a path reaching an already processed commit is abandoned.
/// The walk stops descending at tagged commits. An untagged root reached
/// with no deeper path pending yields a default-version candidate.
pub fn find_candidates(
    graph: &CommitGraph,
    head: &CommitId,
    tags: &[(Tag, Version)],
    default_phase: &PreReleaseIdentifier,
    log: &dyn Logger,
) -> SearchOutcome {
    let Some(mut commit) = graph.get(head) else {
        return SearchOutcome::default();
    };

    let mut versions_by_commit: HashMap<&CommitId, Vec<&(Tag, Version)>> = HashMap::new();
    for entry in tags {
        versions_by_commit.entry(&entry.0.target).or_default().push(entry);
    }

    let mut checked: HashSet<&CommitId> = HashSet::new();
    let mut stack: Vec<Pending<'_>> = Vec::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut height = 0;
    let mut previous: Option<&Commit> = None;

    if log.is_trace_enabled() {
        log.trace(&format!(
            "Starting at commit {} (height {})...",
            commit.id, height
        ));
    }

    loop {
        if checked.insert(&commit.id) {
            match versions_by_commit.get(&commit.id) {
                Some(tagged) => {
                    for (tag, version) in tagged.iter().map(|entry| (&entry.0, &entry.1)) {
                        let candidate = Candidate {
                            commit: commit.id.clone(),
                            height,
                            tag: Some(tag.name.clone()),
                            version: version.clone(),
                            index: candidates.len(),
                        };

                        if log.is_trace_enabled() {
                            log.trace(&format!("Found version tag {}.", candidate));
                        }

                        candidates.push(candidate);
                    }
                }
                None => {
                    let parents: Vec<&Commit> = graph.parents(&commit.id).collect();

                    if log.is_trace_enabled() && parents.len() > 1 {
                        log.trace(&format!(
                            "History diverges from {} (height {}) to:",
                            commit.id, height
                        ));
                        for parent in &parents {
                            log.trace(&format!("- {} (height {})", parent.id, height + 1));
                        }
                    }

                    for parent in parents.iter().rev() {
                        stack.push(Pending {
                            commit: *parent,
                            height: height + 1,
                            child: commit,
                        });
                    }

                    let no_deeper_path = stack.last().map_or(true, |next| next.height <= height);

                    if parents.is_empty() && no_deeper_path {
                        let candidate = Candidate {
                            commit: commit.id.clone(),
                            height,
                            tag: None,
                            version: Version::default_version(default_phase),
                            index: candidates.len(),
                        };

                        if log.is_trace_enabled() {
                            log.trace(&format!("Found root commit {}.", candidate));
                        }

                        candidates.push(candidate);
                    }
                }
            }
        } else if log.is_trace_enabled() {
            if let Some(previous) = previous {
                log.trace(&format!(
                    "History converges from {} (height {}) back to previously seen commit {} (height {}). Abandoning path.",
                    previous.id,
                    height.saturating_sub(1),
                    commit.id,
                    height
                ));
            }
        }

        let Some(next) = stack.pop() else {
            break;
        };

        if log.is_trace_enabled() {
            previous = Some(commit);
            trace_step(graph, &next, height, stack.last(), log);
        }

        commit = next.commit;
        height = next.height;
    }

    if log.is_debug_enabled() {
        log.debug(&format!("{} commits checked.", checked.len()));
    }

    SearchOutcome {
        candidates,
        commits_checked: checked.len(),
    }
}

fn trace_step(
    graph: &CommitGraph,
    next: &Pending<'_>,
    old_height: usize,
    after: Option<&Pending<'_>>,
    log: &dyn Logger,
) {
    let child = &next.child.id;
    let child_height = next.height - 1;

    if graph.parents(child).count() > 1 {
        log.trace(&format!(
            "Following path from {} (height {}) through first parent {} (height {})...",
            child, child_height, next.commit.id, next.height
        ));
    } else if next.height <= old_height {
        let which = match after {
            Some(after) if after.height == next.height => "next",
            _ => "last",
        };

        log.trace(&format!(
            "Backtracking to {} (height {}) and following path through {} parent {} (height {})...",
            child, child_height, which, next.commit.id, next.height
        ));
    }
}
