use crate::domain::commit::{Commit, CommitId};
use std::collections::HashMap;

/// Materialized, read-only view of the history reachable from HEAD
///
/// Commits are stored by identity and refer to their parents by identity,
/// so converging merges never duplicate a commit.
#[derive(Debug, Clone, Default)]
pub struct CommitGraph {
    commits: HashMap<CommitId, Commit>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, commit: Commit) {
        self.commits.insert(commit.id.clone(), commit);
    }

    pub fn get(&self, id: &CommitId) -> Option<&Commit> {
        self.commits.get(id)
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.commits.contains_key(id)
    }

    /// Parents of `id` that are present in the graph, in parent order
    ///
    /// Parents missing from the graph (the boundary of a shallow clone)
    /// are skipped, so a commit whose parents are all missing acts as a root.
    pub fn parents<'a>(&'a self, id: &CommitId) -> impl Iterator<Item = &'a Commit> + 'a {
        self.commits
            .get(id)
            .map(|commit| commit.parents.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |parent| self.commits.get(parent))
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

impl FromIterator<Commit> for CommitGraph {
    fn from_iter<I: IntoIterator<Item = Commit>>(iter: I) -> Self {
        let mut graph = CommitGraph::new();
        for commit in iter {
            graph.insert(commit);
        }
        graph
    }
}
