use crate::domain::{Commit, CommitGraph, CommitId, Tag};
use crate::error::{MinVerError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};

/// In-memory history for testing without actual git operations
pub struct MockRepository {
    work_dir: PathBuf,
    is_working_directory: bool,
    commits: Vec<Commit>,
    tags: Vec<Tag>,
    head: Option<CommitId>,
    broken: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository (a working directory with no commits)
    pub fn new() -> Self {
        MockRepository {
            work_dir: PathBuf::from("."),
            is_working_directory: true,
            commits: Vec::new(),
            tags: Vec::new(),
            head: None,
            broken: None,
        }
    }

    /// A directory that is not inside any git working tree
    pub fn not_a_working_directory(work_dir: impl Into<PathBuf>) -> Self {
        MockRepository {
            work_dir: work_dir.into(),
            is_working_directory: false,
            ..Self::new()
        }
    }

    /// Add a commit; the last commit added becomes HEAD
    pub fn add_commit(&mut self, id: &str, parents: &[&str]) -> &mut Self {
        let commit = Commit::new(id, parents.iter().map(|p| CommitId::new(*p)).collect());
        self.head = Some(commit.id.clone());
        self.commits.push(commit);
        self
    }

    /// Add a tag pointing at a commit id
    pub fn add_tag(&mut self, name: &str, target: &str) -> &mut Self {
        self.tags.push(Tag::new(name, target));
        self
    }

    /// Point HEAD at a specific commit
    pub fn set_head(&mut self, id: &str) -> &mut Self {
        self.head = Some(CommitId::new(id));
        self
    }

    /// Make every history read fail with `reason`
    pub fn fail_reads(&mut self, reason: &str) -> &mut Self {
        self.broken = Some(reason.to_string());
        self
    }

    fn check_readable(&self) -> Result<()> {
        match &self.broken {
            Some(reason) => Err(git2::Error::from_str(reason).into()),
            None if !self.is_working_directory => Err(MinVerError::config(format!(
                "'{}' is not a git working directory",
                self.work_dir.display()
            ))),
            None => Ok(()),
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn is_working_directory(&self) -> bool {
        self.is_working_directory
    }

    fn head(&self) -> Result<Option<CommitId>> {
        self.check_readable()?;
        Ok(self.head.clone())
    }

    fn commit_graph(&self, _head: &CommitId) -> Result<CommitGraph> {
        self.check_readable()?;
        Ok(self.commits.iter().cloned().collect())
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        self.check_readable()?;
        Ok(self.tags.clone())
    }
}
