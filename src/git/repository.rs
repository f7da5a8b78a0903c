use crate::domain::{Commit, CommitGraph, CommitId, Tag};
use crate::error::Result;
use git2::{ErrorCode, Oid, Repository as Git2Repo};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
///
/// Opening never fails: a directory outside any working tree yields a
/// repository whose [`is_working_directory`](super::Repository::is_working_directory)
/// returns `false`.
pub struct Git2Repository {
    work_dir: PathBuf,
    repo: Option<Git2Repo>,
}

impl Git2Repository {
    /// Discover the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Self {
        let work_dir = path.as_ref().to_path_buf();
        let repo = Git2Repo::discover(&work_dir)
            .ok()
            .filter(|repo| !repo.is_bare());

        Git2Repository { work_dir, repo }
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        let work_dir = repo
            .workdir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| repo.path().to_path_buf());

        Git2Repository {
            work_dir,
            repo: Some(repo),
        }
    }

    fn repo(&self) -> Result<&Git2Repo> {
        self.repo.as_ref().ok_or_else(|| {
            git2::Error::from_str(&format!(
                "'{}' is not a git working directory",
                self.work_dir.display()
            ))
            .into()
        })
    }
}

impl super::Repository for Git2Repository {
    fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn is_working_directory(&self) -> bool {
        self.repo.is_some()
    }

    fn head(&self) -> Result<Option<CommitId>> {
        let repo = self.repo()?;

        let head = match repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        let commit = head.peel_to_commit()?;

        Ok(Some(commit.id().into()))
    }

    fn commit_graph(&self, head: &CommitId) -> Result<CommitGraph> {
        let repo = self.repo()?;

        let mut graph = CommitGraph::new();
        let mut seen = HashSet::new();
        let mut pending = vec![Oid::from_str(head.as_str())?];

        while let Some(oid) = pending.pop() {
            if !seen.insert(oid) {
                continue;
            }

            let commit = match repo.find_commit(oid) {
                Ok(commit) => commit,
                Err(e) if e.code() == ErrorCode::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            let parents: Vec<Oid> = commit.parent_ids().collect();
            pending.extend(parents.iter().copied());

            graph.insert(Commit::new(
                CommitId::from(oid),
                parents.into_iter().map(CommitId::from).collect(),
            ));
        }

        Ok(graph)
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        let repo = self.repo()?;

        let mut tags = Vec::new();

        // Refs that fail to load are dropped by the iterator; tags pointing at
        // trees, blobs or missing refs cannot version a commit.
        for reference in repo.references_glob("refs/tags/*")?.flatten() {
            let Some(name) = reference
                .name()
                .and_then(|name| name.strip_prefix("refs/tags/"))
            else {
                continue;
            };

            if let Ok(commit) = reference.peel_to_commit() {
                tags.push(Tag::new(name, commit.id()));
            }
        }

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_discover_outside_repository() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = Git2Repository::discover(dir.path().join("missing"));

        assert!(!repo.is_working_directory());
        assert!(repo.head().is_err());
        assert!(repo.tags().is_err());
    }

    #[test]
    fn test_empty_repository_has_no_head() {
        let dir = tempfile::TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();

        let repo = Git2Repository::discover(dir.path());
        assert!(repo.is_working_directory());
        assert_eq!(repo.head().unwrap(), None);
        assert!(repo.tags().unwrap().is_empty());
    }

    #[test]
    fn test_tags_skip_unreadable_references() {
        let dir = tempfile::TempDir::new().unwrap();
        let git = Git2Repo::init(dir.path()).unwrap();
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = git.treebuilder(None).unwrap().write().unwrap();
        let tree = git.find_tree(tree_id).unwrap();
        let oid = git
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        let object = git.find_object(oid, None).unwrap();
        git.tag_lightweight("1.0.0", &object, false).unwrap();
        git.reference_symbolic("refs/tags/dangling", "refs/heads/nowhere", false, "dangling")
            .unwrap();
        std::fs::write(
            dir.path().join(".git").join("refs").join("tags").join("garbage"),
            "not an object id\n",
        )
        .unwrap();

        let repo = Git2Repository::discover(dir.path());
        assert_eq!(repo.tags().unwrap(), vec![Tag::new("1.0.0", oid)]);
    }
}
