//! Builds real git repositories in temporary directories

#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn init() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature() -> Signature<'static> {
        Signature::now("Test", "test@example.com").unwrap()
    }

    /// Commit an empty tree on HEAD's branch
    pub fn commit(&self, message: &str) -> Oid {
        let parents = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap().id()],
            Err(_) => Vec::new(),
        };
        self.commit_onto(Some("HEAD"), message, &parents)
    }

    /// Commit with explicit parents, optionally moving `update_ref`
    pub fn commit_onto(&self, update_ref: Option<&str>, message: &str, parents: &[Oid]) -> Oid {
        let sig = Self::signature();
        let tree_id = self.repo.treebuilder(None).unwrap().write().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit> = parents
            .iter()
            .map(|id| self.repo.find_commit(*id).unwrap())
            .collect();
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        self.repo
            .commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    pub fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn annotated_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo
            .tag(name, &object, &Self::signature(), name, false)
            .unwrap();
    }
}

pub fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
