use std::fmt;

/// Opaque commit identity (the full object hash)
///
/// Identities are only ever compared for equality or hashed, never ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        CommitId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The abbreviated form used in diagnostics (first 7 characters)
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(7) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl From<git2::Oid> for CommitId {
    fn from(oid: git2::Oid) -> Self {
        CommitId(oid.to_string())
    }
}

impl From<&str> for CommitId {
    fn from(id: &str) -> Self {
        CommitId::new(id)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

/// A commit and its ordered parents
///
/// The first parent is the mainline continuation of the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: CommitId,
    pub parents: Vec<CommitId>,
}

impl Commit {
    pub fn new(id: impl Into<CommitId>, parents: Vec<CommitId>) -> Self {
        Commit {
            id: id.into(),
            parents,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}
