use crate::domain::commit::CommitId;
use std::fmt;

/// Represents a git tag and the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub target: CommitId,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, target: impl Into<CommitId>) -> Self {
        Tag {
            name: name.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.target.short())
    }
}
