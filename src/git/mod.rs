//! Git history abstraction layer
//!
//! The version calculation never talks to git directly. It asks a
//! [Repository] for HEAD, the history reachable from it, and the tags.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: reads a real repository with the `git2` crate
//! - [mock::MockRepository]: an in-memory history for tests and embedding
//!
//! # Usage
//!
//! ```rust
//! # use git_minver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(head) = repo.head()? {
//!     let graph = repo.commit_graph(&head)?;
//!     let tags = repo.tags()?;
//!     println!("{} commits, {} tags", graph.len(), tags.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{CommitGraph, CommitId, Tag};
use crate::error::Result;
use std::path::Path;

/// Read-only source of commit history and tags
///
/// ## Thread Safety
///
/// Implementors must be `Send`. `git2::Repository` is not `Sync`, so a
/// source moves between threads but is not shared by them.
///
/// ## Error Handling
///
/// Methods return [crate::error::Result]. The calculation treats any error
/// as "history unavailable" and falls back to the default version.
pub trait Repository: Send {
    /// The directory the repository was opened from (used in diagnostics)
    fn work_dir(&self) -> &Path;

    /// Whether the directory is inside a git working tree
    fn is_working_directory(&self) -> bool;

    /// The commit HEAD points at
    ///
    /// # Returns
    /// * `Ok(Some(id))` - HEAD resolves to a commit
    /// * `Ok(None)` - The repository has no commits yet
    /// * `Err` - If HEAD cannot be read
    fn head(&self) -> Result<Option<CommitId>>;

    /// Every commit reachable from `head` through parent links
    ///
    /// Parents that cannot be loaded (shallow clones) are left out of the
    /// graph; the commits referring to them keep the parent id.
    ///
    /// The graph is materialized before the search starts, even though the
    /// search stops at the first tag on each path. Long histories therefore
    /// pay for every reachable commit.
    fn commit_graph(&self, head: &CommitId) -> Result<CommitGraph>;

    /// All tags that point (directly or through an annotated tag) at a commit
    fn tags(&self) -> Result<Vec<Tag>>;
}
