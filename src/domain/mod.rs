//! Domain logic - pure version and history types independent of git operations

pub mod commit;
pub mod graph;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use commit::{Commit, CommitId};
pub use graph::CommitGraph;
pub use prerelease::{BuildMetadata, PreReleaseIdentifier};
pub use tag::Tag;
pub use version::{MajorMinor, Version, VersionPart};
