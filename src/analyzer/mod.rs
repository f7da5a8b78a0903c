//! Version calculation engine: history search, candidate selection and
//! finalization of the selected version

pub mod candidate;
pub mod search;
pub mod selection;
pub mod versioner;

pub use candidate::Candidate;
pub use search::{find_candidates, tags_and_versions, SearchOutcome};
pub use selection::{order_candidates, select_candidate};
pub use versioner::{calculate_version, version_from_history, VersionerOptions};
