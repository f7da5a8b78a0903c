use crate::domain::{CommitId, Version};
use std::fmt;

/// A version found while walking the history from HEAD
///
/// `height` counts the edges walked from HEAD along the path that first
/// reached the commit. `index` is the discovery order during the walk and
/// only serves as a tie-breaker between equal versions.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub commit: CommitId,
    pub height: usize,
    /// `None` for the default version of an untagged root commit
    pub tag: Option<String>,
    pub version: Version,
    pub index: usize,
}

impl Candidate {
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }

    /// Render with the tag, version and height columns padded to the given widths
    pub fn to_aligned_string(
        &self,
        tag_width: usize,
        version_width: usize,
        height_width: usize,
    ) -> String {
        let tag = format!("'{}',", self.tag.as_deref().unwrap_or_default());
        let version = format!("{},", self.version);

        format!(
            "{{ Commit: {}, Tag: {:<tag_w$} Version: {:<version_w$} Height: {:>height_w$} }}",
            self.commit.short(),
            tag,
            version,
            self.height,
            tag_w = tag_width + 3,
            version_w = version_width + 1,
            height_w = height_width,
        )
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_aligned_string(0, 0, 0))
    }
}
