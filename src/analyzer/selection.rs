use crate::analyzer::Candidate;
use crate::logging::Logger;

/// Sort candidates so that the preferred one comes last
///
/// Ascending by version, then descending by discovery index: among equal
/// versions the candidate discovered first ends up last.
pub fn order_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        a.version
            .cmp(&b.version)
            .then_with(|| b.index.cmp(&a.index))
    });
    candidates
}

/// Pick the candidate with the greatest version, earliest discovered on ties
///
/// Logs every ignored candidate at debug level and the selected one at info.
pub fn select_candidate(
    candidates: Vec<Candidate>,
    tag_prefix: &str,
    log: &dyn Logger,
) -> Option<Candidate> {
    let mut ordered = order_candidates(candidates);

    let (tag_width, version_width, height_width) = if log.is_debug_enabled() {
        (
            ordered
                .iter()
                .map(|c| c.tag.as_ref().map_or(2, String::len))
                .max()
                .unwrap_or(0),
            ordered
                .iter()
                .map(|c| c.version.to_string().len())
                .max()
                .unwrap_or(0),
            ordered
                .iter()
                .map(|c| c.height)
                .max()
                .unwrap_or(0)
                .to_string()
                .len(),
        )
    } else {
        (0, 0, 0)
    };

    let candidate_count = ordered.len();
    let selected = ordered.pop()?;

    if log.is_debug_enabled() {
        for candidate in &ordered {
            log.debug(&format!(
                "Ignoring {}.",
                candidate.to_aligned_string(tag_width, version_width, height_width)
            ));
        }
    }

    if !selected.is_tagged() {
        let prefixed = if tag_prefix.is_empty() {
            String::new()
        } else {
            format!(" prefixed with '{}'", tag_prefix)
        };

        log.info(&format!(
            "No commit found with a valid SemVer 2.0 version{}. Using default version {}.",
            prefixed, selected.version
        ));
    }

    // Pad "Using" to line up with the "Ignoring" lines above it.
    let padding = if log.is_debug_enabled() && candidate_count > 1 {
        "    "
    } else {
        " "
    };

    log.info(&format!(
        "Using{}{}.",
        padding,
        selected.to_aligned_string(tag_width, version_width, height_width)
    ));

    Some(selected)
}
