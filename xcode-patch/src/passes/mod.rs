//! Section insertion passes for `project.pbxproj` files
//!
//! Each pass renders one line per planned file and inserts those lines
//! right after a known anchor record. The anchor belongs to a file that is
//! already part of the target, so the new files land next to it.

use regex::{Captures, Regex};

use crate::config::AnchorSet;
use crate::error::PatchError;
use crate::file_entry::PlannedEntry;

pub mod build_file;
pub mod file_reference;
pub mod group;
pub mod sources_phase;

/// A text substitution over one section of the project document
pub trait SectionPass: Send + Sync {
    /// Section name used in logs and errors (e.g., "PBXFileReference")
    fn section(&self) -> &'static str;

    /// Regex matching the anchor text the new lines follow.
    ///
    /// Every literal taken from `anchors` must be escaped.
    fn anchor_pattern(&self, anchors: &AnchorSet) -> String;

    /// Render the line inserted for one file, without a trailing newline
    fn render(&self, planned: &PlannedEntry) -> String;
}

/// The four passes in the order they run
pub fn all_passes() -> [&'static dyn SectionPass; 4] {
    [
        &file_reference::FileReferencePass,
        &build_file::BuildFilePass,
        &group::GroupPass,
        &sources_phase::SourcesPhasePass,
    ]
}

/// Apply a pass to `content`, returning the edited text.
///
/// Every anchor match is followed by a newline and the rendered lines. When
/// the anchor is absent the text comes back unchanged; this is not an error.
pub fn apply_pass(
    pass: &dyn SectionPass,
    content: &str,
    entries: &[PlannedEntry],
    anchors: &AnchorSet,
) -> Result<String, PatchError> {
    let pattern = Regex::new(&pass.anchor_pattern(anchors)).map_err(|source| {
        PatchError::Pattern {
            section: pass.section(),
            source,
        }
    })?;

    if entries.is_empty() {
        return Ok(content.to_string());
    }

    let insertion = entries
        .iter()
        .map(|planned| pass.render(planned))
        .collect::<Vec<_>>()
        .join("\n");

    let matches = pattern.find_iter(content).count();
    tracing::debug!(
        "{} pass: {} anchor match(es), {} line(s) each",
        pass.section(),
        matches,
        entries.len()
    );

    // A closure replacer keeps `$` in file names from being read as a group reference
    let patched = pattern.replace_all(content, |caps: &Captures| {
        format!("{}\n{}", &caps[0], insertion)
    });
    Ok(patched.into_owned())
}
