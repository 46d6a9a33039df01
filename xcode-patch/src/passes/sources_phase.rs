//! `PBXSourcesBuildPhase` file lists

use regex::escape;

use super::SectionPass;
use crate::config::AnchorSet;
use crate::file_entry::PlannedEntry;

/// Lists each build file in the target's Sources phase after the anchor's build file
#[derive(Debug, Default)]
pub struct SourcesPhasePass;

impl SectionPass for SourcesPhasePass {
    fn section(&self) -> &'static str {
        "PBXSourcesBuildPhase"
    }

    fn anchor_pattern(&self, anchors: &AnchorSet) -> String {
        format!(
            r"{} /\* Sources \*/ = \{{[^}}]+files = \(\s+{} /\* {} in Sources \*/,",
            escape(&anchors.sources_phase_id),
            escape(&anchors.build_file_id),
            escape(&anchors.file_name)
        )
    }

    fn render(&self, planned: &PlannedEntry) -> String {
        format!(
            "\t\t\t\t{} /* {} in Sources */,",
            planned.ids.build_file, planned.entry.name
        )
    }
}
