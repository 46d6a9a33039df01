//! `PBXFileReference` records

use regex::escape;

use super::SectionPass;
use crate::config::AnchorSet;
use crate::file_entry::PlannedEntry;

/// Adds one file reference record per file after the anchor's own record
#[derive(Debug, Default)]
pub struct FileReferencePass;

impl SectionPass for FileReferencePass {
    fn section(&self) -> &'static str {
        "PBXFileReference"
    }

    fn anchor_pattern(&self, anchors: &AnchorSet) -> String {
        format!(
            r"{} /\* {} \*/ = \{{isa = PBXFileReference;[^}}]*\}};",
            escape(&anchors.file_ref_id),
            escape(&anchors.file_name)
        )
    }

    fn render(&self, planned: &PlannedEntry) -> String {
        let entry = &planned.entry;
        format!(
            "\t\t{} /* {} */ = {{isa = PBXFileReference; lastKnownFileType = {}; name = \"{}\"; path = \"{}\"; sourceTree = \"<group>\"; }};",
            planned.ids.file_ref, entry.name, entry.file_type, entry.name, entry.path
        )
    }
}
