//! Patch workflow: load, detect already-present files, run the passes, save

use std::path::PathBuf;

use crate::config::{AnchorSet, Config};
use crate::document::ProjectDocument;
use crate::error::PatchError;
use crate::file_entry::PlannedEntry;
use crate::passes::{all_passes, apply_pass};

/// Result of a patch run that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The document was rewritten
    Patched {
        /// Names that were already in the document before patching.
        /// They were inserted again regardless.
        already_present: Vec<String>,
        /// Names of every file the passes inserted
        added: Vec<String>,
    },
    /// The project file does not exist; nothing was read or written
    ProjectNotFound(PathBuf),
}

/// Run every section pass over `content` in order.
///
/// Each pass sees the output of the previous one. Passes whose anchor is
/// missing leave the text as it is.
pub fn patch_content(
    content: &str,
    entries: &[PlannedEntry],
    anchors: &AnchorSet,
) -> Result<String, PatchError> {
    let mut patched = content.to_string();
    for pass in all_passes() {
        patched = apply_pass(pass, &patched, entries, anchors)?;
    }
    Ok(patched)
}

pub struct Patcher {
    config: Config,
}

impl Patcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Patch the configured project file in place.
    ///
    /// Files already named in the document only produce a warning; the
    /// passes still run, so patching the same file twice duplicates entries.
    pub fn run(&self) -> Result<PatchOutcome, PatchError> {
        let path = &self.config.project;
        if !path.exists() {
            tracing::warn!("Project file not found: {}", path.display());
            return Ok(PatchOutcome::ProjectNotFound(path.clone()));
        }

        let mut document = ProjectDocument::load(path)?;

        let already_present =
            document.already_present(self.config.files.iter().map(|f| f.name.as_str()));
        for name in &already_present {
            tracing::warn!("{} is already referenced in {}", name, path.display());
        }

        let entries = PlannedEntry::plan(&self.config.files);
        document.content = patch_content(&document.content, &entries, &self.config.anchors)?;
        document.save()?;

        Ok(PatchOutcome::Patched {
            already_present,
            added: self.config.files.iter().map(|f| f.name.clone()).collect(),
        })
    }
}
