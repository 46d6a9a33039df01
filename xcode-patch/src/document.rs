//! Project document state and persistence
//!
//! The whole `project.pbxproj` is held as one text buffer. No structural
//! model is built; the section passes edit the text directly.

use std::path::{Path, PathBuf};

use crate::error::PatchError;

pub struct ProjectDocument {
    pub path: PathBuf,
    pub content: String,
}

impl ProjectDocument {
    /// Read the full document. Invalid UTF-8 is reported as a read error.
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let content = std::fs::read_to_string(path).map_err(|source| PatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Read {} ({} bytes)", path.display(), content.len());
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Names of the given files that already appear somewhere in the text
    pub fn already_present<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        names
            .into_iter()
            .filter(|name| self.content.contains(name))
            .map(str::to_string)
            .collect()
    }

    /// Overwrite the file in place with the current buffer
    pub fn save(&self) -> Result<(), PatchError> {
        std::fs::write(&self.path, &self.content).map_err(|source| PatchError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("Wrote {} ({} bytes)", self.path.display(), self.content.len());
        Ok(())
    }
}
