//! Configuration management for xcode-patch

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PatchError;
use crate::file_entry::FileEntry;

/// Project file patched when neither the command line nor the config names one
pub const DEFAULT_PROJECT_PATH: &str = "ios/Petmily.xcodeproj/project.pbxproj";

/// Patcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the `project.pbxproj` to patch
    pub project: PathBuf,
    /// Source files to add to the project
    pub files: Vec<FileEntry>,
    /// Existing records the new entries are inserted after
    pub anchors: AnchorSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: PathBuf::from(DEFAULT_PROJECT_PATH),
            files: FileEntry::kakao_map_defaults(),
            anchors: AnchorSet::default(),
        }
    }
}

/// Literal identifiers of the pre-existing records every pass keys on.
///
/// All of them belong to the `AppDelegate.swift` source file of the app
/// target, which is assumed to be present in any project being patched.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnchorSet {
    /// Object id of the anchor's `PBXFileReference` record
    pub file_ref_id: String,
    /// Object id of the anchor's `PBXBuildFile` record
    pub build_file_id: String,
    /// File name shown in the anchor's comments
    pub file_name: String,
    /// Object id of the `PBXGroup` holding the anchor
    pub group_id: String,
    /// Display name of that group
    pub group_name: String,
    /// Object id of the target's `PBXSourcesBuildPhase`
    pub sources_phase_id: String,
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self {
            file_ref_id: "F11748412D0307B40044C1D9".to_string(),
            build_file_id: "F11748422D0307B40044C1D9".to_string(),
            file_name: "AppDelegate.swift".to_string(),
            group_id: "13B07FAE1A68108700A75B9A".to_string(),
            group_name: "Petmily".to_string(),
            sources_phase_id: "13B07F871A680F5B00A75B9A".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let content = std::fs::read_to_string(path).map_err(|source| PatchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| PatchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Replace the project path when one was given on the command line
    pub fn with_project_override(mut self, project: Option<PathBuf>) -> Self {
        if let Some(project) = project {
            self.project = project;
        }
        self
    }
}
