//! Source files to add and the identifiers minted for them

use serde::{Deserialize, Serialize};

use crate::identifier::generate_identifier;

/// A source file to register in the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name as shown in the navigator (e.g., "KakaoMapView.swift")
    pub name: String,
    /// Path relative to the project's group root
    pub path: String,
    /// Xcode `lastKnownFileType` (e.g., "sourcecode.swift")
    pub file_type: String,
}

impl FileEntry {
    pub fn new(name: &str, path: &str, file_type: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            file_type: file_type.to_string(),
        }
    }

    /// The native KakaoMap view bridge for the Petmily app
    pub fn kakao_map_defaults() -> Vec<Self> {
        vec![
            Self::new(
                "KakaoMapView.swift",
                "Petmily/KakaoMapView.swift",
                "sourcecode.swift",
            ),
            Self::new(
                "KakaoMapViewManager.swift",
                "Petmily/KakaoMapViewManager.swift",
                "sourcecode.swift",
            ),
            Self::new(
                "KakaoMapViewManager.m",
                "Petmily/KakaoMapViewManager.m",
                "sourcecode.c.objc",
            ),
        ]
    }
}

/// Object ids for one file: its reference record and its build record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPair {
    pub file_ref: String,
    pub build_file: String,
}

impl IdentifierPair {
    pub fn generate() -> Self {
        Self {
            file_ref: generate_identifier(),
            build_file: generate_identifier(),
        }
    }
}

/// A file entry together with the ids it will be written under
#[derive(Debug, Clone)]
pub struct PlannedEntry {
    pub entry: FileEntry,
    pub ids: IdentifierPair,
}

impl PlannedEntry {
    pub fn new(entry: FileEntry, ids: IdentifierPair) -> Self {
        Self { entry, ids }
    }

    /// Mint fresh ids for every entry. Ids are never reused across runs.
    pub fn plan(entries: &[FileEntry]) -> Vec<Self> {
        entries
            .iter()
            .map(|entry| Self::new(entry.clone(), IdentifierPair::generate()))
            .collect()
    }
}
