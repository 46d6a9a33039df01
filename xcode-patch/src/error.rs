//! Error types for the patcher

use std::path::PathBuf;

/// Errors raised while patching a project file.
///
/// A missing project file is not one of them: it is reported through
/// [`crate::patcher::PatchOutcome::ProjectNotFound`].
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("failed to read project file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write project file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid anchor pattern for {section}")]
    Pattern {
        section: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
