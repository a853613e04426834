//! Export error taxonomy.
//!
//! Three failure classes, none of which is caught or retried anywhere:
//! every variant aborts the run and leaves whatever was already written in
//! place.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A fatal export failure.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Directory removal/creation, payload copy, or metadata write failed.
    #[error("filesystem operation failed on `{path}`")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An expected prebuilt package directory is absent. The tool assumes
    /// every declared package was built for every declared architecture.
    #[error("prebuilt package `{package}` for `{arch}` not found: missing `{path}`")]
    SourceNotFound {
        package: String,
        arch: String,
        path: PathBuf,
    },

    /// The archive could not be produced.
    #[error("failed to build archive `{path}`: {message}")]
    Archive { path: PathBuf, message: String },
}

impl ExportError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExportError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn source_not_found(package: &str, arch: &str, path: &Path) -> Self {
        ExportError::SourceNotFound {
            package: package.to_string(),
            arch: arch.to_string(),
            path: path.to_path_buf(),
        }
    }
}
