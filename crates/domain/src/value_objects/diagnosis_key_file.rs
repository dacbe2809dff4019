//! Diagnosis key file reference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Reference to an externally supplied diagnosis key file
///
/// Only the location is held. The file is never opened, persisted or
/// modified by this type; it is verified once and then either submitted or
/// discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosisKeyFile(PathBuf);

impl DiagnosisKeyFile {
    /// Wrap a file location
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Location of the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Consume and return the location
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for DiagnosisKeyFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for DiagnosisKeyFile {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for DiagnosisKeyFile {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl AsRef<Path> for DiagnosisKeyFile {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
