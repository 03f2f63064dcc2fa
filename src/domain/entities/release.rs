//! Release entity - names the artifacts produced by one packaging run.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Artifact, ArtifactSet};
use crate::error::{ShipyardError, ShipyardResult};

/// Package format used when none is configured.
pub const DEFAULT_PACKAGE_FORMAT: &str = "tar.bz2";

/// A project release identified by name and timestamp.
///
/// Artifact file names are derived as:
/// - metadata: `{work_path}/{name}-{timestamp}-release-metadata.json`
/// - packages: `{work_path}/{name}-{timestamp}.{format}`
/// - hashref marker: `{name}-{timestamp}-release-hashref.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    name: String,
    timestamp: Option<String>,
    work_path: PathBuf,
    package_formats: Vec<String>,
}

impl Release {
    pub fn new(name: impl Into<String>, work_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            timestamp: None,
            work_path: work_path.into(),
            package_formats: vec![DEFAULT_PACKAGE_FORMAT.to_string()],
        }
    }

    pub fn with_timestamp(mut self, timestamp: Option<String>) -> Self {
        self.timestamp = timestamp.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_package_formats(mut self, formats: Vec<String>) -> Self {
        self.package_formats = formats;
        self
    }

    /// Project name, used to filter remote listings
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn work_path(&self) -> &Path {
        &self.work_path
    }

    /// `{name}-{timestamp}`, if a timestamp is known
    pub fn final_name(&self) -> Option<String> {
        self.timestamp
            .as_ref()
            .map(|ts| format!("{}-{}", self.name, ts))
    }

    /// Build the artifact set for `command`, which needs a timestamp
    pub fn artifacts(&self, command: &str) -> ShipyardResult<ArtifactSet> {
        let final_name = self
            .final_name()
            .ok_or_else(|| ShipyardError::MissingTimestamp {
                command: command.to_string(),
            })?;

        let metadata = Artifact::new(
            self.work_path
                .join(format!("{}-release-metadata.json", final_name)),
        );
        let packages = self
            .package_formats
            .iter()
            .map(|format| Artifact::new(self.work_path.join(format!("{}.{}", final_name, format))))
            .collect();
        let hashref = Artifact::new(format!("{}-release-hashref.txt", final_name));

        Ok(ArtifactSet::new(metadata, packages, hashref))
    }
}
