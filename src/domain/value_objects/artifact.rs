//! Release artifact value objects.

use std::path::{Path, PathBuf};

/// A local release file and its remote key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remote object key: the base file name, never any directory component
    pub fn key(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// The fixed set of files transferred as a unit.
///
/// Transfer order is the release metadata first, then each package in the
/// order given. The hashref marker is only touched on removal, where it goes
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    metadata: Artifact,
    packages: Vec<Artifact>,
    hashref: Artifact,
}

impl ArtifactSet {
    pub fn new(metadata: Artifact, packages: Vec<Artifact>, hashref: Artifact) -> Self {
        Self {
            metadata,
            packages,
            hashref,
        }
    }

    pub fn metadata(&self) -> &Artifact {
        &self.metadata
    }

    pub fn packages(&self) -> &[Artifact] {
        &self.packages
    }

    pub fn hashref(&self) -> &Artifact {
        &self.hashref
    }

    /// Artifacts uploaded by put and fetched by get
    pub fn transfer_order(&self) -> impl Iterator<Item = &Artifact> {
        std::iter::once(&self.metadata).chain(self.packages.iter())
    }

    /// Artifacts removed by delete
    pub fn removal_order(&self) -> impl Iterator<Item = &Artifact> {
        std::iter::once(&self.hashref).chain(self.transfer_order())
    }
}
