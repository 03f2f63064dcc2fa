//! Transfer Use Case
//!
//! Runs put/get/list/delete batches against the active destination:
//! 1. Check configuration (warn about incomplete destinations, require the
//!    active one)
//! 2. Connect to the destination's store
//! 3. Process artifacts one at a time in artifact-set order
//!
//! Batches are not transactional. The first failing call aborts the batch and
//! its error is returned unchanged; artifacts already processed stay as they are.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::entities::Destination;
use crate::domain::ports::{Connector, ObjectStore, Reporter};
use crate::domain::services::{require_destination, validate_all, DestinationViolation, ResolvedRemote};
use crate::domain::value_objects::{Artifact, ArtifactSet};
use crate::error::{ShipyardError, ShipyardResult};

use super::result::TransferReport;

/// Transfer use case - moves release artifacts to and from a destination
pub struct TransferUseCase<C>
where
    C: Connector,
{
    remote: ResolvedRemote,
    project_name: String,
    connector: C,
}

impl<C> TransferUseCase<C>
where
    C: Connector,
{
    pub fn new(remote: ResolvedRemote, project_name: impl Into<String>, connector: C) -> Self {
        Self {
            remote,
            project_name: project_name.into(),
            connector,
        }
    }

    pub fn remote(&self) -> &ResolvedRemote {
        &self.remote
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Validate every configured destination (warnings only), then, if
    /// `require_destination` is set, require that the active one exists.
    pub fn check_config(
        &self,
        require: bool,
        reporter: &mut dyn Reporter,
    ) -> ShipyardResult<Option<&Destination>> {
        validate_all(self.remote.destinations(), reporter)?;

        let active = self.remote.active();
        if require {
            require_destination(self.remote.active_name(), active).map(Some)
        } else {
            Ok(active)
        }
    }

    /// Upload the release metadata, then each package.
    pub fn put(
        &self,
        artifacts: &ArtifactSet,
        reporter: &mut dyn Reporter,
    ) -> ShipyardResult<TransferReport> {
        let (destination, bucket, store) = self.open(reporter)?;
        reporter.progress(&format!("Uploading to {}...", destination.name()));

        let mut report = TransferReport::new(destination.name());
        for artifact in artifacts.transfer_order() {
            let key = artifact.key();
            reporter.progress(&format!("...put {}", key));

            let bytes = std::fs::read(artifact.path()).map_err(|source| {
                ShipyardError::ReadArtifact {
                    path: artifact.path().to_path_buf(),
                    source,
                }
            })?;
            debug!(bucket, key = %key, size = bytes.len(), "put");
            store.put(bucket, &key, &bytes)?;
            report.keys.push(key);
        }
        Ok(report)
    }

    /// Download the release metadata, then each package, into `local_path`.
    pub fn get(
        &self,
        local_path: &Path,
        artifacts: &ArtifactSet,
        reporter: &mut dyn Reporter,
    ) -> ShipyardResult<TransferReport> {
        let (destination, bucket, store) = self.open(reporter)?;
        reporter.progress(&format!(
            "Downloading from {} to {}...",
            destination.name(),
            local_path.display()
        ));

        let mut report = TransferReport::new(destination.name());
        for artifact in artifacts.transfer_order() {
            let key = artifact.key();
            reporter.progress(&format!("...get {}", key));

            let bytes = store.get(bucket, &key)?;
            debug!(bucket, key = %key, size = bytes.len(), "get");
            write_local(local_path, &key, &bytes)?;
            report.keys.push(key);
        }
        Ok(report)
    }

    /// List keys at the destination.
    ///
    /// Unless `show_all` is set, only keys containing the project name
    /// (anywhere in the key) are kept. Listing order is preserved.
    pub fn list(&self, show_all: bool, reporter: &mut dyn Reporter) -> ShipyardResult<Vec<String>> {
        let (destination, bucket, store) = self.open(reporter)?;
        reporter.progress(&format!("Showing packages in {}...", destination.name()));

        let keys: Vec<String> = store
            .list(bucket)?
            .into_iter()
            .filter(|key| show_all || key.contains(self.project_name.as_str()))
            .collect();
        debug!(bucket, shown = keys.len(), show_all, "list");

        for key in &keys {
            reporter.output(key);
        }
        Ok(keys)
    }

    /// Remove the hashref marker, the release metadata, then each package.
    pub fn delete(
        &self,
        artifacts: &ArtifactSet,
        reporter: &mut dyn Reporter,
    ) -> ShipyardResult<TransferReport> {
        let (destination, bucket, store) = self.open(reporter)?;
        reporter.progress(&format!("Removing packages from {}...", destination.name()));

        let mut report = TransferReport::new(destination.name());
        for artifact in artifacts.removal_order() {
            let key = artifact.key();
            reporter.progress(&format!("...delete {}", key));

            debug!(bucket, key = %key, "delete");
            store.delete(bucket, &key)?;
            report.keys.push(key);
        }
        Ok(report)
    }

    /// Run the required-destination check and connect to its store.
    fn open(
        &self,
        reporter: &mut dyn Reporter,
    ) -> ShipyardResult<(&Destination, &str, Box<dyn ObjectStore>)> {
        let destination = self
            .check_config(true, reporter)?
            .ok_or_else(|| ShipyardError::DestinationNotFound {
                name: self.remote.active_name().to_string(),
            })?;
        let bucket = destination.path().ok_or_else(|| {
            ShipyardError::InvalidDestination(DestinationViolation::MissingPath {
                destination: destination.name().to_string(),
            })
        })?;
        let store = self.connector.connect(destination)?;
        Ok((destination, bucket, store))
    }
}

/// Write `bytes` to `dir/key`, replacing any existing file atomically
fn write_local(dir: &Path, key: &str, bytes: &[u8]) -> ShipyardResult<()> {
    let target = Artifact::new(dir.join(key));
    let write_error = |source: std::io::Error| ShipyardError::WriteArtifact {
        path: target.path().to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(write_error)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(bytes).map_err(write_error)?;
    tmp.persist(target.path())
        .map_err(|e| write_error(e.error))?;
    Ok(())
}
