//! Local filesystem object store
//!
//! Buckets are directories directly under a root directory and objects are
//! plain files inside them. The bucket must already exist; Shipyard never
//! creates the target path.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::trace;

use crate::domain::ports::{ObjectStore, StoreError, StoreResult};

/// Object store backed by a directory tree
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bucket_dir(&self, bucket: &str) -> StoreResult<PathBuf> {
        let dir = self.root.join(bucket);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(StoreError::BucketNotFound {
                bucket: bucket.to_string(),
            })
        }
    }

    fn object_path(&self, bucket: &str, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.bucket_dir(bucket)?.join(key))
    }
}

/// Keys are single path components
fn validate_key(key: &str) -> StoreResult<()> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains('/')
        || key.contains('\\');
    if invalid {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

fn io_error(bucket: &str, key: &str, source: std::io::Error) -> StoreError {
    if source.kind() == ErrorKind::NotFound {
        StoreError::ObjectNotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    } else {
        StoreError::Io {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        }
    }
}

impl ObjectStore for LocalStore {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let path = self.object_path(bucket, key)?;
        let dir = self.bucket_dir(bucket)?;
        trace!(path = %path.display(), size = bytes.len(), "local put");

        // Write beside the target and rename so readers never see partial objects
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| io_error(bucket, key, e))?;
        tmp.write_all(bytes).map_err(|e| io_error(bucket, key, e))?;
        tmp.persist(&path)
            .map_err(|e| io_error(bucket, key, e.error))?;
        Ok(())
    }

    fn get(&self, bucket: &str, key: &str) -> StoreResult<Vec<u8>> {
        let path = self.object_path(bucket, key)?;
        trace!(path = %path.display(), "local get");
        fs::read(&path).map_err(|e| io_error(bucket, key, e))
    }

    fn list(&self, bucket: &str) -> StoreResult<Vec<String>> {
        let dir = self.bucket_dir(bucket)?;
        let entries = fs::read_dir(&dir).map_err(|e| io_error(bucket, "", e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(bucket, "", e))?;
            let is_file = entry
                .file_type()
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // In-flight temp files from `put`
            if name.starts_with(".tmp") {
                continue;
            }
            keys.push(name);
        }
        keys.sort();
        Ok(keys)
    }

    fn delete(&self, bucket: &str, key: &str) -> StoreResult<()> {
        let path = self.object_path(bucket, key)?;
        trace!(path = %path.display(), "local delete");
        fs::remove_file(&path).map_err(|e| io_error(bucket, key, e))
    }
}
