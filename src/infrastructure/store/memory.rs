//! In-memory object store
//!
//! Buckets keep keys in insertion order, so listings come back in the order
//! objects were first written. Clones share the same contents, which lets a
//! test hold one handle while the orchestrator uses another.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::entities::Destination;
use crate::domain::ports::{Connector, ObjectStore, StoreError, StoreResult};
use crate::error::ShipyardResult;

/// A call made against a [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Put { bucket: String, key: String },
    Get { bucket: String, key: String },
    List { bucket: String },
    Delete { bucket: String, key: String },
}

#[derive(Debug, Default)]
struct Inner {
    buckets: BTreeMap<String, Vec<(String, Vec<u8>)>>,
    calls: Vec<StoreCall>,
    fail_on: Option<String>,
}

/// Shared in-memory object store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bucket
    pub fn with_bucket(self, bucket: impl Into<String>) -> Self {
        self.lock().buckets.entry(bucket.into()).or_default();
        self
    }

    /// Seed an object without recording a call
    pub fn with_object(self, bucket: &str, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        {
            let mut inner = self.lock();
            let objects = inner.buckets.entry(bucket.to_string()).or_default();
            upsert(objects, key, bytes.into());
        }
        self
    }

    /// Make every operation on `key` fail with a backend error
    pub fn failing_on(self, key: impl Into<String>) -> Self {
        self.lock().fail_on = Some(key.into());
        self
    }

    /// Calls made so far, oldest first
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Current contents of an object
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.lock()
            .buckets
            .get(bucket)
            .and_then(|objects| objects.iter().find(|(k, _)| k == key))
            .map(|(_, bytes)| bytes.clone())
    }

    /// Keys in a bucket, in insertion order
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.lock()
            .buckets
            .get(bucket)
            .map(|objects| objects.iter().map(|(k, _)| k.clone()).collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn check_failure(&self, key: &str) -> StoreResult<()> {
        match &self.fail_on {
            Some(failing) if failing == key => {
                Err(StoreError::Backend(format!("injected failure for '{}'", key)))
            }
            _ => Ok(()),
        }
    }

    fn bucket_mut(&mut self, bucket: &str) -> StoreResult<&mut Vec<(String, Vec<u8>)>> {
        self.buckets
            .get_mut(bucket)
            .ok_or_else(|| StoreError::BucketNotFound {
                bucket: bucket.to_string(),
            })
    }
}

fn upsert(objects: &mut Vec<(String, Vec<u8>)>, key: &str, bytes: Vec<u8>) {
    match objects.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 = bytes,
        None => objects.push((key.to_string(), bytes)),
    }
}

impl ObjectStore for MemoryStore {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Put {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        inner.check_failure(key)?;
        upsert(inner.bucket_mut(bucket)?, key, bytes.to_vec());
        Ok(())
    }

    fn get(&self, bucket: &str, key: &str) -> StoreResult<Vec<u8>> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Get {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        inner.check_failure(key)?;
        let objects = inner.bucket_mut(bucket)?;
        objects
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| StoreError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    fn list(&self, bucket: &str) -> StoreResult<Vec<String>> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::List {
            bucket: bucket.to_string(),
        });
        let objects = inner.bucket_mut(bucket)?;
        Ok(objects.iter().map(|(k, _)| k.clone()).collect())
    }

    fn delete(&self, bucket: &str, key: &str) -> StoreResult<()> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Delete {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        inner.check_failure(key)?;
        let objects = inner.bucket_mut(bucket)?;
        let index = objects
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(|| StoreError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })?;
        objects.remove(index);
        Ok(())
    }
}

impl Connector for MemoryStore {
    fn connect(&self, _destination: &Destination) -> ShipyardResult<Box<dyn ObjectStore>> {
        Ok(Box::new(self.clone()))
    }
}
