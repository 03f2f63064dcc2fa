//! Object Store Port
//!
//! Abstracts the remote object storage used for release artifacts. The
//! orchestrator only ever needs whole-object put/get, a bucket listing and
//! delete; authentication, HTTP and SDK-level retries belong to implementations.

use thiserror::Error;

/// Result type for object store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Object store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The bucket (destination path) does not exist
    #[error("bucket '{bucket}' does not exist")]
    BucketNotFound { bucket: String },

    /// No object under the given key
    #[error("object '{key}' not found in bucket '{bucket}'")]
    ObjectNotFound { bucket: String, key: String },

    /// Key is not a plain object name
    #[error("invalid object key '{key}'")]
    InvalidKey { key: String },

    /// I/O error from a filesystem-backed store
    #[error("I/O error on '{key}' in bucket '{bucket}': {source}")]
    Io {
        bucket: String,
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other backend failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Whole-object storage capability
///
/// Implementations:
/// - `LocalStore` - directories on the local filesystem
/// - `MemoryStore` - in-memory, for tests and embedding
pub trait ObjectStore {
    /// Store `bytes` under `key`, replacing any existing object
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> StoreResult<()>;

    /// Fetch the full contents stored under `key`
    fn get(&self, bucket: &str, key: &str) -> StoreResult<Vec<u8>>;

    /// List every key in the bucket, in the store's native order
    fn list(&self, bucket: &str) -> StoreResult<Vec<String>>;

    /// Remove the object stored under `key`
    fn delete(&self, bucket: &str, key: &str) -> StoreResult<()>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for Box<S> {
    fn put(&self, bucket: &str, key: &str, bytes: &[u8]) -> StoreResult<()> {
        (**self).put(bucket, key, bytes)
    }

    fn get(&self, bucket: &str, key: &str) -> StoreResult<Vec<u8>> {
        (**self).get(bucket, key)
    }

    fn list(&self, bucket: &str) -> StoreResult<Vec<String>> {
        (**self).list(bucket)
    }

    fn delete(&self, bucket: &str, key: &str) -> StoreResult<()> {
        (**self).delete(bucket, key)
    }
}
