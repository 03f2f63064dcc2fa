//! Transfer Result
//!
//! Result types for transfer operations.

use serde::Serialize;

/// Keys processed by a put, get or delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    /// Destination the batch ran against
    pub destination: String,
    /// Object keys, in the order they were processed
    pub keys: Vec<String>,
}

impl TransferReport {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            keys: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
