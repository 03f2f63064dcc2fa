//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod connector;
pub mod object_store;
pub mod reporter;

pub use connector::Connector;
pub use object_store::{ObjectStore, StoreError, StoreResult};
pub use reporter::Reporter;
