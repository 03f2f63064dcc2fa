//! Shipyard - release package transfer for remote storage
//!
//! Shipyard uploads, downloads, lists and removes the packages and release
//! metadata produced by a build, against a named destination from the
//! project configuration.
//!
//! Destinations can be configured inline (legacy) or under `destinations`;
//! [`ResolvedRemote`] reconciles both shapes before anything else runs.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{TransferReport, TransferUseCase};
pub use config::{Config, ConfigWarning, RemoteConfig, Verbosity};
pub use domain::entities::{Destination, DestinationSet, Release};
pub use domain::ports::{Connector, ObjectStore, Reporter, StoreError};
pub use domain::services::{ResolvedRemote, ViolationMode};
pub use error::{ShipyardError, ShipyardResult};
pub use infrastructure::{ConsoleReporter, LocalStore, MemoryReporter, MemoryStore, ProviderConnector};
