//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: object stores, the
//! provider connector and reporters.

pub mod reporter;
pub mod store;

pub use reporter::{ConsoleReporter, MemoryReporter, ReportEvent};
pub use store::{LocalStore, MemoryStore, ProviderConnector, StoreCall, LOCAL_ROOT_KEY};
