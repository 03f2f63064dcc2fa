//! Connector Port
//!
//! Opens the object store for a validated destination. Connection is deferred
//! until configuration checks have passed, so a store is only ever built from
//! credentials that are known to be complete.

use crate::domain::entities::Destination;
use crate::domain::ports::ObjectStore;
use crate::error::ShipyardResult;

/// Builds an [`ObjectStore`] for a destination
///
/// Implementations:
/// - `ProviderConnector` - picks a backend from `credentials.provider`
/// - `MemoryStore` - hands out clones of a shared in-memory store
pub trait Connector {
    fn connect(&self, destination: &Destination) -> ShipyardResult<Box<dyn ObjectStore>>;
}
