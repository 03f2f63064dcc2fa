//! Object store implementations and provider selection.

mod local;
mod memory;

pub use local::LocalStore;
pub use memory::{MemoryStore, StoreCall};

use tracing::debug;

use crate::domain::entities::Destination;
use crate::domain::ports::{Connector, ObjectStore};
use crate::error::{ShipyardError, ShipyardResult};

/// Credential key holding the root directory of the `local` provider.
pub const LOCAL_ROOT_KEY: &str = "local_root";

/// Opens a store according to the destination's `provider` credential.
///
/// | provider | backend      | required credentials |
/// |----------|--------------|----------------------|
/// | `local`  | [`LocalStore`] | `local_root`       |
///
/// Provider names are matched case-insensitively. Network providers are
/// not built in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderConnector;

impl ProviderConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connector for ProviderConnector {
    fn connect(&self, destination: &Destination) -> ShipyardResult<Box<dyn ObjectStore>> {
        let provider = destination.provider().unwrap_or_default();

        match provider.to_ascii_lowercase().as_str() {
            "local" => {
                let root = destination
                    .credentials()
                    .get(LOCAL_ROOT_KEY)
                    .filter(|r| !r.trim().is_empty())
                    .ok_or_else(|| ShipyardError::MissingCredential {
                        destination: destination.name().to_string(),
                        key: LOCAL_ROOT_KEY.to_string(),
                    })?;
                debug!(destination = destination.name(), root, "opening local store");
                Ok(Box::new(LocalStore::new(root)))
            }
            _ => Err(ShipyardError::UnsupportedProvider {
                provider: provider.to_string(),
                destination: destination.name().to_string(),
            }),
        }
    }
}
