//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::TransferUseCase;
use crate::domain::services::ResolvedRemote;
use crate::infrastructure::ProviderConnector;

/// Type alias for the TransferUseCase backed by the built-in providers
pub type ConcreteTransferUseCase = TransferUseCase<ProviderConnector>;

/// Create a transfer use case that connects through [`ProviderConnector`]
pub fn create_transfer_use_case(
    remote: ResolvedRemote,
    project_name: impl Into<String>,
) -> ConcreteTransferUseCase {
    TransferUseCase::new(remote, project_name, ProviderConnector::new())
}
