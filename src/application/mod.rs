//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TransferUseCase` - Checks destination configuration and moves release
//!   artifacts (put, get, list, delete)

pub mod transfer;

pub use transfer::{TransferReport, TransferUseCase};
