//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions (`Cli`, `Commands`)
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering helpers

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_transfer_use_case, ConcreteTransferUseCase};
