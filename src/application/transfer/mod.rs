//! Transfer Module
//!
//! Moves a release's artifacts between the local work directory and the
//! active destination.
//!
//! ## Structure
//!
//! - `result` - Result types (`TransferReport`)
//! - `use_case` - Core use case logic (`TransferUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use shipyard::application::transfer::TransferUseCase;
//!
//! let use_case = TransferUseCase::new(remote, "my-app", ProviderConnector::new());
//! let report = use_case.put(&release.artifacts("put")?, &mut reporter)?;
//! ```

mod result;
mod use_case;

pub use result::TransferReport;
pub use use_case::TransferUseCase;
