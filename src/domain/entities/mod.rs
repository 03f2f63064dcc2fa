//! Domain Entities
//!
//! - `Destination` / `DestinationSet` - configured remote locations
//! - `Release` - names the artifacts of one packaging run

mod destination;
mod release;

pub use destination::{Destination, DestinationSet};
pub use release::{Release, DEFAULT_PACKAGE_FORMAT};
