//! Terminal concerns of the binary: error rendering and log setup.

pub mod error;
pub mod logging;
