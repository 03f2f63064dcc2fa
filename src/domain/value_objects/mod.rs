//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact;
mod config_warning;
mod credentials;

pub use artifact::{Artifact, ArtifactSet};
pub use config_warning::ConfigWarning;
pub use credentials::{Credentials, PROVIDER_KEY};
