//! Error types for Shipyard
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::services::DestinationViolation;

/// Result type alias for Shipyard operations
pub type ShipyardResult<T> = Result<T, ShipyardError>;

/// Main error type for Shipyard operations
#[derive(Error, Debug)]
pub enum ShipyardError {
    /// Inline `path`/`credentials` given alongside `destinations.default`
    #[error("cannot configure both an implicit and explicit default destination")]
    ConflictingDefaultDestination,

    /// Inline form with only one of `path` and `credentials`
    #[error(
        "cannot configure an implicit default destination without both path and credentials"
    )]
    IncompleteImplicitDestination,

    /// Structural violation raised in strict mode
    #[error("{0}")]
    InvalidDestination(DestinationViolation),

    /// Nothing to validate
    #[error("No destinations present")]
    NoDestinations,

    /// Active destination name has no entry in the destination set
    #[error("No destination {name} present")]
    DestinationNotFound { name: String },

    /// A destination selected explicitly on the command line or in config is missing
    #[error("Destination '{name}' does not exist.")]
    UnknownDestination { name: String },

    /// The implicit `default` destination is missing
    #[error("Default destination does not exist.")]
    MissingDefaultDestination,

    /// No storage backend for the configured provider
    #[error("provider '{provider}' for destination {destination} is not supported")]
    UnsupportedProvider {
        provider: String,
        destination: String,
    },

    /// Provider-specific credential key is absent
    #[error("destination {destination} is missing credential '{key}'")]
    MissingCredential { destination: String, key: String },

    /// Release artifacts cannot be named without a timestamp
    #[error("timestamp required for '{command}'")]
    MissingTimestamp { command: String },

    /// Storage capability failure, propagated unchanged
    #[error(transparent)]
    Transfer(#[from] StoreError),

    /// Local artifact could not be read for upload
    #[error("failed to read artifact {path}: {source}")]
    ReadArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Downloaded artifact could not be written locally
    #[error("failed to write artifact {path}: {source}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
