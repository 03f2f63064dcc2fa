//! Domain Layer
//!
//! The core of Shipyard - destination resolution and validation without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Destination, DestinationSet, Release
//! - `value_objects/` - Credentials, Artifact, ArtifactSet, ConfigWarning
//! - `services/` - Resolver and validator
//! - `ports/` - ObjectStore, Connector and Reporter traits
//!
//! All storage and terminal access goes through the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
