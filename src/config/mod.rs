//! Configuration module for Shipyard
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHIPYARD_*)
//! 3. Config file (`--config`, project files, then user config directory)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{find_config_file, with_overrides_from};
pub use types::{
    Config, DestinationConfig, OutputConfig, PluginsConfig, RemoteConfig, Verbosity,
};
