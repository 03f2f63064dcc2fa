//! Configuration types

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{Release, DEFAULT_PACKAGE_FORMAT};
use crate::domain::value_objects::Credentials;
use crate::error::ShipyardResult;

use super::loader;
use super::ConfigWarning;

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// One entry under `destinations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

/// The `plugins.remote` section.
///
/// `path` and `credentials` are the legacy inline form of the default
/// destination; after resolution they are always `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Name of the destination to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<BTreeMap<String, DestinationConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

/// Plug-in sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginsConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project name; defaults to the root directory name
    #[serde(default)]
    pub name: Option<String>,

    /// Release timestamp baked into artifact names
    #[serde(default, deserialize_with = "scalar_string")]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub root_path: Option<PathBuf>,

    /// Package formats, in transfer order
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            timestamp: None,
            root_path: None,
            packages: default_packages(),
            output: OutputConfig::default(),
            plugins: PluginsConfig::default(),
        }
    }
}

fn default_packages() -> Vec<String> {
    vec![DEFAULT_PACKAGE_FORMAT.to_string()]
}

/// Timestamps such as `20240101120000` are read as integers by YAML.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Unsigned(u64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| match s {
        Scalar::Text(s) => s,
        Scalar::Integer(i) => i.to_string(),
        Scalar::Unsigned(u) => u.to_string(),
    }))
}

impl Config {
    /// Load configuration from a YAML or TOML file
    pub fn load(path: &Path) -> ShipyardResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path, None)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    ///
    /// When `environment` names a top-level mapping in the file, only that
    /// mapping is used.
    pub fn load_with_warnings(
        path: &Path,
        environment: Option<&str>,
    ) -> ShipyardResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path, environment)
    }

    /// Apply environment variable overrides (SHIPYARD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Project root: configured `root_path`, else `fallback`
    pub fn root_path_or(&self, fallback: &Path) -> PathBuf {
        self.root_path
            .clone()
            .unwrap_or_else(|| fallback.to_path_buf())
    }

    /// Project name: configured `name`, else the root directory name
    pub fn project_name(&self, root: &Path) -> String {
        self.name.clone().unwrap_or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "release".to_string())
        })
    }

    /// The release this configuration describes, rooted at `root`
    pub fn release(&self, root: &Path) -> Release {
        Release::new(self.project_name(root), root.join("tmp"))
            .with_timestamp(self.timestamp.clone())
            .with_package_formats(self.packages.clone())
    }
}
