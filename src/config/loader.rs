//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;
use tracing::debug;

use crate::error::{ShipyardError, ShipyardResult};

use super::types::{Config, Verbosity};
use super::ConfigWarning;

/// Project-relative configuration files, in lookup order.
const PROJECT_CONFIG_FILES: &[&str] = &["config/shipyard.yml", "shipyard.yml", ".shipyard.yml"];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(
    path: &Path,
    environment: Option<&str>,
) -> ShipyardResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let mut value = parse_document(path, &content)?;

    if let Some(env) = environment {
        if let Some(section) = value.get(env).filter(|v| v.is_mapping()) {
            debug!(environment = env, "using environment section of {}", path.display());
            value = section.clone();
        }
    }
    if value.is_null() {
        value = Value::Mapping(Default::default());
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let config: Config = serde_ignored::deserialize(value, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShipyardError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Parse YAML, or TOML for `.toml` files, into one value tree
fn parse_document(path: &Path, content: &str) -> ShipyardResult<Value> {
    let invalid = |message: String| ShipyardError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        let table: toml::Value = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;
        serde_yaml_ng::to_value(table).map_err(|e| invalid(e.to_string()))
    } else {
        serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))
    }
}

/// Find the configuration file for a project rooted at `root`.
///
/// Looks in the project first, then in the user configuration directory.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    PROJECT_CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .chain(dirs::config_dir().map(|dir| dir.join("shipyard/config.yml")))
        .find(|candidate| candidate.is_file())
}

/// Apply environment variable overrides (SHIPYARD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // SHIPYARD_TIMESTAMP
    if let Some(ts) = lookup("SHIPYARD_TIMESTAMP").filter(|v| !v.is_empty()) {
        config.timestamp = Some(ts);
    }

    // SHIPYARD_DESTINATION
    if let Some(name) = lookup("SHIPYARD_DESTINATION").filter(|v| !v.is_empty()) {
        config.plugins.remote.destination = Some(name);
    }

    // SHIPYARD_VERBOSITY
    if let Some(verbosity) = lookup("SHIPYARD_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "name",
        "timestamp",
        "root_path",
        "packages",
        "output",
        "verbosity",
        "plugins",
        "remote",
        "destination",
        "destinations",
        "path",
        "credentials",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist > 0 && dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
