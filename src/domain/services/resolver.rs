//! Destination configuration resolver
//!
//! Reconciles the two accepted plug-in configuration shapes into one:
//!
//! ```yaml
//! # Implicit (legacy inline form)
//! path: releases
//! credentials:
//!   provider: aws
//!
//! # Explicit
//! destination: default
//! destinations:
//!   default:
//!     path: releases
//!     credentials:
//!       provider: aws
//! ```
//!
//! Everything downstream only ever sees the explicit shape.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{DestinationConfig, RemoteConfig};
use crate::domain::entities::{Destination, DestinationSet};
use crate::domain::services::validator;
use crate::error::{ShipyardError, ShipyardResult};

/// Name used when no destination is selected.
pub const DEFAULT_DESTINATION: &str = "default";

/// Rewrite an implicit inline destination into `destinations.default`.
///
/// Returns the configuration unchanged when no inline keys are present.
pub fn canonicalize(mut config: RemoteConfig) -> ShipyardResult<RemoteConfig> {
    if config.path.is_none() && config.credentials.is_none() {
        return Ok(config);
    }

    if config
        .destinations
        .as_ref()
        .is_some_and(|d| d.contains_key(DEFAULT_DESTINATION))
    {
        return Err(ShipyardError::ConflictingDefaultDestination);
    }

    let (Some(path), Some(credentials)) = (config.path.take(), config.credentials.take()) else {
        return Err(ShipyardError::IncompleteImplicitDestination);
    };

    debug!("migrating inline destination into destinations.{DEFAULT_DESTINATION}");
    config
        .destinations
        .get_or_insert_with(BTreeMap::new)
        .insert(
            DEFAULT_DESTINATION.to_string(),
            DestinationConfig {
                path: Some(path),
                credentials: Some(credentials),
            },
        );
    Ok(config)
}

/// Parse the canonical `destinations` mapping into domain records.
pub fn destination_set(config: &RemoteConfig) -> DestinationSet {
    config
        .destinations
        .iter()
        .flatten()
        .map(|(name, entry)| {
            Destination::new(
                name.clone(),
                entry.path.clone(),
                entry.credentials.clone().unwrap_or_default(),
            )
        })
        .collect()
}

/// Canonical destination configuration with the active selection applied.
#[derive(Debug, Clone)]
pub struct ResolvedRemote {
    config: RemoteConfig,
    destinations: DestinationSet,
    active_name: String,
    explicit_selection: bool,
}

impl ResolvedRemote {
    /// Resolve `config`, selecting `selection` if given, else the configured
    /// `destination`, else `"default"`.
    ///
    /// The selected destination, when it exists, must be structurally valid.
    /// Other destinations are only checked on demand.
    pub fn resolve(config: RemoteConfig, selection: Option<&str>) -> ShipyardResult<Self> {
        let mut config = canonicalize(config)?;

        if let Some(name) = selection {
            config.destination = Some(name.to_string());
        }
        let explicit_selection = config.destination.is_some();
        let active_name = config
            .destination
            .clone()
            .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

        let destinations = destination_set(&config);
        if let Some(active) = destinations.get(&active_name) {
            validator::ensure_valid(active)?;
        }

        debug!(
            active = %active_name,
            count = destinations.len(),
            "resolved destinations"
        );

        Ok(Self {
            config,
            destinations,
            active_name,
            explicit_selection,
        })
    }

    /// The canonical (explicit-shape) configuration
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    pub fn destinations(&self) -> &DestinationSet {
        &self.destinations
    }

    pub fn active_name(&self) -> &str {
        &self.active_name
    }

    /// The active destination, if it exists in the set
    pub fn active(&self) -> Option<&Destination> {
        self.destinations.get(&self.active_name)
    }

    /// Whether the selection came from an override or the `destination` key
    pub fn is_explicit_selection(&self) -> bool {
        self.explicit_selection
    }

    /// The selected destination, with a message naming how it was chosen
    /// when it does not exist.
    pub fn selected(&self) -> ShipyardResult<&Destination> {
        match self.active() {
            Some(destination) => Ok(destination),
            None if self.explicit_selection => Err(ShipyardError::UnknownDestination {
                name: self.active_name.clone(),
            }),
            None => Err(ShipyardError::MissingDefaultDestination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Credentials;

    fn aws() -> Credentials {
        Credentials::new().with("provider", "aws")
    }

    fn entry(path: Option<&str>, credentials: Option<Credentials>) -> DestinationConfig {
        DestinationConfig {
            path: path.map(str::to_string),
            credentials,
        }
    }

    fn explicit(entries: Vec<(&str, DestinationConfig)>) -> RemoteConfig {
        RemoteConfig {
            destinations: Some(
                entries
                    .into_iter()
                    .map(|(n, e)| (n.to_string(), e))
                    .collect(),
            ),
            ..RemoteConfig::default()
        }
    }

    #[test]
    fn test_inline_and_explicit_default_conflict() {
        let mut config = explicit(vec![("default", entry(Some("target-path"), Some(aws())))]);
        config.path = Some("alt-target-path".into());

        let err = canonicalize(config).unwrap_err();
        assert!(err.to_string().contains("implicit and explicit"));
    }

    #[test]
    fn test_inline_requires_path_and_credentials() {
        let config = RemoteConfig {
            path: Some("alt-target-path".into()),
            ..RemoteConfig::default()
        };
        let err = canonicalize(config).unwrap_err();
        assert!(err.to_string().contains("without both path and credentials"));

        let config = RemoteConfig {
            credentials: Some(aws()),
            ..RemoteConfig::default()
        };
        let err = canonicalize(config).unwrap_err();
        assert!(err.to_string().contains("without both path and credentials"));
    }

    #[test]
    fn test_inline_becomes_explicit_default() {
        let config = RemoteConfig {
            path: Some("target-path".into()),
            credentials: Some(aws()),
            ..RemoteConfig::default()
        };

        let canonical = canonicalize(config).unwrap();

        let expected: BTreeMap<String, DestinationConfig> = [(
            "default".to_string(),
            entry(Some("target-path"), Some(aws())),
        )]
        .into_iter()
        .collect();
        assert_eq!(canonical.destinations, Some(expected));
        assert!(canonical.path.is_none());
        assert!(canonical.credentials.is_none());
    }

    #[test]
    fn test_inline_merges_next_to_other_destinations() {
        let mut config = explicit(vec![("backup", entry(Some("b"), Some(aws())))]);
        config.path = Some("p".into());
        config.credentials = Some(aws());

        let canonical = canonicalize(config).unwrap();
        let names: Vec<&String> = canonical.destinations.as_ref().unwrap().keys().collect();
        assert_eq!(names, vec!["backup", "default"]);
    }

    #[test]
    fn test_explicit_config_is_untouched() {
        let config = explicit(vec![("default", entry(Some("p"), Some(aws())))]);
        assert_eq!(canonicalize(config.clone()).unwrap(), config);
    }

    #[test]
    fn test_selection_precedence() {
        let mut config = explicit(vec![
            ("default", entry(Some("p"), Some(aws()))),
            ("staging", entry(Some("s"), Some(aws()))),
            ("prod", entry(Some("r"), Some(aws()))),
        ]);

        let resolved = ResolvedRemote::resolve(config.clone(), None).unwrap();
        assert_eq!(resolved.active_name(), "default");
        assert!(!resolved.is_explicit_selection());

        config.destination = Some("staging".into());
        let resolved = ResolvedRemote::resolve(config.clone(), None).unwrap();
        assert_eq!(resolved.active_name(), "staging");

        let resolved = ResolvedRemote::resolve(config, Some("prod")).unwrap();
        assert_eq!(resolved.active_name(), "prod");
        assert_eq!(resolved.config().destination.as_deref(), Some("prod"));
        assert_eq!(resolved.active().unwrap().path(), Some("r"));
    }

    #[test]
    fn test_active_destination_missing_path_fails_fast() {
        let config = explicit(vec![("default", entry(None, Some(aws())))]);
        let err = ResolvedRemote::resolve(config, None).unwrap_err();
        assert_eq!(err.to_string(), "Destination default invalid: No path present");
    }

    #[test]
    fn test_active_destination_missing_provider_fails_fast() {
        let creds = Credentials::new().with("region", "eu-west-1");
        let config = explicit(vec![("default", entry(Some("p"), Some(creds)))]);
        let err = ResolvedRemote::resolve(config, None).unwrap_err();
        assert_eq!(err.to_string(), "Destination default invalid: No provider present");
    }

    #[test]
    fn test_inactive_invalid_destination_is_kept() {
        let config = explicit(vec![
            ("default", entry(Some("p"), Some(aws()))),
            ("foo", entry(None, None)),
        ]);
        let resolved = ResolvedRemote::resolve(config, None).unwrap();
        assert_eq!(resolved.destinations().len(), 2);
        assert!(!resolved.destinations().get("foo").unwrap().is_valid());
    }

    #[test]
    fn test_selected_messages() {
        let config = explicit(vec![("other", entry(Some("p"), Some(aws())))]);

        let resolved = ResolvedRemote::resolve(config.clone(), None).unwrap();
        assert_eq!(
            resolved.selected().unwrap_err().to_string(),
            "Default destination does not exist."
        );

        let resolved = ResolvedRemote::resolve(config, Some("foo")).unwrap();
        assert_eq!(
            resolved.selected().unwrap_err().to_string(),
            "Destination 'foo' does not exist."
        );
    }
}
