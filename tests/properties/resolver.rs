//! Property tests for destination canonicalization.

use std::collections::BTreeMap;

use proptest::prelude::*;

use shipyard::config::{DestinationConfig, RemoteConfig};
use shipyard::domain::services::{canonicalize, ResolvedRemote, DEFAULT_DESTINATION};
use shipyard::domain::value_objects::Credentials;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,10}").unwrap()
}

fn credentials() -> impl Strategy<Value = Credentials> {
    proptest::collection::btree_map(name(), name(), 0..4).prop_map(|map| map.into_iter().collect())
}

fn destination() -> impl Strategy<Value = DestinationConfig> {
    (proptest::option::of(name()), proptest::option::of(credentials()))
        .prop_map(|(path, credentials)| DestinationConfig { path, credentials })
}

/// Explicit destinations that never use the reserved default name
fn named_destinations() -> impl Strategy<Value = BTreeMap<String, DestinationConfig>> {
    proptest::collection::btree_map(
        name().prop_filter("not default", |n| n != DEFAULT_DESTINATION),
        destination(),
        0..4,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the inline form moves into `destinations.default` and other
    /// destinations are untouched.
    #[test]
    fn property_inline_form_becomes_default(
        path in name(),
        creds in credentials(),
        others in named_destinations(),
    ) {
        let config = RemoteConfig {
            path: Some(path.clone()),
            credentials: Some(creds.clone()),
            destinations: Some(others.clone()),
            ..RemoteConfig::default()
        };

        let canonical = canonicalize(config).unwrap();

        prop_assert!(canonical.path.is_none());
        prop_assert!(canonical.credentials.is_none());
        let destinations = canonical.destinations.unwrap();
        prop_assert_eq!(
            destinations.get(DEFAULT_DESTINATION),
            Some(&DestinationConfig { path: Some(path), credentials: Some(creds) })
        );
        for (name, entry) in &others {
            prop_assert_eq!(destinations.get(name), Some(entry));
        }
        prop_assert_eq!(destinations.len(), others.len() + 1);
    }

    /// PROPERTY: canonicalization is idempotent.
    #[test]
    fn property_canonicalize_is_idempotent(
        path in proptest::option::of(name()),
        creds in proptest::option::of(credentials()),
        others in named_destinations(),
    ) {
        let config = RemoteConfig {
            path,
            credentials: creds,
            destinations: Some(others),
            ..RemoteConfig::default()
        };

        if let Ok(once) = canonicalize(config) {
            let twice = canonicalize(once.clone()).unwrap();
            prop_assert_eq!(twice, once);
        }
    }

    /// PROPERTY: resolution never panics, and a resolved active destination
    /// is always complete.
    #[test]
    fn property_resolved_active_destination_is_valid(
        others in named_destinations(),
        selection in proptest::option::of(name()),
    ) {
        let config = RemoteConfig {
            destinations: Some(others),
            ..RemoteConfig::default()
        };

        if let Ok(remote) = ResolvedRemote::resolve(config, selection.as_deref()) {
            if let Some(active) = remote.active() {
                prop_assert!(active.is_valid());
            }
        }
    }
}
