//! Property tests for listing and artifact ordering.

use std::collections::BTreeMap;

use proptest::prelude::*;

use shipyard::config::{DestinationConfig, RemoteConfig};
use shipyard::domain::entities::Release;
use shipyard::domain::services::ResolvedRemote;
use shipyard::domain::value_objects::Credentials;
use shipyard::{MemoryReporter, MemoryStore, TransferUseCase};

const BUCKET: &str = "bucket";

fn remote() -> ResolvedRemote {
    let mut destinations = BTreeMap::new();
    destinations.insert(
        "default".to_string(),
        DestinationConfig {
            path: Some(BUCKET.to_string()),
            credentials: Some(Credentials::new().with("provider", "memory")),
        },
    );
    let config = RemoteConfig {
        destinations: Some(destinations),
        ..RemoteConfig::default()
    };
    ResolvedRemote::resolve(config, None).unwrap()
}

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9.-]{1,12}").unwrap()
}

fn format() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,4}(\\.[a-z0-9]{1,4})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: filtered listing keeps exactly the keys containing the
    /// project name, in listing order; `--all` keeps everything.
    #[test]
    fn property_list_filter_is_ordered_substring_match(
        keys in proptest::collection::vec(key(), 0..12),
        project in proptest::string::string_regex("[a-z]{1,3}").unwrap(),
    ) {
        let mut store = MemoryStore::new().with_bucket(BUCKET);
        for key in &keys {
            store = store.with_object(BUCKET, key, "");
        }
        let listed = store.keys(BUCKET);
        let use_case = TransferUseCase::new(remote(), project.clone(), store);

        let shown = use_case.list(false, &mut MemoryReporter::new()).unwrap();
        let expected: Vec<String> = listed
            .iter()
            .filter(|k| k.contains(project.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(shown, expected);

        let all = use_case.list(true, &mut MemoryReporter::new()).unwrap();
        prop_assert_eq!(all, listed);
    }

    /// PROPERTY: metadata always precedes packages, and removal starts with
    /// the hashref marker.
    #[test]
    fn property_artifact_order(
        formats in proptest::collection::vec(format(), 0..4),
        timestamp in "[0-9]{1,14}",
    ) {
        let release = Release::new("app", "/work/tmp")
            .with_timestamp(Some(timestamp.clone()))
            .with_package_formats(formats.clone());
        let artifacts = release.artifacts("put").unwrap();
        let prefix = format!("app-{}", timestamp);

        let transfer: Vec<String> = artifacts.transfer_order().map(|a| a.key()).collect();
        prop_assert_eq!(transfer.len(), formats.len() + 1);
        prop_assert_eq!(&transfer[0], &format!("{}-release-metadata.json", prefix));
        for (key, format) in transfer[1..].iter().zip(&formats) {
            prop_assert_eq!(key, &format!("{}.{}", prefix, format));
        }

        let removal: Vec<String> = artifacts.removal_order().map(|a| a.key()).collect();
        prop_assert_eq!(removal.len(), formats.len() + 2);
        prop_assert_eq!(&removal[0], &format!("{}-release-hashref.txt", prefix));
        prop_assert_eq!(&removal[1..], &transfer[..]);
    }
}
