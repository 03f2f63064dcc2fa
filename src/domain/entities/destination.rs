//! Destination entity and the set of configured destinations.

use std::collections::BTreeMap;

use crate::domain::value_objects::Credentials;

/// A named remote location for release artifacts.
///
/// A destination may be structurally incomplete: configuration loading keeps
/// invalid entries so that `check-config` can report them. Use
/// [`Destination::is_valid`] or the validator before transferring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    name: String,
    path: Option<String>,
    credentials: Credentials,
}

impl Destination {
    pub fn new(name: impl Into<String>, path: Option<String>, credentials: Credentials) -> Self {
        Self {
            name: name.into(),
            path,
            credentials,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bucket name or storage path prefix, if set and non-empty
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn provider(&self) -> Option<&str> {
        self.credentials.provider()
    }

    /// Valid iff both path and provider are present and non-empty
    pub fn is_valid(&self) -> bool {
        self.path().is_some() && self.provider().is_some()
    }
}

/// Destinations keyed by name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationSet {
    entries: BTreeMap<String, Destination>,
}

impl DestinationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a destination, replacing any entry with the same name
    pub fn insert(&mut self, destination: Destination) {
        self.entries
            .insert(destination.name().to_string(), destination);
    }

    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Destination> for DestinationSet {
    fn from_iter<I: IntoIterator<Item = Destination>>(iter: I) -> Self {
        let mut set = Self::new();
        for destination in iter {
            set.insert(destination);
        }
        set
    }
}
