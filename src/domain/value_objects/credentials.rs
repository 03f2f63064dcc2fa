//! Destination credentials value object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key naming the storage backend inside a credentials mapping.
pub const PROVIDER_KEY: &str = "provider";

/// Provider-specific credential settings for a destination.
///
/// Always a flat string mapping. Scalar values written as numbers or booleans
/// in the configuration file are kept as their textual form, and `null`
/// values are dropped so that `provider: ~` reads as "no provider".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<String, String>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CredentialValue {
    Text(String),
    Flag(bool),
    Integer(i64),
    Float(f64),
}

impl CredentialValue {
    fn into_text(self) -> String {
        match self {
            CredentialValue::Text(s) => s,
            CredentialValue::Flag(b) => b.to_string(),
            CredentialValue::Integer(i) => i.to_string(),
            CredentialValue::Float(f) => f.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<CredentialValue>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v.into_text())))
                .collect(),
        ))
    }
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The storage backend name, if set and non-empty
    pub fn provider(&self) -> Option<&str> {
        self.get(PROVIDER_KEY).filter(|p| !p.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
