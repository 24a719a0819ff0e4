//! Fixture identity

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identity of a fixture within a registry or catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureKey(String);

impl FixtureKey {
    /// Create a key from any string-like value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FixtureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FixtureKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for FixtureKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for FixtureKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FixtureKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
