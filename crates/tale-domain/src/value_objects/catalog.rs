//! Compiled fixture catalog

use super::fixture::FixtureKey;
use super::grammar::GrammarModel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compiled metadata of a single fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureModel {
    /// Fixture identity
    pub key: FixtureKey,
    /// Display title
    pub title: String,
    /// Compiled grammars in declaration order
    pub grammars: Vec<GrammarModel>,
}

impl FixtureModel {
    /// Find a grammar by key
    pub fn grammar(&self, key: &str) -> Option<&GrammarModel> {
        self.grammars.iter().find(|grammar| grammar.key == key)
    }
}

/// Read-only catalog of compiled fixtures
///
/// Fixtures keep the order in which they were registered. A key appears at
/// most once; when constructed from models sharing a key the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FixtureModel>", into = "Vec<FixtureModel>")]
pub struct FixtureCatalog {
    fixtures: Vec<FixtureModel>,
    index: HashMap<FixtureKey, usize>,
}

impl FixtureCatalog {
    /// Get a fixture model by key
    pub fn get(&self, key: &str) -> Option<&FixtureModel> {
        self.index.get(key).map(|&position| &self.fixtures[position])
    }

    /// Check whether the catalog holds a fixture
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of fixtures
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Iterate fixtures in registration order
    pub fn iter(&self) -> impl Iterator<Item = &FixtureModel> {
        self.fixtures.iter()
    }

    /// Fixture keys in registration order
    pub fn keys(&self) -> Vec<&FixtureKey> {
        self.fixtures.iter().map(|model| &model.key).collect()
    }
}

impl From<Vec<FixtureModel>> for FixtureCatalog {
    fn from(models: Vec<FixtureModel>) -> Self {
        let mut fixtures: Vec<FixtureModel> = Vec::with_capacity(models.len());
        let mut index = HashMap::with_capacity(models.len());
        for model in models {
            match index.get(&model.key) {
                Some(&position) => fixtures[position] = model,
                None => {
                    index.insert(model.key.clone(), fixtures.len());
                    fixtures.push(model);
                }
            }
        }
        Self { fixtures, index }
    }
}

impl From<FixtureCatalog> for Vec<FixtureModel> {
    fn from(catalog: FixtureCatalog) -> Self {
        catalog.fixtures
    }
}
