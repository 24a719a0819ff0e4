//! Fixture Registry
//!
//! Collects the fixture definitions of one build. Fixtures enter the registry
//! through three routes:
//!
//! 1. **Explicit types**: `registry.add_fixture::<MathFixture>()` for types
//!    implementing [`InjectableFixture`]
//! 2. **Closures**: `registry.add("Math", |scope| ...)` for ad-hoc fixtures
//! 3. **Discovery**: `registry.add_discovered()` for every entry submitted to
//!    the [`FIXTURES`] distributed slice at link time
//!
//! ```ignore
//! use tale_application::registry::{FixtureEntry, FIXTURES};
//!
//! #[linkme::distributed_slice(FIXTURES)]
//! static MATH_FIXTURE: FixtureEntry = FixtureEntry {
//!     key: "Math",
//!     description: "Arithmetic sentences",
//!     factory: |scope| Ok(Arc::new(MathFixture::create(scope)?)),
//! };
//! ```
//!
//! Keys are unique. Registering a key a second time replaces the earlier
//! definition in place without raising an error.

use crate::scope::FixtureScope;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tale_domain::error::Result;
use tale_domain::ports::Fixture;
use tale_domain::value_objects::FixtureKey;
use tracing::debug;

/// Builds a fixture, resolving its dependencies from a fixture scope
pub type FixtureFactory = Arc<dyn Fn(&FixtureScope) -> Result<Arc<dyn Fixture>> + Send + Sync>;

/// A registered fixture: its key and how to construct it
#[derive(Clone)]
pub struct FixtureDefinition {
    key: FixtureKey,
    factory: FixtureFactory,
}

impl FixtureDefinition {
    /// Create a definition from a key and a factory
    pub fn new(key: impl Into<FixtureKey>, factory: FixtureFactory) -> Self {
        Self {
            key: key.into(),
            factory,
        }
    }

    /// Fixture key
    pub fn key(&self) -> &FixtureKey {
        &self.key
    }

    /// Construct the fixture against a scope
    pub fn create(&self, scope: &FixtureScope) -> Result<Arc<dyn Fixture>> {
        (self.factory)(scope)
    }
}

impl fmt::Debug for FixtureDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureDefinition")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// A fixture type that knows its key and how to build itself from a scope
pub trait InjectableFixture: Fixture + Sized + 'static {
    /// Key the fixture is registered under
    const KEY: &'static str;

    /// Construct the fixture, resolving dependencies from the scope
    fn create(scope: &FixtureScope) -> Result<Self>;
}

/// Registry entry for compile-time fixture discovery
pub struct FixtureEntry {
    /// Fixture key
    pub key: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to construct the fixture
    pub factory: fn(&FixtureScope) -> Result<Arc<dyn Fixture>>,
}

// Auto-collection via linkme distributed slices - fixtures submit entries at link time
#[linkme::distributed_slice]
pub static FIXTURES: [FixtureEntry] = [..];

/// List all discovered fixtures as (key, description) pairs
pub fn list_discovered_fixtures() -> Vec<(&'static str, &'static str)> {
    FIXTURES.iter().map(|e| (e.key, e.description)).collect()
}

/// Insertion-ordered collection of fixture definitions
#[derive(Clone, Default)]
pub struct FixtureRegistry {
    definitions: Vec<FixtureDefinition>,
    index: HashMap<FixtureKey, usize>,
}

impl FixtureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any earlier one with the same key
    pub fn register(&mut self, definition: FixtureDefinition) -> &mut Self {
        match self.index.get(definition.key()) {
            Some(&position) => {
                debug!(fixture = %definition.key(), "Replacing fixture definition");
                self.definitions[position] = definition;
            }
            None => {
                self.index
                    .insert(definition.key().clone(), self.definitions.len());
                self.definitions.push(definition);
            }
        }
        self
    }

    /// Register a fixture built by a closure
    pub fn add<F>(&mut self, key: impl Into<FixtureKey>, factory: F) -> &mut Self
    where
        F: Fn(&FixtureScope) -> Result<Arc<dyn Fixture>> + Send + Sync + 'static,
    {
        self.register(FixtureDefinition::new(key, Arc::new(factory)))
    }

    /// Register a fixture type under its own key
    pub fn add_fixture<F: InjectableFixture>(&mut self) -> &mut Self {
        self.add(F::KEY, |scope| {
            let fixture: Arc<dyn Fixture> = Arc::new(F::create(scope)?);
            Ok(fixture)
        })
    }

    /// Register an already constructed fixture
    pub fn add_instance(
        &mut self,
        key: impl Into<FixtureKey>,
        fixture: Arc<dyn Fixture>,
    ) -> &mut Self {
        self.add(key, move |_| Ok(Arc::clone(&fixture)))
    }

    /// Register a set of discovery entries
    pub fn add_entries(&mut self, entries: &[FixtureEntry]) -> &mut Self {
        for entry in entries {
            let factory = entry.factory;
            self.add(entry.key, move |scope| factory(scope));
        }
        self
    }

    /// Register every fixture submitted to [`FIXTURES`]
    pub fn add_discovered(&mut self) -> &mut Self {
        self.add_entries(&FIXTURES)
    }

    /// Keep only the definitions whose key satisfies `keep`, preserving order
    pub fn retain<F>(&mut self, mut keep: F) -> &mut Self
    where
        F: FnMut(&FixtureKey) -> bool,
    {
        self.definitions.retain(|definition| keep(definition.key()));
        self.index = self
            .definitions
            .iter()
            .enumerate()
            .map(|(position, definition)| (definition.key().clone(), position))
            .collect();
        self
    }

    /// Whether a fixture is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of registered fixtures
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> Vec<&FixtureKey> {
        self.definitions.iter().map(FixtureDefinition::key).collect()
    }

    /// Get a definition by key
    pub fn get(&self, key: &str) -> Option<&FixtureDefinition> {
        self.index.get(key).map(|&position| &self.definitions[position])
    }

    /// Registered definitions in registration order
    pub fn definitions(&self) -> &[FixtureDefinition] {
        &self.definitions
    }
}

impl fmt::Debug for FixtureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureRegistry")
            .field("fixtures", &self.keys())
            .finish()
    }
}
