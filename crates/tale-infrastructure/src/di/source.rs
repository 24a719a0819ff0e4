//! Fixture source - the nested-scope factory of a built engine
//!
//! Holds the sealed root catalog and the fixture definitions of a build.
//! Every test run asks for its own [`FixtureScope`]; scopes are never shared.

use crate::di::container::derive_nested_scope;
use dill::Catalog;
use std::fmt;
use std::sync::Arc;
use tale_application::registry::FixtureRegistry;
use tale_application::scope::{FixtureScope, ServiceScope};
use tale_domain::error::{Error, Result};
use tale_domain::ports::Fixture;
use tale_domain::value_objects::FixtureKey;

/// Produces fresh fixture scopes on top of a sealed root
#[derive(Clone)]
pub struct FixtureSource {
    root: Arc<Catalog>,
    registry: Arc<FixtureRegistry>,
}

impl FixtureSource {
    /// Create a source from a sealed root catalog and the build's fixtures
    pub fn new(root: Catalog, registry: FixtureRegistry) -> Self {
        Self {
            root: Arc::new(root),
            registry: Arc::new(registry),
        }
    }

    /// A fresh nested scope
    pub fn create(&self) -> FixtureScope {
        derive_nested_scope(&self.root)
    }

    /// A fresh nested scope with run-local registrations
    ///
    /// Registrations made by `configure` are visible to this scope only and
    /// take precedence over root bindings of the same type.
    pub fn create_with<F>(&self, configure: F) -> FixtureScope
    where
        F: FnOnce(&mut ServiceScope),
    {
        let mut local = ServiceScope::new();
        configure(&mut local);
        FixtureScope::nested(local.build(), Arc::clone(&self.root))
    }

    /// Construct a registered fixture inside `scope`
    pub fn create_fixture(&self, key: &str, scope: &FixtureScope) -> Result<Arc<dyn Fixture>> {
        let definition = self
            .registry
            .get(key)
            .ok_or_else(|| Error::unknown_fixture(key))?;
        definition
            .create(scope)
            .map_err(|e| Error::discovery_from(key, e))
    }

    /// Keys of the fixtures this source can construct
    pub fn fixture_keys(&self) -> Vec<&FixtureKey> {
        self.registry.keys()
    }
}

impl fmt::Debug for FixtureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureSource")
            .field("fixtures", &self.registry.keys())
            .finish_non_exhaustive()
    }
}
