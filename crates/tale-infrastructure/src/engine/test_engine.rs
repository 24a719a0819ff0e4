//! Test Engine - the result of a successful build

use crate::di::FixtureSource;
use std::fmt;
use std::sync::Arc;
use tale_application::ports::SystemUnderTest;
use tale_application::scope::FixtureScope;
use tale_domain::error::Result;
use tale_domain::ports::Fixture;
use tale_domain::value_objects::FixtureCatalog;
use tracing::info;

/// A built engine: the system, its fixture catalog and the scope factory
///
/// Cloning is cheap; clones share the catalog and the sealed root scope.
#[derive(Clone)]
pub struct TestEngine {
    system: Arc<dyn SystemUnderTest>,
    catalog: Arc<FixtureCatalog>,
    source: FixtureSource,
}

impl TestEngine {
    pub(crate) fn new(
        system: Arc<dyn SystemUnderTest>,
        catalog: FixtureCatalog,
        source: FixtureSource,
    ) -> Self {
        Self {
            system,
            catalog: Arc::new(catalog),
            source,
        }
    }

    /// The system this engine was built for
    pub fn system(&self) -> &Arc<dyn SystemUnderTest> {
        &self.system
    }

    /// The compiled fixture catalog
    pub fn catalog(&self) -> &FixtureCatalog {
        &self.catalog
    }

    /// Factory for per-run fixture scopes
    pub fn scope_factory(&self) -> &FixtureSource {
        &self.source
    }

    /// A fresh nested scope for one test run
    pub fn new_scope(&self) -> FixtureScope {
        self.source.create()
    }

    /// Construct a fixture for a test run
    pub fn create_fixture(&self, key: &str, scope: &FixtureScope) -> Result<Arc<dyn Fixture>> {
        self.source.create_fixture(key, scope)
    }

    /// Tear down the system's environment
    pub async fn shutdown(&self) -> Result<()> {
        self.system.teardown_environment().await?;
        info!(system = self.system.name(), "Test engine shut down");
        Ok(())
    }
}

impl fmt::Debug for TestEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestEngine")
            .field("system", &self.system.name())
            .field("fixtures", &self.catalog.len())
            .finish_non_exhaustive()
    }
}
