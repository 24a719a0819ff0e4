//! Engine Builder - the build pipeline
//!
//! ```text
//! Idle → Validating → RootScopeReady → LifecycleRunning
//!      → NestedScopeReady → CatalogBuilding → Done
//!
//! any non-terminal state ──failure──▶ Failed
//! ```
//!
//! | Step | Work | Status before it |
//! |------|------|------------------|
//! | 1 | converter present? | |
//! | 2 | root scope, filtered fixtures, converter binding | "Starting to rebuild the fixture model" |
//! | 3 | `start_application`, `setup_environment` | "Setting up the system environment" |
//! | 3 | `register_services` | "Registering the system services" |
//! | 4 | seal root, derive nested scope | |
//! | 5 | compile catalog | "Starting to read fixtures" |
//!
//! "Finished rebuilding the fixture model" is emitted by [`BuildAttempt`]
//! when it is dropped, so it fires exactly once on every exit path.

use crate::config::EngineConfig;
use crate::di::{FixtureSource, build_root_scope};
use crate::engine::TestEngine;
use std::fmt;
use std::sync::Arc;
use tale_application::catalog::FixtureCatalogBuilder;
use tale_application::filter::FixtureFilter;
use tale_application::lifecycle::SystemLifecycle;
use tale_application::ports::SystemUnderTest;
use tale_application::registry::FixtureRegistry;
use tale_domain::constants::{
    STATUS_ENVIRONMENT, STATUS_FINISHED, STATUS_FIXTURES, STATUS_SERVICES, STATUS_STARTING,
};
use tale_domain::error::{Error, Result};
use tale_domain::ports::BuildObserver;
use tracing::{debug, info, warn};

/// Supplementary registration applied after the system's own fixtures
type Supplement = Box<dyn FnOnce(&mut FixtureRegistry) + Send>;

/// State of a single build attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Nothing has happened yet
    Idle,
    /// Checking the system's converter
    Validating,
    /// Root scope populated with fixtures and the converter
    RootScopeReady,
    /// System lifecycle hooks running
    LifecycleRunning,
    /// Root sealed and nested scope derived
    NestedScopeReady,
    /// Fixture catalog being compiled
    CatalogBuilding,
    /// Engine assembled
    Done,
    /// The attempt failed
    Failed,
}

impl BuildState {
    /// Whether no further transition can happen
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Tracks one build attempt and reports its end to the observer
///
/// Dropping the attempt in any non-terminal state moves it to
/// [`BuildState::Failed`]. The finished notification is sent on drop.
pub(crate) struct BuildAttempt<'a> {
    observer: &'a dyn BuildObserver,
    state: BuildState,
}

impl<'a> BuildAttempt<'a> {
    pub(crate) fn begin(observer: &'a dyn BuildObserver) -> Self {
        let mut attempt = Self {
            observer,
            state: BuildState::Idle,
        };
        attempt.advance(BuildState::Validating);
        attempt
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> BuildState {
        self.state
    }

    pub(crate) fn advance(&mut self, next: BuildState) {
        debug!(from = ?self.state, to = ?next, "Engine build state");
        self.state = next;
    }

    pub(crate) fn complete(&mut self) {
        self.advance(BuildState::Done);
    }
}

impl Drop for BuildAttempt<'_> {
    fn drop(&mut self) {
        if !self.state.is_terminal() {
            warn!(state = ?self.state, "Engine build failed");
            self.state = BuildState::Failed;
        }
        self.observer.record_status(STATUS_FINISHED);
    }
}

/// Orchestrates the construction of a [`TestEngine`]
pub struct EngineBuilder {
    system: Arc<dyn SystemUnderTest>,
    observer: Arc<dyn BuildObserver>,
    filter: FixtureFilter,
    supplements: Vec<Supplement>,
}

impl EngineBuilder {
    /// Create a builder for a system, reporting progress to `observer`
    pub fn new(system: Arc<dyn SystemUnderTest>, observer: Arc<dyn BuildObserver>) -> Self {
        Self {
            system,
            observer,
            filter: FixtureFilter::allow_all(),
            supplements: Vec::new(),
        }
    }

    /// Apply the fixture filter of a loaded configuration
    pub fn with_config(self, config: &EngineConfig) -> Result<Self> {
        Ok(self.with_filter(config.fixtures.to_filter()?))
    }

    /// Restrict the fixtures compiled into the catalog
    pub fn with_filter(mut self, filter: FixtureFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Register extra fixtures after the system's own
    ///
    /// Keys already declared by the system are replaced.
    pub fn with_fixtures<F>(mut self, register: F) -> Self
    where
        F: FnOnce(&mut FixtureRegistry) + Send + 'static,
    {
        self.supplements.push(Box::new(register));
        self
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// - `Error::Configuration` when the system supplies no converter
    /// - any error raised by the system's lifecycle hooks, unchanged
    /// - `Error::Discovery` when a fixture cannot be constructed
    pub async fn build(self) -> Result<TestEngine> {
        let Self {
            system,
            observer,
            filter,
            supplements,
        } = self;
        let mut attempt = BuildAttempt::begin(observer.as_ref());

        let converter = system.build_converter().ok_or_else(|| {
            Error::configuration(format!(
                "System '{}' did not supply a value converter",
                system.name()
            ))
        })?;

        observer.record_status(STATUS_STARTING);
        info!(system = system.name(), "Building test engine");

        let mut root = build_root_scope(system.as_ref());
        let mut registry = FixtureRegistry::new();
        system.register_fixtures(&mut registry);
        for supplement in supplements {
            supplement(&mut registry);
        }
        let declared = registry.len();
        registry.retain(|key| filter.matches(key.as_str()));
        if registry.len() < declared {
            debug!(
                declared,
                retained = registry.len(),
                "Fixtures excluded by filter"
            );
        }
        // Replaces any converter bound by the system's container configuration
        root.add_shared(Arc::clone(&converter));
        attempt.advance(BuildState::RootScopeReady);

        attempt.advance(BuildState::LifecycleRunning);
        let mut lifecycle = SystemLifecycle::new(Arc::clone(&system));
        observer.record_status(STATUS_ENVIRONMENT);
        lifecycle.start_application().await?;
        lifecycle.setup_environment().await?;
        observer.record_status(STATUS_SERVICES);
        lifecycle.register_services(&mut root)?;

        let source = FixtureSource::new(root.build(), registry.clone());
        let scope = source.create();
        attempt.advance(BuildState::NestedScopeReady);

        observer.record_status(STATUS_FIXTURES);
        attempt.advance(BuildState::CatalogBuilding);
        let catalog = FixtureCatalogBuilder::new(registry, converter).build(&scope)?;

        info!(
            system = system.name(),
            fixtures = catalog.len(),
            "Test engine built"
        );
        attempt.complete();
        Ok(TestEngine::new(system, catalog, source))
    }
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("system", &self.system.name())
            .field("filter", &self.filter)
            .field("supplements", &self.supplements.len())
            .finish_non_exhaustive()
    }
}
