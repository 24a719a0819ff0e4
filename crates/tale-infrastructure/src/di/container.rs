//! Scoped container factory
//!
//! Builds the root scope of a build, honouring the optional container
//! configuration capability of the system under test, and derives nested
//! scopes that fall back to a sealed root.

use dill::Catalog;
use std::sync::Arc;
use tale_application::ports::SystemUnderTest;
use tale_application::scope::{FixtureScope, ServiceScope};
use tracing::debug;

/// Create the root scope for a build
///
/// Systems exposing [`tale_application::ConfiguresFixtureContainer`] get to
/// add their bindings first; systems without it receive an empty scope.
pub fn build_root_scope(system: &dyn SystemUnderTest) -> ServiceScope {
    let mut scope = ServiceScope::new();
    match system.fixture_container() {
        Some(configurer) => {
            configurer.configure_fixture_container(&mut scope);
            debug!(
                system = system.name(),
                bindings = scope.registered().len(),
                "System configured the fixture container"
            );
        }
        None => debug!(system = system.name(), "System does not configure the fixture container"),
    }
    scope
}

/// Derive an isolated scope whose lookups fall back to `root`
pub fn derive_nested_scope(root: &Arc<Catalog>) -> FixtureScope {
    FixtureScope::nested(ServiceScope::new().build(), Arc::clone(root))
}
