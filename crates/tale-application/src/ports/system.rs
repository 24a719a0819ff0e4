//! System Under Test Port
//!
//! The contract a system under test fulfils so an engine can be built
//! against it. Only [`SystemUnderTest::register_fixtures`] and
//! [`SystemUnderTest::build_converter`] are required; every lifecycle hook
//! defaults to a no-op.
//!
//! ## Example
//!
//! ```ignore
//! struct Shop { db: Database }
//!
//! #[async_trait]
//! impl SystemUnderTest for Shop {
//!     fn register_fixtures(&self, registry: &mut FixtureRegistry) {
//!         registry.add_fixture::<CartFixture>();
//!     }
//!
//!     fn build_converter(&self) -> Option<Arc<dyn ObjectConverter>> {
//!         Some(Arc::new(StandardConverter::new()))
//!     }
//!
//!     async fn start_application(&self) -> Result<()> {
//!         self.db.connect().await
//!     }
//!
//!     fn register_services(&self, scope: &mut ServiceScope) -> Result<()> {
//!         scope.add_value(self.db.clone());
//!         Ok(())
//!     }
//! }
//! ```

use crate::registry::FixtureRegistry;
use crate::scope::ServiceScope;
use async_trait::async_trait;
use std::sync::Arc;
use tale_domain::error::Result;
use tale_domain::ports::ObjectConverter;

/// Optional capability: the system pre-configures the fixture container
///
/// Queried once per build through [`SystemUnderTest::fixture_container`];
/// systems without the capability simply return `None`.
pub trait ConfiguresFixtureContainer: Send + Sync {
    /// Add bindings to a freshly created root scope
    fn configure_fixture_container(&self, scope: &mut ServiceScope);
}

/// Description of a system under test
#[async_trait]
pub trait SystemUnderTest: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str {
        "system"
    }

    /// Declare the fixtures of this system
    fn register_fixtures(&self, registry: &mut FixtureRegistry);

    /// Supply the value-conversion rules; `None` fails the build
    fn build_converter(&self) -> Option<Arc<dyn ObjectConverter>>;

    /// Container configuration capability, if the system has one
    fn fixture_container(&self) -> Option<&dyn ConfiguresFixtureContainer> {
        None
    }

    /// Bootstrap the application (connections, configuration, ...)
    async fn start_application(&self) -> Result<()> {
        Ok(())
    }

    /// Prepare the environment tests run in
    async fn setup_environment(&self) -> Result<()> {
        Ok(())
    }

    /// Register services fixtures may depend on
    fn register_services(&self, _scope: &mut ServiceScope) -> Result<()> {
        Ok(())
    }

    /// Release the environment once test execution is over
    async fn teardown_environment(&self) -> Result<()> {
        Ok(())
    }
}
