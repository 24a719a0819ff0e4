//! Entry points
//!
//! Shorthands that build an engine with a [`NullBuildObserver`]:
//!
//! | Function | System |
//! |----------|--------|
//! | [`engine_for_system`] | `S::default()` |
//! | [`engine_for_system_with`] | the result of a factory |
//! | [`engine_for_fixture`] | ad-hoc system holding one fixture type |
//! | [`engine_for`] | ad-hoc system holding caller-registered fixtures |

use crate::engine::{EngineBuilder, TestEngine};
use crate::observers::NullBuildObserver;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tale_application::conversion::StandardConverter;
use tale_application::ports::SystemUnderTest;
use tale_application::registry::{FixtureRegistry, InjectableFixture};
use tale_domain::error::Result;
use tale_domain::ports::ObjectConverter;

type RegisterFn = Box<dyn Fn(&mut FixtureRegistry) + Send + Sync>;

/// A system with no lifecycle of its own
///
/// Fixtures come from a registration closure; values are converted with
/// the [`StandardConverter`].
pub struct AdHocSystem {
    register: RegisterFn,
}

impl AdHocSystem {
    /// Create a system whose fixtures are declared by `register`
    pub fn new<F>(register: F) -> Self
    where
        F: Fn(&mut FixtureRegistry) + Send + Sync + 'static,
    {
        Self {
            register: Box::new(register),
        }
    }
}

impl fmt::Debug for AdHocSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdHocSystem").finish_non_exhaustive()
    }
}

#[async_trait]
impl SystemUnderTest for AdHocSystem {
    fn name(&self) -> &str {
        "ad-hoc"
    }

    fn register_fixtures(&self, registry: &mut FixtureRegistry) {
        (self.register)(registry);
    }

    fn build_converter(&self) -> Option<Arc<dyn ObjectConverter>> {
        Some(Arc::new(StandardConverter::new()))
    }
}

/// Build an engine for a default-constructed system
pub async fn engine_for_system<S>() -> Result<TestEngine>
where
    S: SystemUnderTest + Default + 'static,
{
    engine_for_system_with(S::default).await
}

/// Build an engine for the system returned by `factory`
pub async fn engine_for_system_with<S, F>(factory: F) -> Result<TestEngine>
where
    S: SystemUnderTest + 'static,
    F: FnOnce() -> S,
{
    EngineBuilder::new(Arc::new(factory()), Arc::new(NullBuildObserver))
        .build()
        .await
}

/// Build an engine for a single fixture type
pub async fn engine_for_fixture<F: InjectableFixture>() -> Result<TestEngine> {
    engine_for(|registry| {
        registry.add_fixture::<F>();
    })
    .await
}

/// Build an engine for the fixtures registered by `register`
pub async fn engine_for<F>(register: F) -> Result<TestEngine>
where
    F: Fn(&mut FixtureRegistry) + Send + Sync + 'static,
{
    EngineBuilder::new(
        Arc::new(AdHocSystem::new(register)),
        Arc::new(NullBuildObserver),
    )
    .build()
    .await
}
