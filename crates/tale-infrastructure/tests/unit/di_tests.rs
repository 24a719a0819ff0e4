//! Tests for root and nested scopes

use async_trait::async_trait;
use std::sync::Arc;
use tale_application::ports::{ConfiguresFixtureContainer, SystemUnderTest};
use tale_application::{FixtureRegistry, ServiceScope, StandardConverter};
use tale_domain::ports::{Fixture, ObjectConverter};
use tale_domain::value_objects::Grammar;
use tale_infrastructure::di::{FixtureSource, build_root_scope, derive_nested_scope};

#[derive(Debug, PartialEq)]
struct Region(&'static str);

#[derive(Debug, PartialEq)]
struct RunId(u32);

struct Plain;

#[async_trait]
impl SystemUnderTest for Plain {
    fn register_fixtures(&self, _registry: &mut FixtureRegistry) {}

    fn build_converter(&self) -> Option<Arc<dyn ObjectConverter>> {
        Some(Arc::new(StandardConverter::new()))
    }
}

struct Regional;

impl ConfiguresFixtureContainer for Regional {
    fn configure_fixture_container(&self, scope: &mut ServiceScope) {
        scope.add_value(Region("eu-west"));
    }
}

#[async_trait]
impl SystemUnderTest for Regional {
    fn register_fixtures(&self, _registry: &mut FixtureRegistry) {}

    fn build_converter(&self) -> Option<Arc<dyn ObjectConverter>> {
        Some(Arc::new(StandardConverter::new()))
    }

    fn fixture_container(&self) -> Option<&dyn ConfiguresFixtureContainer> {
        Some(self)
    }
}

struct Probe;

impl Fixture for Probe {
    fn grammars(&self) -> Vec<Grammar> {
        Vec::new()
    }
}

#[test]
fn test_root_scope_without_capability_is_empty() {
    let scope = build_root_scope(&Plain);
    assert!(scope.registered().is_empty());
}

#[test]
fn test_root_scope_applies_container_configuration() {
    let scope = build_root_scope(&Regional);
    assert!(scope.is_registered::<Region>());

    let nested = derive_nested_scope(&Arc::new(scope.build()));
    assert_eq!(*nested.resolve::<Region>().unwrap(), Region("eu-west"));
}

#[test]
fn test_run_local_values_stay_in_their_scope() {
    let mut root = ServiceScope::new();
    root.add_value(Region("us-east"));
    let source = FixtureSource::new(root.build(), FixtureRegistry::new());

    let first = source.create_with(|scope| {
        scope.add_value(RunId(1));
    });
    let second = source.create();

    assert_eq!(*first.resolve::<RunId>().unwrap(), RunId(1));
    assert!(second.resolve::<RunId>().is_err());
    assert_eq!(*second.resolve::<Region>().unwrap(), Region("us-east"));
}

#[test]
fn test_create_fixture_by_key() {
    let mut registry = FixtureRegistry::new();
    registry.add_instance("Probe", Arc::new(Probe));
    let source = FixtureSource::new(ServiceScope::new().build(), registry);
    let scope = source.create();

    assert!(source.create_fixture("Probe", &scope).is_ok());
    assert!(matches!(
        source.create_fixture("Missing", &scope),
        Err(tale_domain::error::Error::UnknownFixture { .. })
    ));
    assert_eq!(source.fixture_keys().len(), 1);
}
