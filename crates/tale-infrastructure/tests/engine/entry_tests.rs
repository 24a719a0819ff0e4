//! Tests for the engine entry points

use crate::test_utils::{GreeterFixture, MathFixture, TrackedSystem};
use std::sync::Arc;
use tale_infrastructure::{engine_for, engine_for_fixture, engine_for_system};

struct Banner;

impl tale_domain::ports::Fixture for Banner {
    fn grammars(&self) -> Vec<tale_domain::value_objects::Grammar> {
        Vec::new()
    }
}

#[tokio::test]
async fn test_engine_for_system_uses_default() {
    let engine = engine_for_system::<TrackedSystem>().await.unwrap();

    assert_eq!(engine.system().name(), "tracked");
    assert_eq!(engine.catalog().len(), 2);
}

#[tokio::test]
async fn test_engine_for_single_fixture() {
    let engine = engine_for_fixture::<MathFixture>().await.unwrap();

    assert_eq!(engine.system().name(), "ad-hoc");
    assert!(engine.catalog().contains("Math"));
    assert_eq!(engine.catalog().len(), 1);
}

#[tokio::test]
async fn test_engine_for_fixture_with_missing_dependency_fails() {
    let error = engine_for_fixture::<GreeterFixture>().await.unwrap_err();
    assert!(error.is_discovery());
}

#[tokio::test]
async fn test_engine_for_registration_closure() {
    let engine = engine_for(|registry| {
        registry
            .add_fixture::<MathFixture>()
            .add_instance("Banner", Arc::new(Banner));
    })
    .await
    .unwrap();

    let keys: Vec<&str> = engine
        .catalog()
        .keys()
        .iter()
        .map(|key| key.as_str())
        .collect();
    assert_eq!(keys, vec!["Math", "Banner"]);
}
