//! Tests for the engine build pipeline

use crate::test_utils::{Greeting, Punctuation, RenamedFixture, Stage, TrackedSystem};
use std::sync::Arc;
use tale_application::FixtureFilter;
use tale_domain::error::Error;
use tale_infrastructure::config::EngineConfig;
use tale_infrastructure::{EngineBuilder, NullBuildObserver, TestEngine};

async fn build(system: TrackedSystem) -> tale_domain::error::Result<TestEngine> {
    EngineBuilder::new(Arc::new(system), Arc::new(NullBuildObserver))
        .build()
        .await
}

#[tokio::test]
async fn test_catalog_contains_registered_fixtures() {
    let engine = build(TrackedSystem::new()).await.unwrap();
    let catalog = engine.catalog();

    let keys: Vec<&str> = catalog.keys().iter().map(|key| key.as_str()).collect();
    assert_eq!(keys, vec!["Math", "Greeter"]);

    let math = catalog.get("Math").unwrap();
    assert_eq!(math.title, "Arithmetic");
    let add = math.grammar("Add").unwrap();
    assert_eq!(add.input("x").unwrap().value_type, "int");
    assert!(add.input("y").unwrap().convertible);

    assert_eq!(catalog.get("Greeter").unwrap().title, "Greeter (Hello)");
}

#[tokio::test]
async fn test_lifecycle_runs_in_order() {
    let system = TrackedSystem::new();
    let log = Arc::clone(&system.log);

    build(system).await.unwrap();

    assert_eq!(
        log.calls(),
        vec![
            "build_converter",
            "register_fixtures",
            "start_application",
            "setup_environment",
            "register_services",
        ]
    );
}

#[tokio::test]
async fn test_missing_converter_fails_before_lifecycle() {
    let system = TrackedSystem::new().without_converter();
    let log = Arc::clone(&system.log);

    let error = build(system).await.unwrap_err();

    assert!(error.is_configuration());
    assert_eq!(log.calls(), vec!["build_converter"]);
}

#[tokio::test]
async fn test_lifecycle_error_is_returned_unchanged() {
    for stage in [Stage::Start, Stage::Environment, Stage::Services] {
        let error = build(TrackedSystem::new().failing_at(stage))
            .await
            .unwrap_err();

        let expected = format!("{stage:?} failed");
        assert!(
            matches!(error, Error::Internal { ref message } if *message == expected),
            "unexpected error for {stage:?}: {error}"
        );
    }
}

#[tokio::test]
async fn test_failed_start_skips_remaining_hooks() {
    let system = TrackedSystem::new().failing_at(Stage::Start);
    let log = Arc::clone(&system.log);

    build(system).await.unwrap_err();

    assert_eq!(
        log.calls(),
        vec!["build_converter", "register_fixtures", "start_application"]
    );
}

#[tokio::test]
async fn test_unresolved_dependency_is_discovery_error() {
    let error = build(TrackedSystem::new().without_greeting())
        .await
        .unwrap_err();

    assert!(error.is_discovery());
    assert!(matches!(error, Error::Discovery { ref fixture, .. } if fixture == "Greeter"));
}

#[tokio::test]
async fn test_duplicate_key_last_registration_wins() {
    let engine = EngineBuilder::new(Arc::new(TrackedSystem::new()), Arc::new(NullBuildObserver))
        .with_fixtures(|registry| {
            registry.add_instance("Math", Arc::new(RenamedFixture("Replaced math")));
        })
        .build()
        .await
        .unwrap();

    let catalog = engine.catalog();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("Math").unwrap().title, "Replaced math");
    assert_eq!(catalog.keys()[0].as_str(), "Math");
}

#[tokio::test]
async fn test_filter_from_config() {
    let mut config = EngineConfig::default();
    config.fixtures.exclude = vec!["Greet*".to_string()];

    let engine = EngineBuilder::new(
        Arc::new(TrackedSystem::new().without_greeting()),
        Arc::new(NullBuildObserver),
    )
    .with_config(&config)
    .unwrap()
    .build()
    .await
    .unwrap();

    assert_eq!(engine.catalog().len(), 1);
    assert!(engine.catalog().contains("Math"));
}

#[tokio::test]
async fn test_filter_include_only() {
    let filter = FixtureFilter::new(&["Math"], &[]).unwrap();

    let engine = EngineBuilder::new(Arc::new(TrackedSystem::new()), Arc::new(NullBuildObserver))
        .with_filter(filter)
        .build()
        .await
        .unwrap();

    assert_eq!(engine.catalog().len(), 1);

    let source = engine.scope_factory();
    let keys: Vec<&str> = source.fixture_keys().iter().map(|key| key.as_str()).collect();
    assert_eq!(keys, vec!["Math"]);

    let scope = engine.new_scope();
    assert!(engine.create_fixture("Math", &scope).is_ok());
    assert!(matches!(
        engine.create_fixture("Greeter", &scope),
        Err(Error::UnknownFixture { ref key }) if key == "Greeter"
    ));
}

#[tokio::test]
async fn test_container_capability_bindings_reach_fixture_scope() {
    let system = TrackedSystem::new().with_punctuation('!');
    let log = Arc::clone(&system.log);

    let engine = EngineBuilder::new(Arc::new(system), Arc::new(NullBuildObserver))
        .build()
        .await
        .unwrap();

    let scope = engine.new_scope();
    assert_eq!(*scope.resolve::<Punctuation>().unwrap(), Punctuation('!'));
    assert_eq!(
        *scope.resolve::<Greeting>().unwrap(),
        Greeting("Hello".to_string())
    );
    assert_eq!(log.calls()[1], "configure_container");
}

#[tokio::test]
async fn test_converter_is_resolvable_from_scope() {
    let engine = build(TrackedSystem::new()).await.unwrap();
    let converter = engine.new_scope().converter().unwrap();

    assert_eq!(
        converter.convert("int", "12").unwrap(),
        serde_json::Value::from(12)
    );
}

#[tokio::test]
async fn test_shutdown_tears_down_environment() {
    let system = TrackedSystem::new();
    let log = Arc::clone(&system.log);

    let engine = build(system).await.unwrap();
    engine.shutdown().await.unwrap();

    assert_eq!(log.calls().last(), Some(&"teardown_environment"));
}

#[tokio::test]
async fn test_injected_converter_replaces_container_binding() {
    let engine = build(TrackedSystem::new().with_container_converter())
        .await
        .unwrap();

    let converter = engine.new_scope().converter().unwrap();
    assert!(converter.can_convert("int"));
    assert!(!converter.can_convert("money"));
    assert!(
        engine
            .catalog()
            .get("Math")
            .unwrap()
            .grammar("Add")
            .unwrap()
            .input("x")
            .unwrap()
            .convertible
    );
}
