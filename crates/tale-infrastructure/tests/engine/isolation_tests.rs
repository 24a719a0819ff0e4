//! Tests for scope isolation between builds and runs

use crate::test_utils::{Greeting, Punctuation, TrackedSystem};
use tale_domain::error::Error;
use tale_infrastructure::engine_for_system_with;

#[derive(Debug, PartialEq)]
struct RunId(u32);

#[tokio::test]
async fn test_builds_do_not_share_services() {
    let first = engine_for_system_with(|| TrackedSystem::new().with_greeting("Hi"))
        .await
        .unwrap();
    let second = engine_for_system_with(|| TrackedSystem::new().with_greeting("Yo"))
        .await
        .unwrap();

    let first_greeting = first.new_scope().resolve::<Greeting>().unwrap();
    let second_greeting = second.new_scope().resolve::<Greeting>().unwrap();

    assert_eq!(first_greeting.0, "Hi");
    assert_eq!(second_greeting.0, "Yo");
    assert_eq!(first.catalog().get("Greeter").unwrap().title, "Greeter (Hi)");
    assert_eq!(second.catalog().get("Greeter").unwrap().title, "Greeter (Yo)");
}

#[tokio::test]
async fn test_each_run_gets_its_own_scope() {
    let engine = engine_for_system_with(TrackedSystem::new).await.unwrap();
    let factory = engine.scope_factory();

    let tagged = factory.create_with(|scope| {
        scope.add_value(RunId(7));
    });
    let plain = factory.create();

    assert_eq!(*tagged.resolve::<RunId>().unwrap(), RunId(7));
    assert!(plain.resolve::<RunId>().is_err());
}

#[tokio::test]
async fn test_fixtures_are_created_on_demand() {
    let engine = engine_for_system_with(TrackedSystem::new).await.unwrap();

    let scope = engine.new_scope();
    let greeter = engine.create_fixture("Greeter", &scope).unwrap();
    assert_eq!(greeter.grammars()[0].key, "Greet");

    assert!(engine.create_fixture("Unknown", &scope).is_err());
}

#[tokio::test]
async fn test_bindings_of_one_build_are_absent_from_another() {
    let first = engine_for_system_with(|| TrackedSystem::new().with_punctuation('?'))
        .await
        .unwrap();
    let second = engine_for_system_with(TrackedSystem::new).await.unwrap();

    assert_eq!(
        *first.new_scope().resolve::<Punctuation>().unwrap(),
        Punctuation('?')
    );
    assert!(matches!(
        second.new_scope().resolve::<Punctuation>(),
        Err(Error::Unresolved { .. })
    ));
}

#[tokio::test]
async fn test_run_local_binding_overrides_root() {
    let engine = engine_for_system_with(TrackedSystem::new).await.unwrap();

    let scope = engine.scope_factory().create_with(|scope| {
        scope.add_value(Greeting("Run".to_string()));
    });

    assert_eq!(scope.resolve::<Greeting>().unwrap().0, "Run");
    assert_eq!(engine.new_scope().resolve::<Greeting>().unwrap().0, "Hello");

    let greeter = engine.create_fixture("Greeter", &scope).unwrap();
    assert_eq!(greeter.title().as_deref(), Some("Greeter (Run)"));
}
