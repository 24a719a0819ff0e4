//! Tests for compile-time fixture discovery

use std::sync::Arc;
use tale_application::registry::list_discovered_fixtures;
use tale_application::{FixtureEntry, FixtureRegistry, FixtureScope, ServiceScope};
use tale_domain::error::Result;
use tale_domain::ports::Fixture;
use tale_domain::value_objects::Grammar;

struct Clock;

impl Fixture for Clock {
    fn title(&self) -> Option<String> {
        Some("Wall clock".to_string())
    }

    fn grammars(&self) -> Vec<Grammar> {
        vec![Grammar::fact("IsTicking", "The clock is ticking")]
    }
}

fn create_clock(_scope: &FixtureScope) -> Result<Arc<dyn Fixture>> {
    Ok(Arc::new(Clock))
}

#[linkme::distributed_slice(tale_application::FIXTURES)]
static CLOCK_FIXTURE: FixtureEntry = FixtureEntry {
    key: "Clock",
    description: "Wall clock fixture",
    factory: create_clock,
};

#[test]
fn test_submitted_entry_is_listed() {
    let discovered = list_discovered_fixtures();
    assert!(discovered.contains(&("Clock", "Wall clock fixture")));
}

#[test]
fn test_add_discovered_registers_entries() {
    let mut registry = FixtureRegistry::new();
    registry.add_discovered();

    let scope = FixtureScope::new(ServiceScope::new().build());
    let clock = registry.get("Clock").unwrap().create(&scope).unwrap();
    assert_eq!(clock.title().as_deref(), Some("Wall clock"));
}
