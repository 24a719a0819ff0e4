//! Fixture port

use crate::value_objects::Grammar;

/// A reusable set of verbs and assertions a test script can invoke
///
/// Fixtures are constructed by their registry definition, which resolves
/// their dependencies from a fixture scope. Once built, the catalog builder
/// only reads the grammars they declare.
pub trait Fixture: Send + Sync {
    /// Human-readable title; the fixture key is used when absent
    fn title(&self) -> Option<String> {
        None
    }

    /// Grammars exposed to test scripts
    fn grammars(&self) -> Vec<Grammar>;
}
