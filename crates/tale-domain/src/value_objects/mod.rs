//! Value Objects
//!
//! Immutable types describing fixtures: identities, declared grammars and
//! the compiled catalog handed to the execution engine.

pub mod catalog;
pub mod fixture;
pub mod grammar;

pub use catalog::{FixtureCatalog, FixtureModel};
pub use fixture::FixtureKey;
pub use grammar::{Cell, CellSpec, Grammar, GrammarKind, GrammarModel};
