//! Dependency Injection - dill scopes per build
//!
//! ```text
//! SystemUnderTest ──configure──▶ root ServiceScope ──build()──▶ root Catalog
//!                                                                   │
//!                                      FixtureSource::create() ─────┤ fallback
//!                                                                   ▼
//!                                                         nested FixtureScope
//! ```
//!
//! - [`container`]: root scope creation and nested scope derivation
//! - [`source`]: the nested-scope factory retained by a built engine

pub mod container;
pub mod source;

pub use container::{build_root_scope, derive_nested_scope};
pub use source::FixtureSource;
