//! Application Layer - Tale
//!
//! Everything needed to turn a system under test into a compiled fixture
//! catalog, short of the orchestration itself:
//!
//! - `scope`: root and nested dependency scopes backed by `dill`
//! - `registry`: fixture definitions, explicit and compile-time discovered
//! - `ports::system`: what a system under test implements
//! - `lifecycle`: ordered execution of the system's startup hooks
//! - `catalog`: compilation of registered fixtures into a `FixtureCatalog`
//! - `filter`: include/exclude patterns applied during compilation
//! - `conversion`: the standard value-conversion rules
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `tale-domain`: fixture models, errors and ports
//! - `dill` for the scopes, `linkme` for fixture discovery

pub mod catalog;
pub mod conversion;
pub mod filter;
pub mod lifecycle;
pub mod ports;
pub mod registry;
pub mod scope;

pub use catalog::FixtureCatalogBuilder;
pub use conversion::StandardConverter;
pub use filter::FixtureFilter;
pub use lifecycle::{LifecyclePhase, SystemLifecycle};
pub use ports::system::{ConfiguresFixtureContainer, SystemUnderTest};
pub use registry::{FixtureDefinition, FixtureEntry, FixtureRegistry, InjectableFixture, FIXTURES};
pub use scope::{FixtureScope, ServiceScope};
