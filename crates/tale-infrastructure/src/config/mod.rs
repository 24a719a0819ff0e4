//! Configuration
//!
//! [`EngineConfig`] is loaded by [`loader::ConfigLoader`] from defaults, a
//! TOML file and `TALE__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, FixtureFilterConfig, LoggingConfig};
