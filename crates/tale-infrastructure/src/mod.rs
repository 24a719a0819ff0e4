//! # Infrastructure Layer
//!
//! Assembles a runnable test engine from a system under test.
//!
//! ### Engine Assembly
//! | Module | Description |
//! |--------|-------------|
//! | [`engine`] | `EngineBuilder` pipeline, `TestEngine` and entry points |
//! | [`di`] | Root/nested `dill` scopes and the per-run scope factory |
//! | [`observers`] | Null, tracing and recording build observers |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Configuration and logging defaults |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod engine;
pub mod error_ext;
pub mod logging;
pub mod observers;

// Re-export commonly used types
pub use engine::{
    AdHocSystem, BuildState, EngineBuilder, TestEngine, engine_for, engine_for_fixture,
    engine_for_system, engine_for_system_with,
};
pub use error_ext::ErrorContext;
pub use observers::{NullBuildObserver, RecordingBuildObserver, TracingBuildObserver};
