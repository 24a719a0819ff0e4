//! Test engine assembly
//!
//! [`EngineBuilder`] runs the build pipeline, [`TestEngine`] is its result
//! and the `engine_for*` functions cover the common ways of naming a system.

pub mod builder;
pub mod entry;
pub mod test_engine;

pub use builder::{BuildState, EngineBuilder};
pub use entry::{
    AdHocSystem, engine_for, engine_for_fixture, engine_for_system, engine_for_system_with,
};
pub use test_engine::TestEngine;
