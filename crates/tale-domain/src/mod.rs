//! # Domain Layer
//!
//! Core types for assembling a test engine: the fixture model compiled
//! into a catalog, the error taxonomy of a build, and the ports that the
//! system under test and build observers implement.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Build error taxonomy |
//! | [`constants`] | Status messages and grammar defaults |
//! | [`ports`] | `Fixture`, `ObjectConverter` and `BuildObserver` traits |
//! | [`value_objects`] | Fixture keys, grammars and the compiled catalog |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
