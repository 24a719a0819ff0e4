//! Application Ports
//!
//! Interfaces that need application types (scopes, registries) in their
//! signatures and therefore cannot live in the domain crate.

pub mod system;

pub use system::{ConfiguresFixtureContainer, SystemUnderTest};
