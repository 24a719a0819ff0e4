//! Domain Port Interfaces
//!
//! Traits implemented outside the build pipeline and consumed by it.

pub mod converter;
pub mod fixture;
pub mod observer;

pub use converter::ObjectConverter;
pub use fixture::Fixture;
pub use observer::BuildObserver;
