//! Value conversion port

use crate::error::Result;
use serde_json::Value;

/// Value-conversion rules of a system under test
///
/// Turns the raw text found in test scripts into typed values. The engine
/// builder requires one per build and injects it into the root scope so
/// fixtures can resolve it.
pub trait ObjectConverter: Send + Sync {
    /// Whether a rule exists for the given value type
    fn can_convert(&self, value_type: &str) -> bool;

    /// Convert raw text into a value of the given type
    fn convert(&self, value_type: &str, raw: &str) -> Result<Value>;
}
