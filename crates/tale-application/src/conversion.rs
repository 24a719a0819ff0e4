//! Standard value-conversion rules
//!
//! Rules for the primitive value types used by most fixtures. Systems with
//! richer types extend the rule table with [`StandardConverter::with_rule`]
//! or supply their own [`ObjectConverter`].

use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tale_domain::error::{Error, Result};
use tale_domain::ports::ObjectConverter;

/// A single conversion rule: raw text to value, or a failure message
pub type ConversionRule = Arc<dyn Fn(&str) -> std::result::Result<Value, String> + Send + Sync>;

/// Table-driven converter for primitive value types
#[derive(Clone)]
pub struct StandardConverter {
    rules: HashMap<String, ConversionRule>,
}

impl StandardConverter {
    /// Create a converter with the built-in rules
    ///
    /// | Value type | Result |
    /// |------------|--------|
    /// | `string` | the raw text |
    /// | `int`, `integer` | signed 64-bit number |
    /// | `float`, `number` | finite 64-bit float |
    /// | `bool`, `boolean` | `true`/`false`, also `yes`/`no` |
    pub fn new() -> Self {
        let converter = Self {
            rules: HashMap::new(),
        };
        converter
            .with_rule("string", |raw| Ok(Value::String(raw.to_string())))
            .with_rule("int", convert_int)
            .with_rule("integer", convert_int)
            .with_rule("float", convert_float)
            .with_rule("number", convert_float)
            .with_rule("bool", convert_bool)
            .with_rule("boolean", convert_bool)
    }

    /// Add or replace the rule for a value type
    pub fn with_rule<F>(mut self, value_type: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        self.rules.insert(value_type.into(), Arc::new(rule));
        self
    }

    /// Value types with a rule, sorted
    pub fn value_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl Default for StandardConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StandardConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardConverter")
            .field("value_types", &self.value_types())
            .finish()
    }
}

impl ObjectConverter for StandardConverter {
    fn can_convert(&self, value_type: &str) -> bool {
        self.rules.contains_key(value_type)
    }

    fn convert(&self, value_type: &str, raw: &str) -> Result<Value> {
        let rule = self
            .rules
            .get(value_type)
            .ok_or_else(|| Error::conversion(value_type, raw, "no conversion rule"))?;
        rule(raw).map_err(|message| Error::conversion(value_type, raw, message))
    }
}

fn convert_int(raw: &str) -> std::result::Result<Value, String> {
    raw.trim()
        .parse::<i64>()
        .map(Value::from)
        .map_err(|e| e.to_string())
}

fn convert_float(raw: &str) -> std::result::Result<Value, String> {
    let parsed = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Number::from_f64(parsed)
        .map(Value::Number)
        .ok_or_else(|| "value is not finite".to_string())
}

fn convert_bool(raw: &str) -> std::result::Result<Value, String> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" => Ok(Value::Bool(true)),
        "false" | "no" => Ok(Value::Bool(false)),
        other => Err(format!("'{other}' is not a boolean")),
    }
}
