//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tale_application::filter::FixtureFilter;
use tale_domain::error::Result;

/// Root configuration of an engine build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Fixtures compiled into the catalog
    pub fixtures: FixtureFilterConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Include/exclude glob patterns over fixture keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureFilterConfig {
    /// Only fixtures matching one of these patterns are compiled; empty means all
    pub include: Vec<String>,

    /// Fixtures matching any of these patterns are skipped
    pub exclude: Vec<String>,
}

impl FixtureFilterConfig {
    /// Compile the patterns into a filter
    pub fn to_filter(&self) -> Result<FixtureFilter> {
        FixtureFilter::new(self.include.as_slice(), self.exclude.as_slice())
    }
}
