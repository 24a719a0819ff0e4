//! Fixture include/exclude filter
//!
//! Glob patterns matched against fixture keys. A fixture is compiled into
//! the catalog when it matches at least one include pattern (or no include
//! pattern is configured) and no exclude pattern.

use globset::{Glob, GlobSet, GlobSetBuilder};
use tale_domain::error::{Error, Result};

/// Decides which registered fixtures enter the catalog
#[derive(Debug, Clone, Default)]
pub struct FixtureFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FixtureFilter {
    /// A filter that lets every fixture through
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Compile include and exclude patterns
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Whether the fixture with `key` passes the filter
    pub fn matches(&self, key: &str) -> bool {
        let included = self.include.as_ref().is_none_or(|set| set.is_match(key));
        let excluded = self.exclude.as_ref().is_some_and(|set| set.is_match(key));
        included && !excluded
    }
}

fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|e| {
            Error::configuration_with_source(format!("Invalid fixture pattern '{pattern}'"), e)
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| Error::configuration_with_source("Cannot compile fixture patterns", e))
}
