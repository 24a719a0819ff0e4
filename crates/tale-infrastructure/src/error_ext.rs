//! Error extension utilities
//!
//! Context adapters turning foreign errors into the domain [`Error`].

use std::fmt;
use tale_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use tale_infrastructure::error_ext::ErrorContext;
///
/// // Inside a system's startup hook
/// let pool = connect(&url).await.lifecycle_context("Failed to open database pool")?;
///
/// // While loading configuration
/// let text = std::fs::read_to_string(&path).config_context("Failed to read config file")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context, converting the error to an internal error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for lifecycle hooks of a system under test
    fn lifecycle_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::internal(format!("{context}: {err}")))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }

    fn lifecycle_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::lifecycle_with_source(format!("{context}: {err}"), err))
    }
}
