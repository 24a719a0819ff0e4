//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the variants that wrap a foreign cause
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for building a test engine
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error
    ///
    /// Raised for a missing converter, invalid fixture filter patterns,
    /// or a configuration source that cannot be read.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Failure raised while the system under test runs its startup hooks
    #[error("Lifecycle error: {message}")]
    Lifecycle {
        /// Description of the lifecycle failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A fixture could not be constructed while compiling the catalog
    #[error("Discovery error for fixture '{fixture}': {message}")]
    Discovery {
        /// Key of the fixture that failed
        fixture: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A dependency lookup in a scope found no usable binding
    #[error("Unresolved dependency {type_name}: {message}")]
    Unresolved {
        /// Name of the requested type
        type_name: String,
        /// Message reported by the container
        message: String,
    },

    /// A fixture key that is not known to the engine
    #[error("Unknown fixture: {key}")]
    UnknownFixture {
        /// The requested key
        key: String,
    },

    /// A raw value could not be converted by the conversion rules
    #[error("Cannot convert '{raw}' to {value_type}: {message}")]
    Conversion {
        /// Target value type
        value_type: String,
        /// Raw text that failed to convert
        raw: String,
        /// Description of the failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Lifecycle error creation methods
impl Error {
    /// Create a lifecycle error
    pub fn lifecycle<S: Into<String>>(message: S) -> Self {
        Self::Lifecycle {
            message: message.into(),
            source: None,
        }
    }

    /// Create a lifecycle error with source
    pub fn lifecycle_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Lifecycle {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Fixture and scope error creation methods
impl Error {
    /// Wrap a fixture construction failure as a discovery error
    pub fn discovery_from<K: Into<String>>(fixture: K, source: Error) -> Self {
        Self::Discovery {
            fixture: fixture.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unresolved dependency error
    pub fn unresolved<T: Into<String>, S: Into<String>>(type_name: T, message: S) -> Self {
        Self::Unresolved {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create an unknown fixture error
    pub fn unknown_fixture<S: Into<String>>(key: S) -> Self {
        Self::UnknownFixture { key: key.into() }
    }

    /// Create a conversion error
    pub fn conversion<T: Into<String>, R: Into<String>, S: Into<String>>(
        value_type: T,
        raw: R,
        message: S,
    ) -> Self {
        Self::Conversion {
            value_type: value_type.into(),
            raw: raw.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// True for configuration errors
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// True for lifecycle errors
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Lifecycle { .. })
    }

    /// True for discovery errors
    pub fn is_discovery(&self) -> bool {
        matches!(self, Self::Discovery { .. })
    }
}
