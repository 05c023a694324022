//! Errors raised while loading and compiling configuration.

use thiserror::Error;

/// Error type for configuration loading and compilation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required field is absent or has the wrong type.
    #[error("{context}: missing or invalid field '{field}'")]
    MissingField { context: String, field: String },

    /// A route declares a backend type the compiler does not know.
    #[error("{context}: invalid backend type '{kind}'")]
    InvalidBackendType { context: String, kind: String },

    /// Two routes of one host share a path.
    #[error("host '{host}': duplicate route '{path}'")]
    DuplicateRoute { host: String, path: String },

    /// Two hosts of one server share a name.
    #[error("server '{server}': duplicate host '{host}'")]
    DuplicateHost { server: String, host: String },

    /// A key is already present in a global map.
    #[error("{map} key '{key}' already exists")]
    DuplicateKey { map: &'static str, key: String },

    /// No server with the requested name is configured.
    #[error("no server named '{0}'")]
    NotFound(String),
}

impl ConfigError {
    pub(crate) fn missing(context: impl Into<String>, field: impl Into<String>) -> Self {
        ConfigError::MissingField {
            context: context.into(),
            field: field.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
