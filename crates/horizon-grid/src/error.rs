//! Error types for the grid sorting subsystem.
//!
//! Routine UI states (clicking a non-sortable header, a stale column index)
//! are not errors: the sort simply does nothing. Errors are reserved for
//! programming and configuration mistakes.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Errors that can occur when configuring a sort.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// A sort algorithm selector did not name a known algorithm.
    #[error("Unknown sort type '{selector}'")]
    UnknownSortType { selector: String },

    /// A sort configuration document could not be parsed.
    #[error("Invalid sort configuration: {source}")]
    InvalidConfig {
        #[source]
        source: toml::de::Error,
    },

    /// A sort configuration could not be encoded.
    #[error("Failed to serialize sort configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A sort configuration value is out of range.
    #[error("Invalid value for sort setting '{setting}': {message}")]
    InvalidValue { setting: String, message: String },
}

impl SortError {
    /// Create an unknown sort type error.
    pub fn unknown_sort_type(selector: impl Into<String>) -> Self {
        Self::UnknownSortType {
            selector: selector.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            setting: setting.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for SortError {
    fn from(source: toml::de::Error) -> Self {
        Self::InvalidConfig { source }
    }
}
