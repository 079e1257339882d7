//! Error types for the carconf library.
//!
//! Construction and by-name access fail with one of two domain errors
//! ([`Error::InvalidConfiguration`] and [`Error::UnknownField`]); the file
//! loader adds I/O and parse failures on top.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a carconf error.
///
/// # Examples
///
/// ```
/// use carconf::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(123)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the carconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// A field value violates its domain constraint or cannot be parsed.
    #[error("invalid configuration for '{field}': {reason}")]
    InvalidConfiguration {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A field name the configuration schema does not recognize.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// The name that was looked up.
        name: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML document could not be parsed or rendered.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON document could not be parsed or rendered.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not map to a known format.
    #[error("unsupported configuration format: {}", path.display())]
    UnsupportedFormat {
        /// The file that was rejected.
        path: PathBuf,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`].
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error came from a rejected field value.
    ///
    /// # Examples
    ///
    /// ```
    /// use carconf::Error;
    ///
    /// let err = Error::InvalidConfiguration {
    ///     field: "id".into(),
    ///     reason: "must be positive".into(),
    /// };
    /// assert!(err.is_invalid_configuration());
    /// ```
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Check if the error came from an unrecognized field name.
    ///
    /// # Examples
    ///
    /// ```
    /// use carconf::Error;
    ///
    /// let err = Error::UnknownField { name: "wheels".into() };
    /// assert!(err.is_unknown_field());
    /// ```
    #[must_use]
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField { .. })
    }

    /// Check if the error came from reading or parsing a document.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Yaml(_) | Self::Json(_))
    }
}

impl From<crate::config::schema::InvalidFieldError> for Error {
    fn from(err: crate::config::schema::InvalidFieldError) -> Self {
        Self::InvalidConfiguration {
            field: err.field.to_string(),
            reason: err.reason,
        }
    }
}
