//! Error handler for stdkit.
//!
//! Callers must be able to tell expected business failures (bad input) from
//! everything else. The former are [`Error::Validation`]; any other error is
//! wrapped into [`Error::Runtime`] so it can be handled uniformly
//! (logged, reported, turned into a generic failure).
//!
//! ```rust
//! use stdkit::error::Error;
//!
//! fn read_settings() -> Result<String, Error> {
//!     std::fs::read_to_string("settings.yaml")
//!         .map_err(|err| Error::wrap(err, "settings", "read", &["settings.yaml"]))
//! }
//! ```

use thiserror::Error;

/// Result alias with [`Error`] as error type.
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Enum representing library errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied data that does not satisfy a domain rule.
    #[error("{0}")]
    Validation(String),

    /// Any other failure, prefixed with where it happened.
    #[error("{context}")]
    Runtime {
        /// Call-site prefix followed by the wrapped message.
        context: String,
        /// Wrapped error, if any.
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    /// Create a new [`Error::Validation`].
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "`message` must not be empty");

        Self::Validation(message)
    }

    /// Create a new [`Error::Runtime`] without an underlying source.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty.
    pub fn runtime(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "`message` must not be empty");

        Self::Runtime {
            context: message,
            source: None,
        }
    }

    /// Wrap `err` into an [`Error::Runtime`], prefixing its message to
    /// imitate a stack frame: `{owner}.{method}/{info joined by "/"}`.
    ///
    /// `owner` is usually a module or type name.
    ///
    /// # Panics
    ///
    /// Panics if `owner` or `method` is empty.
    pub fn wrap<E>(err: E, owner: &str, method: &str, info: &[&str]) -> Self
    where
        E: Into<BoxError>,
    {
        assert!(!owner.is_empty(), "`owner` must not be empty");
        assert!(!method.is_empty(), "`method` must not be empty");

        let err = err.into();
        let prefix = format!("{owner}.{method}/{}", info.join("/"));

        Self::Runtime {
            context: format!("{prefix}: {err}"),
            source: Some(err),
        }
    }

    /// Same as [`Error::wrap`], using the name of `T` as owner.
    pub fn wrap_for<T: ?Sized, E>(err: E, method: &str, info: &[&str]) -> Self
    where
        E: Into<BoxError>,
    {
        let owner = std::any::type_name::<T>();
        let owner = owner.rsplit("::").next().unwrap_or(owner);

        Self::wrap(err, owner, method, info)
    }

    /// Whether the error is an expected validation failure.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the error is a wrapped runtime failure.
    #[inline]
    pub fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    struct Repository;

    #[test]
    fn test_validation() {
        let err = Error::validation("value is too short");
        assert!(err.is_validation());
        assert!(!err.is_runtime());
        assert_eq!(err.to_string(), "value is too short");
    }

    #[test]
    #[should_panic(expected = "`message` must not be empty")]
    fn test_validation_empty_message() {
        Error::validation("");
    }

    #[test]
    fn test_runtime() {
        let err = Error::runtime("connection refused");
        assert!(err.is_runtime());
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_wrap() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");

        let err = Error::wrap(io_err, "config", "read", &["config.yaml", "open"]);
        assert!(err.is_runtime());
        assert_eq!(
            err.to_string(),
            "config.read/config.yaml/open: no such file"
        );
        assert_eq!(err.source().unwrap().to_string(), "no such file");
    }

    #[test]
    fn test_wrap_without_info() {
        let err = Error::wrap("boom", "config", "load", &[]);
        assert_eq!(err.to_string(), "config.load/: boom");
    }

    #[test]
    #[should_panic(expected = "`owner` must not be empty")]
    fn test_wrap_empty_owner() {
        Error::wrap("boom", "", "load", &[]);
    }

    #[test]
    fn test_wrap_for() {
        let err = Error::wrap_for::<Repository, _>("timeout", "find", &["42"]);
        assert_eq!(err.to_string(), "Repository.find/42: timeout");
    }

    #[test]
    #[should_panic(expected = "`method` must not be empty")]
    fn test_wrap_empty_method() {
        Error::wrap("boom", "config", "", &[]);
    }
}
