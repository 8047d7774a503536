//! Error types for bindkit-core.
//!
//! The helpers themselves never fail: they return `None`, `false`, or a
//! degenerate number when given out-of-domain input. Typed errors only appear
//! on the `parse_*` / [`FromStr`](std::str::FromStr) companions and on
//! configuration I/O, where a caller wants to know *why* something was
//! rejected.
//!
//! ## Error Categories
//!
//! - **Input Errors**: malformed colors, URLs, or dates
//! - **Configuration Errors**: no resolvable config directory
//! - **I/O Errors**: file system access while loading or saving config
//! - **Serialization Errors**: config files that are not valid TOML
//!
//! ```rust
//! use bindkit_core::{Error, Rgb};
//!
//! match "#12345".parse::<Rgb>() {
//!     Ok(rgb) => println!("parsed {rgb}"),
//!     Err(e) => println!("{} ({})", e, e.category()),
//! }
//! ```

use thiserror::Error;

/// The main error type for bindkit-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A color string was not `#rrggbb` / `rrggbb`.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A string could not be parsed as a URL.
    ///
    /// The message carries the parser's reason (missing scheme, invalid host,
    /// and so on).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A date or timestamp could not be normalized to a calendar instant.
    ///
    /// ## Common Causes
    ///
    /// - Strings in none of the accepted shapes
    /// - Millisecond timestamps outside chrono's representable range
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration location could not be resolved.
    ///
    /// Raised when the platform has no home or config directory. Reading and
    /// writing the file itself surface as [`Error::Io`] and
    /// [`Error::Serialization`].
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading, writing, or creating the config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`Config`](crate::Config), or
    /// the config could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured field when logging:
    ///
    /// ```rust
    /// use bindkit_core::Error;
    ///
    /// let err = Error::InvalidUrl("relative URL without a base".into());
    /// assert_eq!(err.category(), "invalid_url");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidColor(_) => "invalid_color",
            Self::InvalidUrl(_) => "invalid_url",
            Self::InvalidDate(_) => "invalid_date",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        // Given: Different error variants
        let errors = vec![
            (Error::InvalidColor("zzz".to_string()), "Invalid color"),
            (Error::InvalidUrl("nope".to_string()), "Invalid URL"),
            (Error::InvalidDate("yesterday".to_string()), "Invalid date"),
            (Error::Config("missing".to_string()), "Configuration error"),
            (Error::Serialization("bad toml".to_string()), "Serialization error"),
        ];

        for (error, prefix) in errors {
            // When: Converting to string
            let error_string = error.to_string();

            // Then: Should contain the variant prefix
            assert!(
                error_string.starts_with(prefix),
                "{error_string} should start with {prefix}"
            );
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "config.toml");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.category(), "io");
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: Error = parse_err.into();

        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn test_categories_are_distinct() {
        let errors = [
            Error::InvalidColor(String::new()),
            Error::InvalidUrl(String::new()),
            Error::InvalidDate(String::new()),
            Error::Config(String::new()),
            Error::Io(io::Error::other("x")),
            Error::Serialization(String::new()),
        ];

        let mut categories: Vec<_> = errors.iter().map(Error::category).collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), errors.len());
    }
}
