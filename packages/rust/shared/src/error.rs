//! Error types for readcache.
//!
//! Library crates use [`ReadcacheError`] via `thiserror`.
//! The CLI maps error kinds to distinct exit codes at the process boundary.

use std::path::PathBuf;

/// Top-level error type for all readcache operations.
#[derive(Debug, thiserror::Error)]
pub enum ReadcacheError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Input validation error (malformed URL, unsupported input mode).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Network/HTTP error while downloading the article page.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Readability extraction error on retrieved content.
    #[error("extract error: {message}")]
    Extract { message: String },

    /// Filesystem I/O error while writing the cache file.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ReadcacheError>;

impl ReadcacheError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Create an extraction error from any displayable message.
    pub fn extract(msg: impl Into<String>) -> Self {
        Self::Extract {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error kind.
    ///
    /// Scriptable callers (the feed reader) can distinguish failure classes:
    /// 2 = config/usage, 3 = fetch, 4 = extract, 5 = cache write.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } | Self::Validation { .. } => 2,
            Self::Fetch(_) => 3,
            Self::Extract { .. } => 4,
            Self::Io { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = ReadcacheError::config("could not determine home directory");
        assert_eq!(
            err.to_string(),
            "config error: could not determine home directory"
        );

        let err = ReadcacheError::Fetch("https://example.com: HTTP 404".into());
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn exit_codes_by_kind() {
        assert_eq!(ReadcacheError::config("x").exit_code(), 2);
        assert_eq!(ReadcacheError::validation("x").exit_code(), 2);
        assert_eq!(ReadcacheError::Fetch("x".into()).exit_code(), 3);
        assert_eq!(ReadcacheError::extract("x").exit_code(), 4);
        let io = ReadcacheError::io(
            "/tmp/cache.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(io.exit_code(), 5);
    }
}
