//! Error types for the option resolver
//!
//! Discovery failures are normally swallowed by the resolver and logged;
//! these types exist so the collaborators underneath can report what went
//! wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for option resolution
#[derive(Error, Debug)]
pub enum ResolverError {
    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed
    #[error("{format} parse error in {path}: {message}")]
    Parse {
        format: String,
        path: PathBuf,
        message: String,
    },

    /// A configuration file was found but cannot be evaluated
    #[error("Unsupported formatter configuration: {path}")]
    UnsupportedConfig { path: PathBuf },

    /// Discovery did not complete
    #[error("Configuration discovery error: {message}")]
    Discovery { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ResolverError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse<P: Into<PathBuf>>(
        format: impl Into<String>,
        path: P,
        message: impl ToString,
    ) -> Self {
        Self::Parse {
            format: format.into(),
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a new unsupported configuration error
    pub fn unsupported_config<P: Into<PathBuf>>(path: P) -> Self {
        Self::UnsupportedConfig { path: path.into() }
    }

    /// Create a new discovery error
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ResolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ResolverError::parse("JSON", "/tmp/.prettierrc", "expected value");
        assert_eq!(
            err.to_string(),
            "JSON parse error in /tmp/.prettierrc: expected value"
        );

        let err = ResolverError::unsupported_config("/tmp/prettier.config.js");
        assert!(err.to_string().contains("prettier.config.js"));
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ResolverError::file_system("read", "/etc/shadow", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
