//! Error types and result aliases for Pinion operations.
//!
//! Provides a unified error type covering all failure conditions across the
//! Pinion workspace with actionable error messages.

use crate::types::version::VersionError;
use thiserror::Error;

/// Unified error type for all Pinion operations
#[derive(Error, Debug)]
pub enum PinionError {
    // Manifest errors
    #[error("Failed to parse manifest: {message}")]
    ManifestParse { message: String },

    #[error("Manifest field '{field}' is invalid: {reason}")]
    ManifestValidation { field: String, reason: String },

    #[error("Invalid artifact coordinate: {input}")]
    ArtifactParse { input: String },

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Artifact '{artifact}' resolved to more than one version: {first} and {second}")]
    DuplicateResolution {
        artifact: String,
        first: String,
        second: String,
    },

    // Analysis errors
    #[error("Circular dependency declarations: {cycle}")]
    CircularDependency { cycle: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Pinion operations
pub type PinionResult<T> = Result<T, PinionError>;

impl PinionError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            PinionError::ArtifactParse { .. } => {
                Some("Artifact coordinates are 'group:name' and versioned ones 'group:name:version'")
            }
            PinionError::DuplicateResolution { .. } => {
                Some("A resolved set must carry exactly one version per artifact; remove the extra entry")
            }
            PinionError::CircularDependency { .. } => {
                Some("Requirer chains cannot be reconstructed for cyclic declarations; break the cycle")
            }
            PinionError::ManifestParse { .. } => {
                Some("Check the manifest syntax; both TOML and JSON manifests are accepted")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = PinionError::ArtifactParse {
            input: "broken".to_string(),
        };
        assert!(err.to_string().contains("broken"));

        let err = PinionError::DuplicateResolution {
            artifact: "com.a:lib".to_string(),
            first: "1.0.0".to_string(),
            second: "2.0.0".to_string(),
        };
        assert!(err.to_string().contains("com.a:lib"));
        assert!(err.to_string().contains("2.0.0"));
    }

    #[test]
    fn test_suggestions_exist_for_user_facing_errors() {
        let err = PinionError::CircularDependency {
            cycle: "a -> b -> a".to_string(),
        };
        assert!(err.suggestion().is_some());

        let err = PinionError::io(
            "read failed".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_version_error_converts() {
        let parse_err = "1.2".parse::<crate::types::Version>().unwrap_err();
        let err: PinionError = parse_err.into();
        assert!(matches!(err, PinionError::Version(_)));
    }
}
