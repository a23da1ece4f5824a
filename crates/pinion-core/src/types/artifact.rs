//! Artifact identity types.
//!
//! An Artifact names a library independent of version (group + name). An
//! ArtifactVersion pins one concrete version of it. Both are immutable value
//! types; equality and hashing are by value, which is what makes them safe to
//! clone into query snapshots.

use crate::error::PinionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Library identity independent of version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    group: String,
    name: String,
}

/// An Artifact at one concrete version
///
/// The version is kept as a string: registration accepts whatever the
/// resolution step produced, and only compatibility checks try to parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactVersion {
    artifact: Artifact,
    version: String,
}

impl Artifact {
    /// Create a new artifact identity
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Artifact {
    type Err = PinionError;

    /// Parse a `group:name` coordinate
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.split_once(':') {
            Some((group, name))
                if !group.is_empty() && !name.is_empty() && !name.contains(':') =>
            {
                Ok(Artifact::new(group, name))
            }
            _ => Err(PinionError::ArtifactParse {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

impl ArtifactVersion {
    /// Create a versioned artifact
    pub fn new(artifact: Artifact, version: impl Into<String>) -> Self {
        Self {
            artifact,
            version: version.into(),
        }
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl FromStr for ArtifactVersion {
    type Err = PinionError;

    /// Parse a `group:name:version` coordinate
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let mut parts = input.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(name), Some(version))
                if !group.is_empty() && !name.is_empty() && !version.is_empty() =>
            {
                Ok(ArtifactVersion::new(Artifact::new(group, name), version))
            }
            _ => Err(PinionError::ArtifactParse {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.artifact, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_coordinate_round_trip() {
        let artifact = Artifact::from_str("com.google.android.gms:play-services-basement").unwrap();
        assert_eq!(artifact.group(), "com.google.android.gms");
        assert_eq!(artifact.name(), "play-services-basement");
        assert_eq!(
            artifact.to_string(),
            "com.google.android.gms:play-services-basement"
        );
    }

    #[test]
    fn test_artifact_rejects_bad_coordinates() {
        assert!(Artifact::from_str("no-separator").is_err());
        assert!(Artifact::from_str(":name").is_err());
        assert!(Artifact::from_str("group:").is_err());
        assert!(Artifact::from_str("group:name:extra").is_err());
    }

    #[test]
    fn test_artifact_identity() {
        let a = Artifact::new("com.example", "lib");
        let b = Artifact::new("com.example", "lib");
        let c = Artifact::new("com.example", "other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_artifact_version_coordinate() {
        let av = ArtifactVersion::from_str("com.example:lib:1.2.3").unwrap();
        assert_eq!(av.artifact(), &Artifact::new("com.example", "lib"));
        assert_eq!(av.version(), "1.2.3");
        assert_eq!(av.to_string(), "com.example:lib:1.2.3");
    }

    #[test]
    fn test_artifact_version_equality_includes_version() {
        let artifact = Artifact::new("com.example", "lib");
        let v1 = ArtifactVersion::new(artifact.clone(), "1.0.0");
        let v2 = ArtifactVersion::new(artifact, "1.0.1");

        assert_ne!(v1, v2);
    }

    #[test]
    fn test_artifact_version_keeps_odd_version_strings() {
        // Resolution can produce versions the Version parser would reject
        let av = ArtifactVersion::from_str("com.example:lib:2020.weird-SNAPSHOT").unwrap();
        assert_eq!(av.version(), "2020.weird-SNAPSHOT");
    }
}
