//! Dependency edge type.
//!
//! A Dependency is a directed edge: one specific version of a source artifact
//! requires a target artifact. The attached VersionSpec names which versions
//! of the required artifact satisfy the declaration; `is_version_compatible`
//! answers "does this version in play still fall under the requirement".

use super::{Artifact, ArtifactVersion, VersionSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared requirement from one source version to a target artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    from_version: ArtifactVersion,
    to_artifact: Artifact,
    spec: VersionSpec,
}

impl Dependency {
    /// Create a dependency edge with an explicit spec
    pub fn new(from_version: ArtifactVersion, to_artifact: Artifact, spec: VersionSpec) -> Self {
        Self {
            from_version,
            to_artifact,
            spec,
        }
    }

    /// Create an edge satisfied by exactly one version of the target
    pub fn exact(
        from_version: ArtifactVersion,
        to_artifact: Artifact,
        target_version: &str,
    ) -> Self {
        Self::new(from_version, to_artifact, VersionSpec::exact(target_version))
    }

    /// The specific source version that declared this requirement
    pub fn from_version(&self) -> &ArtifactVersion {
        &self.from_version
    }

    /// The requirement target, version-agnostic
    pub fn to_artifact(&self) -> &Artifact {
        &self.to_artifact
    }

    pub fn spec(&self) -> &VersionSpec {
        &self.spec
    }

    /// Check whether a version of the target artifact satisfies this
    /// declared requirement
    pub fn is_version_compatible(&self, version: &str) -> bool {
        self.spec.matches(version)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_version, self.to_artifact)
    }
}
