//! Manifest model and conversion into core types.
//!
//! A manifest lists declared dependency edges and the resolved artifact set.
//! The same serde model backs both the TOML and the JSON representation:
//!
//! ```toml
//! [[dependency]]
//! from = "com.google.firebase:firebase-auth:16.0.1"
//! to = "com.google.android.gms:play-services-basement"
//! versions = "[15.0.0,16.0.0)"
//!
//! [[resolved]]
//! artifact = "com.google.android.gms:play-services-basement"
//! version = "15.0.1"
//! ```

use crate::ConfigResult;
use pinion_core::{Artifact, ArtifactVersion, Dependency, PinionError, VersionSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete manifest: declared edges plus the resolved set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Declared dependency edges
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<DependencyDecl>,

    /// Artifact versions picked by the external resolution step
    #[serde(default)]
    pub resolved: Vec<ResolvedDecl>,
}

/// One declared dependency edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyDecl {
    /// Declaring source, as a `group:name:version` coordinate
    pub from: String,

    /// Requirement target, as a `group:name` coordinate
    pub to: String,

    /// Target versions the declaration covers: a range like
    /// `[15.0.0,16.0.0)` or an exact version string
    pub versions: String,
}

/// One entry of the resolved set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDecl {
    /// Artifact, as a `group:name` coordinate
    pub artifact: String,

    /// The version resolution picked for it
    pub version: String,
}

impl Manifest {
    /// Convert the declared edges into core Dependency values
    pub fn dependency_edges(&self) -> ConfigResult<Vec<Dependency>> {
        self.dependencies
            .iter()
            .map(DependencyDecl::to_dependency)
            .collect()
    }

    /// Convert the resolved entries, rejecting a second version for any
    /// artifact
    ///
    /// "The resolved version" of an artifact is only well-defined when the
    /// set carries one entry per artifact, so duplicates are a manifest
    /// error rather than something the analyzer should guess about.
    pub fn resolved_versions(&self) -> ConfigResult<Vec<ArtifactVersion>> {
        let mut seen: HashMap<Artifact, String> = HashMap::new();
        let mut versions = Vec::with_capacity(self.resolved.len());

        for decl in &self.resolved {
            let artifact: Artifact = decl.artifact.parse()?;
            if let Some(first) = seen.get(&artifact) {
                return Err(PinionError::DuplicateResolution {
                    artifact: artifact.to_string(),
                    first: first.clone(),
                    second: decl.version.clone(),
                });
            }
            seen.insert(artifact.clone(), decl.version.clone());
            versions.push(ArtifactVersion::new(artifact, decl.version.clone()));
        }
        Ok(versions)
    }
}

impl DependencyDecl {
    /// Parse the coordinates and spec into a core Dependency
    pub fn to_dependency(&self) -> ConfigResult<Dependency> {
        let from: ArtifactVersion = self.from.parse()?;
        let to: Artifact = self.to.parse()?;
        let spec = VersionSpec::parse(&self.versions).map_err(|err| {
            PinionError::ManifestValidation {
                field: "versions".to_string(),
                reason: err.to_string(),
            }
        })?;
        Ok(Dependency::new(from, to, spec))
    }
}
