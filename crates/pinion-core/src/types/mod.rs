//! Core data types for Pinion dependency analysis.
//!
//! This module provides the fundamental types used throughout the Pinion
//! workspace:
//! - Artifact identity types (Artifact, ArtifactVersion)
//! - Version compatibility types (Version, VersionRange, VersionSpec)
//! - Dependency edges between versioned artifacts

pub mod artifact;
pub mod dependency;
pub mod version;

// Re-export all public types
pub use artifact::{Artifact, ArtifactVersion};
pub use dependency::Dependency;
pub use version::{Version, VersionError, VersionRange, VersionSpec};
