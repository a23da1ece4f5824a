//! # pinion-core
//!
//! Core types shared across all Pinion crates.
//!
//! This crate provides:
//! - Artifact and ArtifactVersion identity types
//! - Version, VersionRange and VersionSpec for compatibility checks
//! - Dependency edges between versioned artifacts
//! - PinionError enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Artifact, Version, Dependency, etc.)
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{PinionError, PinionResult};
pub use types::{Artifact, ArtifactVersion, Dependency, Version, VersionRange, VersionSpec};
