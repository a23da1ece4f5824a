//! Manifest parsing for Pinion dependency analysis
//!
//! This crate reads the manifest file that connects Pinion to the outside
//! world: the dependency edges some build declared, and the artifact versions
//! an external resolution step actually picked.

pub mod loader;
pub mod manifest;

// Re-export main types
pub use loader::load_manifest;
pub use manifest::{DependencyDecl, Manifest, ResolvedDecl};

use pinion_core::PinionError;

/// Result type for manifest operations
pub type ConfigResult<T> = Result<T, PinionError>;
