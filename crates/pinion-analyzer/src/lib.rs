//! Post-resolution dependency analysis for Pinion
//!
//! Dependencies between versioned artifacts are registered up front; once an
//! external resolution step has picked one version per artifact, this crate
//! answers which declared edges are still active and reconstructs the chains
//! of requirers that lead to a given artifact.

pub mod analyzer;
pub mod store;

// Re-export main types
pub use analyzer::{DependencyAnalyzer, PathNode};
pub use store::DependencyStore;
