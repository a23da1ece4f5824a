//! Command implementations.
//!
//! Each command loads the manifest, feeds a `DependencyAnalyzer`, and renders
//! a report through the shared output handler.

use crate::output::OutputHandler;
use pinion_analyzer::DependencyAnalyzer;
use pinion_config::Manifest;
use pinion_core::{ArtifactVersion, Dependency, PinionResult};

pub mod check;
pub mod explain;


/// Shared context for all commands
pub struct CommandContext {
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        Self {
            output: OutputHandler::new(),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Register every declared edge from a manifest into a fresh analyzer
pub fn build_analyzer(
    manifest: &Manifest,
) -> PinionResult<(DependencyAnalyzer, Vec<Dependency>, Vec<ArtifactVersion>)> {
    let edges = manifest.dependency_edges()?;
    let resolved = manifest.resolved_versions()?;

    let analyzer = DependencyAnalyzer::new();
    for edge in &edges {
        analyzer.register_dependency(edge.clone());
    }
    Ok((analyzer, edges, resolved))
}
