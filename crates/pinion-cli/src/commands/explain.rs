//! `pinion explain` command implementation.
//!
//! Prints every terminal requirer chain leading to an artifact, so a reader
//! can see exactly why it was pulled in.

use pinion_config::load_manifest;
use pinion_core::{Artifact, PinionResult};
use std::path::Path;

use super::CommandContext;

/// Execute the `pinion explain` command
pub fn execute(artifact: &str, manifest_path: &Path, ctx: &CommandContext) -> PinionResult<()> {
    let artifact: Artifact = artifact.parse()?;

    let manifest = load_manifest(manifest_path)?;
    let (analyzer, _edges, _resolved) = super::build_analyzer(&manifest)?;

    let chains = analyzer.paths(&artifact)?;
    if chains.is_empty() {
        ctx.output
            .info(&format!("nothing requires {}", artifact));
        return Ok(());
    }

    ctx.output.success(&format!(
        "{} requirer chain(s) lead to {}",
        chains.len(),
        artifact
    ));
    for chain in &chains {
        ctx.output.step(&chain.to_string());
    }
    Ok(())
}
