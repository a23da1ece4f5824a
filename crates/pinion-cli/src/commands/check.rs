//! `pinion check` command implementation.
//!
//! Reports which declared dependency edges are still active given the
//! resolved set, which declarations resolution silently dropped, and which
//! active edges are satisfied by a target version outside their declared
//! range.

use pinion_config::load_manifest;
use pinion_core::{Artifact, ArtifactVersion, PinionResult};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::CommandContext;

/// Execute the `pinion check` command
pub fn execute(manifest_path: &Path, ctx: &CommandContext) -> PinionResult<()> {
    let manifest = load_manifest(manifest_path)?;
    let (analyzer, edges, resolved) = super::build_analyzer(&manifest)?;

    ctx.output.info(&format!(
        "{} declared dependencies, {} resolved artifacts",
        edges.len(),
        resolved.len()
    ));

    let active = analyzer.active_dependencies(&resolved);
    ctx.output
        .success(&format!("{} active dependencies", active.len()));

    let resolved_artifacts: HashSet<&Artifact> =
        resolved.iter().map(ArtifactVersion::artifact).collect();
    let resolved_versions: HashSet<&ArtifactVersion> = resolved.iter().collect();
    let picked: HashMap<&Artifact, &str> = resolved
        .iter()
        .map(|version| (version.artifact(), version.version()))
        .collect();

    // A declaration whose source version was picked but whose target never
    // made it into the resolved set was silently dropped by resolution
    let mut findings = 0;
    for edge in &edges {
        if resolved_versions.contains(edge.from_version())
            && !resolved_artifacts.contains(edge.to_artifact())
        {
            findings += 1;
            ctx.output.warn(&format!(
                "dropped: {} ({} missing from the resolved set)",
                edge,
                edge.to_artifact()
            ));
        }
    }

    // An active edge whose target resolved outside the declared versions
    // means the declared requirement was overridden
    for edge in &active {
        if let Some(version) = picked.get(edge.to_artifact()) {
            if !edge.is_version_compatible(version) {
                findings += 1;
                ctx.output.warn(&format!(
                    "overridden: {} wants {} {}, resolution picked {}",
                    edge.from_version(),
                    edge.to_artifact(),
                    edge.spec(),
                    version
                ));
            }
        }
    }

    if findings == 0 {
        ctx.output
            .success("every declared dependency survived resolution");
    }
    Ok(())
}
