//! Dependency registration and the two post-resolution queries.
//!
//! A single `DependencyAnalyzer` instance is shared for the whole analysis
//! session. Every known dependency edge is registered first (typically while
//! a build is being configured); after resolution has picked one version per
//! artifact, `active_dependencies` reports which declared edges still bind
//! and `paths` reconstructs every chain of requirers that leads to an
//! artifact of interest.
//!
//! Thread-safety is one coarse lock around the store: each operation takes it
//! for its full duration and runs to completion, and every returned
//! collection is an owned snapshot, so callers iterate without holding it.

use crate::store::DependencyStore;
use parking_lot::Mutex;
use pinion_core::{Artifact, ArtifactVersion, Dependency, PinionError, PinionResult};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// One step in a reconstructed requirer chain
///
/// Nodes form a singly-linked chain: the parentless node wraps an edge into
/// the queried artifact, and each child wraps an edge one requirer further
/// out. The nodes returned from [`DependencyAnalyzer::paths`] are terminal,
/// i.e. their edge starts at an artifact nothing else requires; walking
/// `parent` from a terminal node replays the chain back toward the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode {
    parent: Option<Box<PathNode>>,
    dependency: Dependency,
}

impl PathNode {
    fn root(dependency: Dependency) -> Self {
        Self {
            parent: None,
            dependency,
        }
    }

    fn child(parent: PathNode, dependency: Dependency) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            dependency,
        }
    }

    /// The edge this step was produced from
    pub fn dependency(&self) -> &Dependency {
        &self.dependency
    }

    /// The step one position closer to the queried artifact
    pub fn parent(&self) -> Option<&PathNode> {
        self.parent.as_deref()
    }

    /// Number of edges in the chain this node terminates
    pub fn depth(&self) -> usize {
        self.chain().len()
    }

    /// The full chain, outermost requirer first, queried artifact last
    pub fn chain(&self) -> Vec<&Dependency> {
        let mut chain = Vec::new();
        let mut node = Some(self);
        while let Some(current) = node {
            chain.push(&current.dependency);
            node = current.parent();
        }
        chain
    }
}

impl fmt::Display for PathNode {
    /// Renders `root@ver -> … -> queried-artifact`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.chain();
        for dep in &chain {
            write!(f, "{} -> ", dep.from_version())?;
        }
        match chain.last() {
            Some(dep) => write!(f, "{}", dep.to_artifact()),
            None => Ok(()),
        }
    }
}

/// Dependency collector and analyzer for resolved artifact sets
pub struct DependencyAnalyzer {
    store: Mutex<DependencyStore>,
}

impl DependencyAnalyzer {
    /// Create an analyzer with an empty store
    pub fn new() -> Self {
        Self {
            store: Mutex::new(DependencyStore::new()),
        }
    }

    /// Register a dependency edge
    ///
    /// Accepts anything well-formed, including duplicates; edges are never
    /// removed once registered.
    pub fn register_dependency(&self, dependency: Dependency) {
        debug!(edge = %dependency, "registering dependency");
        self.store.lock().add_dependency(dependency);
    }

    /// Declared edges that still bind given the resolved set
    ///
    /// An edge is active iff its declaring source version is exactly the one
    /// resolution picked and its target artifact appears in the resolved set.
    /// No order is implied between returned edges and duplicates registered
    /// twice come back twice.
    pub fn active_dependencies(&self, resolved: &[ArtifactVersion]) -> Vec<Dependency> {
        // Summarize the artifacts in play
        let mut artifacts: HashSet<&Artifact> = HashSet::new();
        let mut versions: HashSet<&ArtifactVersion> = HashSet::new();
        for version in resolved {
            artifacts.insert(version.artifact());
            versions.insert(version);
        }

        let store = self.store.lock();
        let mut active = Vec::new();
        for &artifact in &artifacts {
            for dependency in store.dependencies_of(artifact) {
                if versions.contains(dependency.from_version())
                    && artifacts.contains(dependency.to_artifact())
                {
                    active.push(dependency);
                }
            }
        }
        debug!(
            resolved = resolved.len(),
            active = active.len(),
            "active-dependency query"
        );
        active
    }

    /// Every terminal requirer chain leading to `artifact`
    ///
    /// Starts from each edge targeting the artifact and walks "who requires
    /// the requirer" until reaching an artifact nothing requires. Branching
    /// produces multiple divergent chains; edges whose spec does not cover
    /// the version in play are discarded for that branch. Cyclic
    /// declarations fail fast with [`PinionError::CircularDependency`].
    pub fn paths(&self, artifact: &Artifact) -> PinionResult<Vec<PathNode>> {
        let store = self.store.lock();
        let mut terminals = Vec::new();
        let mut on_path = Vec::new();

        for dependency in store.dependencies_of(artifact) {
            let from = dependency.from_version().clone();
            let node = PathNode::root(dependency);
            Self::collect_paths(&store, &mut terminals, node, &from, &mut on_path)?;
        }
        debug!(artifact = %artifact, chains = terminals.len(), "path query");
        Ok(terminals)
    }

    /// Extend `node` through every requirer of `current`'s artifact.
    ///
    /// `on_path` holds the versions already occupying a position on the
    /// current chain; meeting one again means the declarations are cyclic.
    fn collect_paths(
        store: &DependencyStore,
        terminals: &mut Vec<PathNode>,
        node: PathNode,
        current: &ArtifactVersion,
        on_path: &mut Vec<ArtifactVersion>,
    ) -> PinionResult<()> {
        let requirers = store.dependencies_of(current.artifact());
        if requirers.is_empty() {
            // Nothing requires this artifact: one complete chain found
            terminals.push(node);
            return Ok(());
        }

        on_path.push(current.clone());
        for dependency in requirers {
            if !dependency.is_version_compatible(current.version()) {
                continue;
            }
            let next = dependency.from_version().clone();
            if on_path.contains(&next) {
                return Err(PinionError::CircularDependency {
                    cycle: format_cycle(on_path, &next),
                });
            }
            let child = PathNode::child(node.clone(), dependency);
            Self::collect_paths(store, terminals, child, &next, on_path)?;
        }
        on_path.pop();
        Ok(())
    }
}

impl Default for DependencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a cycle as `a -> b -> a`, starting at the repeated version
fn format_cycle(on_path: &[ArtifactVersion], repeated: &ArtifactVersion) -> String {
    let start = on_path
        .iter()
        .position(|version| version == repeated)
        .unwrap_or(0);

    let mut names: Vec<String> = on_path[start..]
        .iter()
        .map(|version| version.to_string())
        .collect();
    names.push(repeated.to_string());
    names.join(" -> ")
}
