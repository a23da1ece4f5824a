//! Reverse index of dependency edges by target artifact.
//!
//! The store answers one question fast: "who requires artifact X, at any
//! version". Edges are bucketed under their target artifact, so lookups cost
//! O(edges into X) rather than O(all edges). Buckets keep registration order
//! and keep duplicates; an edge registered twice is two independent
//! declarations.

use indexmap::IndexMap;
use pinion_core::{Artifact, Dependency};

/// Append-only index from target artifact to the edges pointing at it
#[derive(Debug, Default)]
pub struct DependencyStore {
    index: IndexMap<Artifact, Vec<Dependency>>,
}

impl DependencyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            index: IndexMap::new(),
        }
    }

    /// Insert an edge into the bucket keyed by its target artifact
    ///
    /// Never fails and never deduplicates; multiplicities are meaningful.
    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.index
            .entry(dependency.to_artifact().clone())
            .or_default()
            .push(dependency);
    }

    /// All edges whose target is `artifact`, as an owned snapshot
    ///
    /// An artifact nobody requires and an artifact the store has never seen
    /// both come back as an empty Vec.
    pub fn dependencies_of(&self, artifact: &Artifact) -> Vec<Dependency> {
        self.index.get(artifact).cloned().unwrap_or_default()
    }

    /// Number of registered edges
    pub fn dependency_count(&self) -> usize {
        self.index.values().map(|bucket| bucket.len()).sum()
    }

    /// Number of distinct target artifacts
    pub fn target_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
