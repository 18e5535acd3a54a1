use serde::Serialize;

use crate::graphs::VertexId;

/// A route through the road map together with its total weight.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: f64,
}

/// Result of a single source shortest path search.
///
/// For every vertex of the searched road map it holds the weight of a
/// shortest path from the source and the predecessor on that path.
/// Unreachable vertices have an infinite weight and no predecessor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortestPathTree {
    source: VertexId,
    weights: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: VertexId,
        weights: Vec<f64>,
        predecessors: Vec<Option<VertexId>>,
    ) -> ShortestPathTree {
        ShortestPathTree {
            source,
            weights,
            predecessors,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Weight of a shortest path to `vertex`, infinite if there is none or the
    /// vertex is unknown.
    pub fn weight(&self, vertex: VertexId) -> f64 {
        self.weights
            .get(vertex as usize)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex as usize).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.weight(vertex).is_finite()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    pub fn reachable_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, weight)| weight.is_finite())
            .map(|(vertex, _)| vertex as VertexId)
    }

    /// All `(vertex, predecessor)` pairs, i.e. the edges of the tree.
    pub fn tree_edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.predecessors
            .iter()
            .enumerate()
            .filter_map(|(vertex, predecessor)| Some((vertex as VertexId, (*predecessor)?)))
    }

    /// Walks the predecessors back from `target` to the source. Returns none if
    /// `target` is unreachable.
    pub fn path(&self, target: VertexId) -> Option<Path> {
        let weight = self.weight(target);
        if !weight.is_finite() {
            return None;
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, weight })
    }
}
