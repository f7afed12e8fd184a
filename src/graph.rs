//! Immutable directed graph over vertices `0..vertex_count`, stored as
//! per-vertex adjacency lists.

use crate::error::SearchError;
use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Graph
// ============================================================================

/// A directed graph on vertices `0..vertex_count`.
///
/// Representation:
/// - `adj[v]` lists the out-neighbors of `v` in edge-insertion order.
///
/// Invariant: every adjacency target lies in `[0, vertex_count)`; this is
/// enforced by [`Graph::add_edge`], so the traversal may index adjacency
/// lists directly. The structure itself does not reject self-loops or
/// duplicate edges; construction helpers that need to avoid them do so
/// at generation time.
///
/// A graph is built once and then read-only for the rest of its life,
/// which makes unsynchronized concurrent reads from parallel search
/// branches safe.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph on `vertex_count` vertices with no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph from an explicit edge list.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidVertex`] if any endpoint is out of
    /// range.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, SearchError> {
        let mut graph = Self::new(vertex_count);
        for &(from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Total number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Appends the directed edge `from -> to`.
    ///
    /// Self-loops and duplicates are not rejected here; callers that must
    /// avoid them enforce that themselves.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidVertex`] if either endpoint is out
    /// of range.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), SearchError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adj[from].push(to);
        Ok(())
    }

    /// The out-neighbors of `v` in insertion order (possibly empty).
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidVertex`] if `v` is out of range.
    #[inline]
    pub fn neighbors(&self, v: usize) -> Result<&[usize], SearchError> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Returns whether the directed edge `from -> to` exists.
    ///
    /// Linear in the out-degree of `from`; out-of-range endpoints simply
    /// have no edges.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adj.get(from).is_some_and(|n| n.contains(&to))
    }

    #[inline]
    fn check_vertex(&self, vertex: usize) -> Result<(), SearchError> {
        if vertex < self.adj.len() {
            Ok(())
        } else {
            Err(SearchError::InvalidVertex {
                vertex,
                vertex_count: self.adj.len(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Random generation
    // ------------------------------------------------------------------

    /// Generates a random graph with roughly `edge_count` edges.
    ///
    /// With `guarantee_cycle`, a Hamiltonian cycle is planted first by
    /// laying a random permutation cycle over all vertices, and the
    /// remaining `edge_count - vertex_count` edges are added at random.
    /// Generation avoids self-loops and exact-duplicate edges, and stops
    /// early if the graph saturates before the requested count is
    /// reached.
    pub fn random<R: Rng>(
        rng: &mut R,
        vertex_count: usize,
        edge_count: usize,
        guarantee_cycle: bool,
    ) -> Self {
        let mut graph = Self::new(vertex_count);
        if vertex_count < 2 {
            return graph;
        }

        let mut remaining = edge_count;
        if guarantee_cycle {
            let mut order: Vec<usize> = (0..vertex_count).collect();
            order.shuffle(rng);
            for i in 0..vertex_count {
                graph.adj[order[i]].push(order[(i + 1) % vertex_count]);
            }
            remaining = edge_count.saturating_sub(vertex_count);
        }

        let max_edges = vertex_count * (vertex_count - 1);
        while remaining > 0 && graph.edge_count() < max_edges {
            let from = rng.random_range(0..vertex_count);
            let to = rng.random_range(0..vertex_count);
            if from == to || graph.has_edge(from, to) {
                continue;
            }
            graph.adj[from].push(to);
            remaining -= 1;
        }

        graph
    }
}

// ============================================================================
// Tests
// ============================================================================
