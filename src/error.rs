//! Error taxonomy for the search boundary.
//!
//! Only two kinds of condition cross the crate boundary as errors:
//! invalid vertex indices (rejected before any traversal begins) and
//! worker-pool faults. Everything traversal-internal — dead ends,
//! pruning, backtracking — is handled locally, and the absence of a
//! cycle is reported as an empty result, not an error.

use thiserror::Error;

/// An error surfaced by graph construction or a search invocation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A vertex index fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph on {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },

    /// The worker pool for a parallel search could not be built.
    #[error("worker pool construction failed: {0}")]
    Scheduler(#[from] rayon::ThreadPoolBuildError),
}
