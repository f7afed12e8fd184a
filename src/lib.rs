//! # Hamilton
//!
//! Serial and bounded-parallel backtracking search for Hamiltonian
//! cycles in directed graphs.
//!
//! The crate decides whether a directed graph contains a Hamiltonian
//! cycle starting from a fixed vertex and, if so, returns one witness:
//! a closed path of `vertex_count + 1` indices beginning and ending at
//! the start vertex. Absence of a cycle is an empty result, not an
//! error.
//!
//! ## Quick Start
//!
//! ```
//! use hamilton::prelude::*;
//!
//! // The directed 4-cycle 0 -> 1 -> 2 -> 3 -> 0.
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
//!
//! let cycle = search_serial(&graph, 0)?;
//! assert_eq!(cycle, vec![0, 1, 2, 3, 0]);
//!
//! // The parallel mode returns some valid cycle; here there is only one.
//! let cycle = search_parallel(&graph, 0, &SearchConfig::default())?;
//! assert_eq!(cycle, vec![0, 1, 2, 3, 0]);
//! # Ok::<(), hamilton::SearchError>(())
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: immutable adjacency-list digraph and construction
//!   helpers, including a generator that can plant a Hamiltonian cycle.
//! - [`search`]: the backtracking engine in its two execution modes.
//! - [`validate`]: deterministic validation of returned cycles.
//! - [`error`]: the crate error taxonomy.
//!
//! ## Concurrency Notes
//!
//! - The graph is immutable during a search; branches read it without
//!   synchronization.
//! - Every forked branch owns a snapshot of the visited path, so the
//!   traversal hot path takes no locks.
//! - The single shared resource is the write-once solution slot: an
//!   atomic found flag claimed by compare-and-set plus a mutex guarding
//!   the one winning path write.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod graph;
pub mod search;
pub mod validate;

mod slot;
mod visit;

pub use error::SearchError;

/// Re-export of the commonly used types.
pub mod prelude {
    pub use crate::error::SearchError;
    pub use crate::graph::Graph;
    pub use crate::search::{search_parallel, search_serial, CycleSearch, SearchConfig};
    pub use crate::validate::check_cycle;
}
