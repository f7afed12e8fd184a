//! Backtracking Hamiltonian cycle search, serial and bounded fork/join.
//!
//! Both execution modes run the same depth-first state machine; they
//! differ only in whether the fan-out gate is open. A branch is in
//! `Exploring(node, visited)` and ends in one of three terminal reports:
//!
//! - `Solution`: the path covers every vertex and an edge closes it back
//!   to the start; the branch races to record the closed cycle.
//! - `Exhausted`: every extension was explored without success.
//! - `Pruned`: the branch observed the shared found flag and stopped
//!   before finishing its own exploration.
//!
//! In parallel mode, neighbor exploration forks into independently
//! scheduled tasks while the depth is below [`SearchConfig::fork_depth`];
//! each spawned task owns a snapshot of the visited set, so branches
//! never synchronize on traversal state. The only contended resource is
//! the write-once solution slot pair.

use crate::error::SearchError;
use crate::graph::Graph;
use crate::slot::SolutionSlot;
use crate::visit::VisitSet;
use log::debug;
use rayon::prelude::*;

// ============================================================================
// Configuration
// ============================================================================

/// Tunables for the parallel search mode.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum DFS depth at which neighbor exploration may still fork
    /// into scheduled tasks. At or beyond this depth, or when at most one
    /// unvisited neighbor remains, recursion proceeds inline to avoid
    /// over-fragmenting trivial work.
    pub fork_depth: usize,
    /// Worker pool size. `None` lets the scheduler size the pool from
    /// the available parallelism. Pool sizing is a throughput tunable,
    /// never a correctness requirement.
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fork_depth: 3,
            threads: None,
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Runs a single-threaded depth-first search for a Hamiltonian cycle of
/// `graph` starting (and ending) at `start`.
///
/// Returns the closed cycle as `vertex_count + 1` indices beginning and
/// ending with `start`, or an empty vector if no cycle exists.
///
/// # Errors
/// Returns [`SearchError::InvalidVertex`] if `start` is out of range for
/// a nonempty graph.
pub fn search_serial(graph: &Graph, start: usize) -> Result<Vec<usize>, SearchError> {
    CycleSearch::new(graph, start)?.run_serial()
}

/// Runs a bounded fork/join search for a Hamiltonian cycle of `graph`
/// starting (and ending) at `start`.
///
/// Which of several valid cycles is returned is unspecified and may vary
/// across runs; validity of the returned cycle is not. A panic on a
/// worker propagates to the caller rather than being swallowed.
///
/// # Errors
/// Returns [`SearchError::InvalidVertex`] if `start` is out of range for
/// a nonempty graph, and [`SearchError::Scheduler`] if the worker pool
/// cannot be built.
pub fn search_parallel(
    graph: &Graph,
    start: usize,
    config: &SearchConfig,
) -> Result<Vec<usize>, SearchError> {
    CycleSearch::new(graph, start)?.run_parallel(config)
}

// ============================================================================
// Search object
// ============================================================================

/// A Hamiltonian cycle search over one graph from one fixed start vertex.
///
/// The search object itself is stateless across invocations: every run
/// constructs a fresh shared result slot, so consecutive runs of the
/// same object are independent.
pub struct CycleSearch<'g> {
    graph: &'g Graph,
    start: usize,
}

/// Terminal report of one DFS branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Solution,
    Exhausted,
    Pruned,
}

/// Why a forked neighbor sweep stopped before submitting every candidate.
enum Interrupt {
    /// The sweep must stop: a child solved, or the flag was observed set.
    Stop(Outcome),
    /// A child branch failed; surfaced at the parent's join point.
    Fault(SearchError),
}

impl<'g> CycleSearch<'g> {
    /// Creates a search over `graph` anchored at `start`.
    ///
    /// A zero-vertex graph is accepted with any start vertex; both modes
    /// then report "no cycle" immediately.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidVertex`] if the graph is nonempty
    /// and `start` is out of range.
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self, SearchError> {
        let vertex_count = graph.vertex_count();
        if vertex_count > 0 && start >= vertex_count {
            return Err(SearchError::InvalidVertex {
                vertex: start,
                vertex_count,
            });
        }
        Ok(Self { graph, start })
    }

    /// Runs the serial mode on the calling thread.
    ///
    /// # Errors
    /// Propagates traversal-boundary failures; see [`search_serial`].
    pub fn run_serial(&self) -> Result<Vec<usize>, SearchError> {
        // Fan-out gate permanently closed: no depth is below zero.
        self.run(0)
    }

    /// Runs the parallel mode on a dedicated worker pool.
    ///
    /// # Errors
    /// Propagates traversal-boundary failures; see [`search_parallel`].
    pub fn run_parallel(&self, config: &SearchConfig) -> Result<Vec<usize>, SearchError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;
        pool.install(|| self.run(config.fork_depth))
    }

    /// Shared top-level driver for both modes.
    fn run(&self, fork_depth: usize) -> Result<Vec<usize>, SearchError> {
        let vertex_count = self.graph.vertex_count();
        if vertex_count == 0 {
            return Ok(Vec::new());
        }

        debug!(
            "searching for a Hamiltonian cycle from vertex {} over {vertex_count} vertices \
             (fork depth {fork_depth})",
            self.start
        );

        let slot = SolutionSlot::new();
        let mut visited = VisitSet::with_capacity(vertex_count);
        visited.push(self.start);
        let outcome = self.explore(self.start, 0, &mut visited, &slot, fork_depth)?;
        debug!("search finished: {outcome:?}");

        Ok(slot.into_path())
    }

    // ------------------------------------------------------------------
    // DFS state machine
    // ------------------------------------------------------------------

    /// Explores one branch rooted at `node`.
    ///
    /// On entry, `visited` contains every ancestor on the path including
    /// `node` itself.
    fn explore(
        &self,
        node: usize,
        depth: usize,
        visited: &mut VisitSet,
        slot: &SolutionSlot,
        fork_depth: usize,
    ) -> Result<Outcome, SearchError> {
        if slot.found() {
            return Ok(Outcome::Pruned);
        }

        if visited.len() == self.graph.vertex_count() && self.graph.has_edge(node, self.start) {
            return Ok(if slot.record(visited.path(), self.start) {
                Outcome::Solution
            } else {
                // Another branch won the race first.
                Outcome::Pruned
            });
        }

        let neighbors = self.graph.neighbors(node)?;

        if depth < fork_depth {
            let candidates: Vec<usize> = neighbors
                .iter()
                .copied()
                .filter(|&next| !visited.contains(next))
                .collect();
            if candidates.len() > 1 {
                return self.sweep_forked(candidates, depth, visited, slot, fork_depth);
            }
            // Zero or one candidate: spawning buys nothing, fall through.
        }

        self.sweep_inline(neighbors, depth, visited, slot, fork_depth)
    }

    /// Explores each unvisited neighbor inline, backtracking in place.
    fn sweep_inline(
        &self,
        neighbors: &[usize],
        depth: usize,
        visited: &mut VisitSet,
        slot: &SolutionSlot,
        fork_depth: usize,
    ) -> Result<Outcome, SearchError> {
        for &next in neighbors {
            if slot.found() {
                return Ok(Outcome::Pruned);
            }
            if visited.contains(next) {
                continue;
            }
            visited.push(next);
            let outcome = self.explore(next, depth + 1, visited, slot, fork_depth)?;
            visited.pop();
            if outcome == Outcome::Solution {
                return Ok(Outcome::Solution);
            }
        }
        Ok(if slot.found() {
            Outcome::Pruned
        } else {
            Outcome::Exhausted
        })
    }

    /// Explores the candidate neighbors as independently scheduled tasks.
    ///
    /// Each task owns a snapshot of `visited`, so no task ever undoes
    /// another's state. The sweep stops submitting candidates once any
    /// task reports success or observes the found flag, then joins the
    /// tasks still in flight; a child fault surfaces here instead of
    /// being dropped.
    fn sweep_forked(
        &self,
        candidates: Vec<usize>,
        depth: usize,
        visited: &VisitSet,
        slot: &SolutionSlot,
        fork_depth: usize,
    ) -> Result<Outcome, SearchError> {
        let swept = candidates.into_par_iter().try_for_each(|next| {
            if slot.found() {
                return Err(Interrupt::Stop(Outcome::Pruned));
            }
            let mut branch = visited.clone();
            branch.push(next);
            match self.explore(next, depth + 1, &mut branch, slot, fork_depth) {
                Ok(Outcome::Solution) => Err(Interrupt::Stop(Outcome::Solution)),
                Ok(_) => Ok(()),
                Err(err) => Err(Interrupt::Fault(err)),
            }
        });

        match swept {
            Ok(()) => Ok(if slot.found() {
                Outcome::Pruned
            } else {
                Outcome::Exhausted
            }),
            Err(Interrupt::Stop(outcome)) => Ok(outcome),
            Err(Interrupt::Fault(err)) => Err(err),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
