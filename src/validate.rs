//! Deterministic validation of returned cycles.

use crate::graph::Graph;

// ============================================================================
// Public API
// ============================================================================

/// Checks that `path` is a closed Hamiltonian cycle of `graph` anchored
/// at `start`.
///
/// The expected shape is the canonical one produced by the search:
/// `vertex_count + 1` entries, the first and last equal to `start`,
/// every vertex appearing exactly once among the first `vertex_count`,
/// and every consecutive pair joined by a directed edge.
///
/// # Errors
/// Returns a diagnostic message naming the first violated condition.
pub fn check_cycle(graph: &Graph, start: usize, path: &[usize]) -> Result<(), String> {
    let n = graph.vertex_count();

    if path.len() != n + 1 {
        return Err(format!(
            "expected {} entries for a closed cycle on {n} vertices, got {}",
            n + 1,
            path.len()
        ));
    }
    if path[0] != start {
        return Err(format!("cycle starts at {} instead of {start}", path[0]));
    }
    if path[n] != start {
        return Err(format!(
            "cycle ends at {} instead of returning to {start}",
            path[n]
        ));
    }

    let mut seen = vec![false; n];
    for &v in &path[..n] {
        if v >= n {
            return Err(format!("vertex {v} is out of range"));
        }
        if seen[v] {
            return Err(format!("vertex {v} appears more than once"));
        }
        seen[v] = true;
    }

    for window in path.windows(2) {
        if !graph.has_edge(window[0], window[1]) {
            return Err(format!("missing edge {} -> {}", window[0], window[1]));
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn four_cycle() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
    }

    #[test]
    fn accepts_a_valid_closed_cycle() {
        check_cycle(&four_cycle(), 0, &[0, 1, 2, 3, 0]).unwrap();
    }

    #[test]
    fn rejects_wrong_length() {
        let err = check_cycle(&four_cycle(), 0, &[0, 1, 2, 3]).unwrap_err();
        assert!(err.contains("5 entries"));
    }

    #[test]
    fn rejects_wrong_anchor() {
        let err = check_cycle(&four_cycle(), 1, &[0, 1, 2, 3, 0]).unwrap_err();
        assert!(err.contains("starts at 0"));
    }

    #[test]
    fn rejects_unclosed_path() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0), (0, 2)]).unwrap();
        let err = check_cycle(&graph, 0, &[0, 1, 2, 2]).unwrap_err();
        assert!(err.contains("ends at 2"));
    }

    #[test]
    fn rejects_repeated_vertices() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 0), (0, 2), (2, 0)]).unwrap();
        let err = check_cycle(&graph, 0, &[0, 1, 1, 0]).unwrap_err();
        assert!(err.contains("more than once"));
    }

    #[test]
    fn rejects_missing_edges() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let err = check_cycle(&graph, 0, &[0, 1, 2, 3, 0]).unwrap_err();
        assert!(err.contains("missing edge 3 -> 0"));
    }

    #[test]
    fn accepts_the_self_loop_singleton_convention() {
        let graph = Graph::from_edges(1, &[(0, 0)]).unwrap();
        check_cycle(&graph, 0, &[0, 0]).unwrap();
    }
}
