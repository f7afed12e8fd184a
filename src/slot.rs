//! Write-once shared result cell for a single search invocation.

use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// The shared `(solution_found, solution_path)` pair of one invocation.
///
/// A fresh slot is constructed at the start of every top-level search,
/// which is what resets the state between invocations; it is then passed
/// by reference to every branch, never held in ambient global state.
///
/// Discipline:
/// - `found` is claimed by a single atomic compare-and-set; it never
///   transitions back to `false` within an invocation.
/// - `path` is written under the lock only by the branch that won the
///   claim, and read only after the invocation has fully completed.
///
/// The fast-path poll (`found`) is a plain atomic load, so branches can
/// check it before recursing and between neighbors without contending on
/// the lock.
pub(crate) struct SolutionSlot {
    found: AtomicBool,
    path: Mutex<Vec<usize>>,
}

impl SolutionSlot {
    pub fn new() -> Self {
        Self {
            found: AtomicBool::new(false),
            path: Mutex::new(Vec::new()),
        }
    }

    /// Returns whether some branch has already recorded a solution.
    #[inline]
    pub fn found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Attempts to record `path` plus the closing `start` vertex.
    ///
    /// Exactly one caller per invocation wins the compare-and-set and
    /// writes; every other caller observes the set flag and discards its
    /// own result. Returns whether this caller was the winner.
    pub fn record(&self, path: &[usize], start: usize) -> bool {
        if self
            .found
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
            .is_err()
        {
            return false;
        }

        let mut slot = self.path.lock().unwrap();
        slot.clear();
        slot.reserve(path.len() + 1);
        slot.extend_from_slice(path);
        slot.push(start);
        debug!("solution recorded: closed cycle over {} vertices", path.len());
        true
    }

    /// Consumes the slot, yielding the recorded path (empty if no branch
    /// ever won). Only called after every branch has completed.
    pub fn into_path(self) -> Vec<usize> {
        self.path.into_inner().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_wins() {
        let slot = SolutionSlot::new();
        assert!(!slot.found());

        assert!(slot.record(&[0, 1, 2], 0));
        assert!(slot.found());

        // A second valid terminal state must be discarded.
        assert!(!slot.record(&[0, 2, 1], 0));
        assert_eq!(slot.into_path(), vec![0, 1, 2, 0]);
    }

    #[test]
    fn empty_slot_yields_empty_path() {
        let slot = SolutionSlot::new();
        assert_eq!(slot.into_path(), Vec::<usize>::new());
    }

    #[test]
    fn record_appends_the_closing_start_vertex() {
        let slot = SolutionSlot::new();
        slot.record(&[3, 1, 0, 2], 3);
        assert_eq!(slot.into_path(), vec![3, 1, 0, 2, 3]);
    }

    #[test]
    fn concurrent_records_write_exactly_once() {
        use std::sync::Arc;

        let slot = Arc::new(SolutionSlot::new());
        let winners: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let slot = Arc::clone(&slot);
                    scope.spawn(move || usize::from(slot.record(&[0, i + 1], 0)))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(winners, 1, "exactly one branch may claim the slot");
        let path = Arc::into_inner(slot).unwrap().into_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], 0);
        assert_eq!(path[2], 0);
    }
}
