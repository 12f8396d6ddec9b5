//! Deduplication of solutions by canonical form
//!
//! The registry maps each canonical form to the id of the symmetry class it
//! represents. Ids start at 1 and follow first discovery. With several
//! workers, which solution of a class is discovered first depends on thread
//! scheduling, so the id a class receives can differ between runs; the set of
//! canonical forms and all counts cannot.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tracing::trace;

use crate::board::{canonicalize, Board, CanonicalForm};

/// Outcome of recording one solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// 1-based position of the solution in discovery order.
    pub sequence: u64,
    /// True if the solution opened a new symmetry class.
    pub is_unique: bool,
    /// Id of the new class, or of the class the solution was matched to.
    pub unique_id: u64,
}

#[derive(Debug, Default)]
struct RegistryState {
    ids: FxHashMap<CanonicalForm, u64>,
    total_solutions: u64,
    unique_solutions: u64,
}

impl RegistryState {
    fn lookup_or_register(&mut self, canonical: CanonicalForm) -> (bool, u64) {
        match self.ids.entry(canonical) {
            Entry::Occupied(entry) => (false, *entry.get()),
            Entry::Vacant(entry) => {
                self.unique_solutions += 1;
                trace!(
                    unique_id = self.unique_solutions,
                    canonical = %entry.key(),
                    "new symmetry class"
                );
                entry.insert(self.unique_solutions);
                (true, self.unique_solutions)
            }
        }
    }
}

/// Shared registry of canonical forms and solution counters.
///
/// All counters live under the same lock as the map, so a solution's
/// sequence number, its classification and the unique count always agree.
#[derive(Debug, Default)]
pub struct Registry {
    state: Mutex<RegistryState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `canonical`, registering it under the next id if it
    /// has not been seen. The boolean is true only for the caller that
    /// registered it.
    pub fn lookup_or_register(&self, canonical: CanonicalForm) -> (bool, u64) {
        self.state.lock().lookup_or_register(canonical)
    }

    /// Count a complete solution and classify it by symmetry class.
    ///
    /// The canonical form is computed before taking the lock; it only depends
    /// on the caller's own board.
    pub fn record_solution(&self, board: &Board) -> Classification {
        let canonical = canonicalize(board);
        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.total_solutions += 1;
        let sequence = state.total_solutions;
        let (is_unique, unique_id) = state.lookup_or_register(canonical);
        Classification {
            sequence,
            is_unique,
            unique_id,
        }
    }

    pub fn total_solutions(&self) -> u64 {
        self.state.lock().total_solutions
    }

    pub fn unique_solutions(&self) -> u64 {
        self.state.lock().unique_solutions
    }

    /// Snapshot of every `(unique_id, canonical form)` entry, ordered by id.
    pub fn entries(&self) -> Vec<(u64, CanonicalForm)> {
        let state = self.state.lock();
        let mut entries: Vec<_> = state
            .ids
            .iter()
            .map(|(form, &id)| (id, form.clone()))
            .collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries
    }
}
