//! Solve results, statistics and observer hooks

use std::time::Duration;

use crate::board::{Board, CanonicalForm};

use super::config::Strategy;

/// One solution as handed to an observer.
#[derive(Debug, Clone, Copy)]
pub struct SolutionReport<'a> {
    pub board: &'a Board,
    /// 1-based discovery order across all workers.
    pub sequence: u64,
    /// True if this solution opened a new symmetry class.
    pub is_unique: bool,
    /// Id of the new class, or of the class this solution is a variant of.
    pub unique_id: u64,
}

/// Work-item completion, emitted once per finished item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completed share in percent (100 for an empty run).
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Shape of a run, announced once before the search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlan {
    pub board_size: usize,
    pub strategy: Strategy,
    /// Number of worker threads (1 for sequential runs)
    pub workers: usize,
    /// Depth at which the tree is split (0 for sequential runs)
    pub split_depth: usize,
    /// Number of work items the tree was split into
    pub work_items: usize,
}

/// Receives solutions and progress as a solve runs.
///
/// Callbacks run on the thread that called the solver, never inside the
/// registry's critical section.
pub trait SolveObserver {
    fn on_start(&mut self, _plan: &SearchPlan) {}

    fn on_solution(&mut self, _report: &SolutionReport<'_>) {}

    fn on_progress(&mut self, _progress: Progress) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}

/// Per-worker counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStatistics {
    pub worker_id: usize,
    /// Work items this worker claimed and finished.
    pub work_items: u64,
    /// Solutions found in those work items.
    pub solutions: u64,
}

/// Statistics from a solve run
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    pub strategy: Strategy,
    /// Total time from validation to the last worker joining
    pub elapsed_time: Duration,
    /// Depth at which the tree was split (0 for sequential runs)
    pub split_depth: usize,
    /// Number of work items the tree was split into
    pub work_items: usize,
    /// Number of worker threads
    pub workers: usize,
    pub worker_statistics: Vec<WorkerStatistics>,
}

impl SearchStatistics {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }
}

/// Result of a solve run
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub board_size: usize,
    /// Every solution found, symmetric variants included
    pub total_solutions: u64,
    /// Number of distinct symmetry classes
    pub unique_solutions: u64,
    /// `(unique_id, canonical form)` for every class, ordered by id
    pub unique_forms: Vec<(u64, CanonicalForm)>,
    pub statistics: SearchStatistics,
}

impl SolveResult {
    /// Share of solutions removed as symmetric duplicates, in percent.
    ///
    /// `None` when no solution exists.
    pub fn reduction_percent(&self) -> Option<f64> {
        if self.total_solutions == 0 {
            return None;
        }
        let duplicates = self.total_solutions - self.unique_solutions;
        Some(100.0 * duplicates as f64 / self.total_solutions as f64)
    }

    /// Canonical forms of all classes in sorted order, independent of the
    /// order ids were assigned in.
    pub fn sorted_canonical_forms(&self) -> Vec<CanonicalForm> {
        let mut forms: Vec<_> = self.unique_forms.iter().map(|(_, f)| f.clone()).collect();
        forms.sort_unstable();
        forms
    }
}
