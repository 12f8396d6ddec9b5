//! Configuration types for the solver

use crate::board::MAX_BOARD_SIZE;
use crate::error::ConfigError;

/// How the search tree is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Partition the tree into work items and solve them on a worker pool
    #[default]
    Parallel,
    /// Run one backtracking search on the calling thread
    Sequential,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Parallel => write!(f, "parallel"),
            Strategy::Sequential => write!(f, "sequential"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parallel" | "par" | "mt" => Ok(Strategy::Parallel),
            "sequential" | "seq" | "st" => Ok(Strategy::Sequential),
            _ => Err(format!(
                "Unknown strategy: '{}'. Valid options: parallel, sequential",
                s
            )),
        }
    }
}

/// Split depth used when none is configured.
///
/// Deeper splits give more, smaller work items (better balance across
/// workers) at the cost of a larger up-front enumeration.
pub fn default_split_depth(board_size: usize) -> usize {
    let depth = if board_size > 6 {
        4
    } else if board_size > 4 {
        3
    } else {
        2
    };
    depth.min(board_size.saturating_sub(1))
}

/// Configuration for a solve run.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Board dimension N.
    pub board_size: usize,
    /// Number of worker threads for the parallel strategy.
    pub workers: usize,
    /// Explicit split depth (None = size-based default).
    pub split_depth: Option<usize>,
    /// Execution strategy.
    pub strategy: Strategy,
    /// Whether every solution is reported to the observer.
    pub report_solutions: bool,
    /// Whether work-item completion is reported to the observer.
    pub report_progress: bool,
}

impl SolverConfig {
    /// Create a config for an N×N board using every available core.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            workers: num_cpus::get(),
            split_depth: None,
            strategy: Strategy::default(),
            report_solutions: true,
            report_progress: false,
        }
    }

    /// Set the number of worker threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the number of worker threads from an Option, keeping the detected
    /// core count for `None`.
    pub fn with_workers_option(mut self, workers: Option<usize>) -> Self {
        if let Some(workers) = workers {
            self.workers = workers;
        }
        self
    }

    /// Override the split depth.
    pub fn with_split_depth(mut self, depth: usize) -> Self {
        self.split_depth = Some(depth);
        self
    }

    /// Override the split depth from an Option.
    pub fn with_split_depth_option(mut self, depth: Option<usize>) -> Self {
        self.split_depth = depth;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable per-solution reports.
    pub fn with_solution_reports(mut self, enabled: bool) -> Self {
        self.report_solutions = enabled;
        self
    }

    /// Enable or disable progress reports.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.report_progress = enabled;
        self
    }

    /// Split depth actually used: the override or the default, never past
    /// the last row.
    pub fn effective_split_depth(&self) -> usize {
        match self.split_depth {
            Some(depth) => depth.min(self.board_size.saturating_sub(1)),
            None => default_split_depth(self.board_size),
        }
    }

    /// Reject configurations the solver cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 1 {
            return Err(ConfigError::BoardSizeTooSmall);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSizeTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.workers < 1 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }
}
