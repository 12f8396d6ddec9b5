//! Error types for solver configuration and execution

use thiserror::Error;

/// Invalid solver input, rejected before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board must have at least one row.
    #[error("board size must be at least 1")]
    BoardSizeTooSmall,
    /// The board is larger than a column index or canonical symbol can encode.
    #[error("board size {size} exceeds the supported maximum of {max}")]
    BoardSizeTooLarge { size: usize, max: usize },
    /// An explicit worker count of zero was requested.
    #[error("thread count must be at least 1")]
    NoWorkers,
}

/// Failure of a solve run.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker_id}: {source}")]
    SpawnWorker {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },
    /// A worker thread panicked; its subtrees were not fully searched.
    #[error("worker {worker_id} terminated abnormally")]
    WorkerPanicked { worker_id: usize },
}
