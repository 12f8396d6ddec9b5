//! Parallel N-Queens enumeration with symmetry-aware deduplication.
//!
//! Every placement of N non-attacking queens is found by backtracking. The
//! search tree is cut at a shallow depth into independent work items that a
//! pool of worker threads solves concurrently, and each solution is reduced
//! to a canonical form under the eight board symmetries so that symmetric
//! variants are counted once as "unique" solutions.
//!
//! ```
//! use queens::{solve, NoopObserver, SolverConfig};
//!
//! let result = solve(&SolverConfig::new(8).with_workers(2), &mut NoopObserver)?;
//! assert_eq!(result.total_solutions, 92);
//! assert_eq!(result.unique_solutions, 12);
//! # Ok::<(), queens::SolveError>(())
//! ```

pub mod board;
pub mod error;
pub mod search;

pub use board::{canonicalize, is_safe, Board, CanonicalForm, Transform, MAX_BOARD_SIZE};
pub use error::{ConfigError, SolveError};
pub use search::{
    partition, run_parallel_search, solve, solve_sequential, NoopObserver, Progress, SearchPlan,
    SearchStatistics, SolutionReport, SolveObserver, SolveResult, SolverConfig, Strategy,
    WorkItem,
};
