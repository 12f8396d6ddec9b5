//! Parallel execution of the partitioned search.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **work queue** prefilled with every work item and then closed
//! - Multiple **workers**, each with a private board, that claim items until
//!   the queue is drained and search each subtree to completion
//! - A **registry** shared by all workers; recording a solution is the only
//!   critical section inside the search
//! - A **coordinator** (the calling thread) that receives solution and
//!   progress messages and hands them to the observer
//!
//! Workers never coordinate beyond claiming items: there is no stealing or
//! rebalancing, so balance comes from the split depth producing many more
//! items than workers.
//!
//! # Example
//!
//! ```no_run
//! use queens::search::{run_parallel_search, NoopObserver, SolverConfig};
//!
//! let config = SolverConfig::new(10).with_workers(4).with_solution_reports(false);
//! let result = run_parallel_search(&config, &mut NoopObserver)?;
//! assert_eq!(result.total_solutions, 724);
//! # Ok::<(), queens::SolveError>(())
//! ```

pub mod channel;
pub mod coordinator;

pub use coordinator::run_parallel_search;
