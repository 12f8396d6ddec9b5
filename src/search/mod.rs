//! Backtracking search over queen placements
//!
//! This module provides the search itself and the two ways of running it:
//! - Sequential: one depth-first search from row 0 on the calling thread
//! - Parallel: the tree is cut at a split depth into work items which a
//!   fixed pool of workers solves independently
//!
//! Both classify every solution through a shared [`Registry`].

pub mod config;
pub mod parallel;
pub mod partition;
pub mod registry;
pub mod result;

pub use config::{SolverConfig, Strategy};
pub use parallel::run_parallel_search;
pub use partition::{partition, WorkItem};
pub use registry::{Classification, Registry};
pub use result::{
    NoopObserver, Progress, SearchPlan, SearchStatistics, SolutionReport, SolveObserver,
    SolveResult, WorkerStatistics,
};

use std::time::Instant;

use tracing::info;

use crate::board::Board;
use crate::error::SolveError;

/// Depth-first placement from `row` until `stop_row`.
///
/// Every column of `row` that passes the safety check is committed and the
/// next row is searched; the following iteration simply overwrites the slot.
/// When `stop_row` is reached the board is handed to `emit`. With
/// `stop_row == board.size()` every emitted board is a complete solution.
pub(crate) fn walk<F>(board: &mut Board, row: usize, stop_row: usize, emit: &mut F)
where
    F: FnMut(&Board),
{
    if row == stop_row {
        emit(board);
        return;
    }
    for col in 0..board.size() as u8 {
        if board.is_safe(row, col) {
            board.place(row, col);
            walk(board, row + 1, stop_row, emit);
        }
    }
}

/// Search every completion of `board` from `row` onwards.
///
/// Rows `0..row` must already hold a conflict-free prefix.
pub fn backtrack<F>(board: &mut Board, row: usize, emit: &mut F)
where
    F: FnMut(&Board),
{
    let size = board.size();
    walk(board, row, size, emit);
}

/// Solve with the strategy selected in `config`.
pub fn solve<O>(config: &SolverConfig, observer: &mut O) -> Result<SolveResult, SolveError>
where
    O: SolveObserver + ?Sized,
{
    match config.strategy {
        Strategy::Parallel => run_parallel_search(config, observer),
        Strategy::Sequential => solve_sequential(config, observer),
    }
}

/// Run the whole search on the calling thread.
///
/// Unique ids follow the fixed search order and are reproducible between
/// runs. The worker count in `config` is ignored.
pub fn solve_sequential<O>(
    config: &SolverConfig,
    observer: &mut O,
) -> Result<SolveResult, SolveError>
where
    O: SolveObserver + ?Sized,
{
    config.validate()?;
    let start_time = Instant::now();
    let registry = Registry::new();
    let mut board = Board::new(config.board_size)?;

    info!(board_size = config.board_size, "starting sequential search");
    observer.on_start(&SearchPlan {
        board_size: config.board_size,
        strategy: Strategy::Sequential,
        workers: 1,
        split_depth: 0,
        work_items: 1,
    });

    backtrack(&mut board, 0, &mut |solved: &Board| {
        let classification = registry.record_solution(solved);
        if config.report_solutions {
            observer.on_solution(&SolutionReport {
                board: solved,
                sequence: classification.sequence,
                is_unique: classification.is_unique,
                unique_id: classification.unique_id,
            });
        }
    });

    if config.report_progress {
        observer.on_progress(Progress {
            completed: 1,
            total: 1,
        });
    }

    let mut statistics = SearchStatistics::new(Strategy::Sequential);
    statistics.elapsed_time = start_time.elapsed();
    statistics.work_items = 1;
    statistics.workers = 1;
    statistics.worker_statistics.push(WorkerStatistics {
        worker_id: 0,
        work_items: 1,
        solutions: registry.total_solutions(),
    });

    Ok(SolveResult {
        board_size: config.board_size,
        total_solutions: registry.total_solutions(),
        unique_solutions: registry.unique_solutions(),
        unique_forms: registry.entries(),
        statistics,
    })
}
