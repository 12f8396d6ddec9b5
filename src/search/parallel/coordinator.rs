//! Parallel search coordinator that manages worker threads.

use crate::board::Board;
use crate::error::SolveError;
use crate::search::backtrack;
use crate::search::config::{SolverConfig, Strategy};
use crate::search::parallel::channel::{
    create_channels, CoordinatorChannels, WorkerChannels, WorkerMessage,
};
use crate::search::partition::partition;
use crate::search::result::{
    Progress, SearchPlan, SearchStatistics, SolutionReport, SolveObserver, SolveResult,
    WorkerStatistics,
};
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Run the partitioned search on a pool of worker threads.
///
/// The coordinator (the calling thread) only consumes worker messages and
/// forwards them to `observer`, so rendering never holds up registry updates.
pub fn run_parallel_search<O>(
    config: &SolverConfig,
    observer: &mut O,
) -> Result<SolveResult, SolveError>
where
    O: SolveObserver + ?Sized,
{
    config.validate()?;
    let start_time = Instant::now();
    let board_size = config.board_size;
    let num_workers = config.workers;
    let split_depth = config.effective_split_depth();

    let work_items = partition(board_size, split_depth)?;
    let empty_board = Board::new(board_size)?;
    let total_items = work_items.len();
    info!(
        board_size,
        split_depth,
        work_items = total_items,
        workers = num_workers,
        "partitioned search tree"
    );
    observer.on_start(&SearchPlan {
        board_size,
        strategy: Strategy::Parallel,
        workers: num_workers,
        split_depth,
        work_items: total_items,
    });

    let (coordinator_channels, worker_channels) = create_channels(num_workers, work_items);
    let CoordinatorChannels {
        from_workers,
        registry,
    } = coordinator_channels;
    let report_solutions = config.report_solutions;

    let mut worker_handles = Vec::with_capacity(num_workers);
    for (worker_id, channels) in worker_channels.into_iter().enumerate() {
        let board = empty_board.clone();
        let spawned = thread::Builder::new()
            .name(format!("queens-worker-{}", worker_id))
            .spawn(move || run_worker(worker_id, board, report_solutions, channels));
        match spawned {
            Ok(handle) => worker_handles.push(handle),
            Err(source) => {
                // Hanging up makes running workers stop after their current item.
                drop(from_workers);
                for handle in worker_handles {
                    let _ = handle.join();
                }
                return Err(SolveError::SpawnWorker { worker_id, source });
            }
        }
    }

    let worker_statistics = run_coordinator(
        from_workers,
        total_items,
        config.report_progress,
        observer,
    );

    // Wait for all workers to finish
    for (worker_id, handle) in worker_handles.into_iter().enumerate() {
        handle
            .join()
            .map_err(|_| SolveError::WorkerPanicked { worker_id })?;
    }

    let mut statistics = SearchStatistics::new(Strategy::Parallel);
    statistics.elapsed_time = start_time.elapsed();
    statistics.split_depth = split_depth;
    statistics.work_items = total_items;
    statistics.workers = num_workers;
    statistics.worker_statistics = worker_statistics;

    Ok(SolveResult {
        board_size,
        total_solutions: registry.total_solutions(),
        unique_solutions: registry.unique_solutions(),
        unique_forms: registry.entries(),
        statistics,
    })
}

/// Coordinator loop: forwards reports to the observer until every worker has
/// hung up, and collects per-worker statistics.
fn run_coordinator<O>(
    from_workers: crossbeam_channel::Receiver<WorkerMessage>,
    total_items: usize,
    report_progress: bool,
    observer: &mut O,
) -> Vec<WorkerStatistics>
where
    O: SolveObserver + ?Sized,
{
    let mut worker_stats = Vec::new();
    let mut completed = 0;

    // Ends when all senders are dropped
    for msg in from_workers.iter() {
        match msg {
            WorkerMessage::Solution {
                board,
                classification,
                ..
            } => {
                observer.on_solution(&SolutionReport {
                    board: &board,
                    sequence: classification.sequence,
                    is_unique: classification.is_unique,
                    unique_id: classification.unique_id,
                });
            }
            WorkerMessage::WorkItemDone { .. } => {
                completed += 1;
                if report_progress {
                    observer.on_progress(Progress {
                        completed,
                        total: total_items,
                    });
                }
            }
            WorkerMessage::Finished {
                worker_id,
                work_items,
                solutions,
            } => {
                debug!(worker_id, work_items, solutions, "worker drained");
                worker_stats.push(WorkerStatistics {
                    worker_id,
                    work_items,
                    solutions,
                });
            }
        }
    }

    worker_stats.sort_by_key(|s| s.worker_id);
    worker_stats
}

/// Worker function: claim work items until the queue is drained, searching
/// each subtree on a private board.
///
/// A worker also stops early once the coordinator has hung up.
fn run_worker(
    worker_id: usize,
    mut board: Board,
    report_solutions: bool,
    channels: WorkerChannels,
) {
    let WorkerChannels {
        work,
        to_coordinator,
        registry,
    } = channels;
    let mut work_items = 0u64;
    let mut solutions = 0u64;

    while let Ok(item) = work.recv() {
        board.copy_from(&item.board);
        backtrack(&mut board, item.depth, &mut |solved: &Board| {
            let classification = registry.record_solution(solved);
            solutions += 1;
            if report_solutions {
                let _ = to_coordinator.send(WorkerMessage::Solution {
                    worker_id,
                    board: solved.clone(),
                    classification,
                });
            }
        });
        work_items += 1;
        if to_coordinator
            .send(WorkerMessage::WorkItemDone { worker_id })
            .is_err()
        {
            break;
        }
    }

    let _ = to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        work_items,
        solutions,
    });
}
