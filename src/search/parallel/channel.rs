//! Work queue and reporting channels between workers and the coordinator.

use crate::board::Board;
use crate::search::partition::WorkItem;
use crate::search::registry::{Classification, Registry};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker recorded a solution that should be reported.
    Solution {
        worker_id: usize,
        board: Board,
        classification: Classification,
    },
    /// Worker finished searching one work item.
    WorkItemDone { worker_id: usize },
    /// Worker found the queue drained and is exiting.
    Finished {
        worker_id: usize,
        work_items: u64,
        solutions: u64,
    },
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Shared queue of unclaimed work items.
    pub work: Receiver<WorkItem>,
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Registry every solution is recorded in.
    pub registry: Arc<Registry>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared registry.
    pub registry: Arc<Registry>,
}

/// Create channels for `num_workers` workers and queue every work item.
///
/// The queue is closed once filled, so a worker's `recv` fails exactly when
/// no work is left. The coordinator keeps no sender of its own: its receiver
/// disconnects once every worker has exited.
pub fn create_channels(
    num_workers: usize,
    work_items: Vec<WorkItem>,
) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let registry = Arc::new(Registry::new());

    let (work_tx, work_rx) = unbounded();
    for item in work_items {
        // The receiver is alive in this scope, so send cannot fail.
        let _ = work_tx.send(item);
    }
    drop(work_tx);

    // Unbounded channel from workers to coordinator (workers shouldn't block)
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            work: work_rx.clone(),
            to_coordinator: worker_tx.clone(),
            registry: Arc::clone(&registry),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        registry,
    };

    (coordinator, worker_channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::partition::partition;

    #[test]
    fn test_create_channels() {
        let items = partition(5, 2).unwrap();
        let expected = items.len();
        let (coordinator, workers) = create_channels(3, items);

        assert_eq!(workers.len(), 3);
        assert_eq!(workers[0].work.len(), expected);
        assert!(Arc::ptr_eq(&coordinator.registry, &workers[2].registry));
    }

    #[test]
    fn test_work_is_claimed_once() {
        let items = partition(6, 2).unwrap();
        let expected = items.len();
        let (_coordinator, workers) = create_channels(2, items);

        let mut claimed = 0;
        while workers[0].work.recv().is_ok() {
            claimed += 1;
            if workers[1].work.recv().is_ok() {
                claimed += 1;
            }
        }
        assert_eq!(claimed, expected);
        assert!(workers[1].work.try_recv().is_err());
    }

    #[test]
    fn test_coordinator_disconnects_after_workers_drop() {
        let (coordinator, workers) = create_channels(2, Vec::new());

        workers[0]
            .to_coordinator
            .send(WorkerMessage::WorkItemDone { worker_id: 0 })
            .unwrap();
        drop(workers);

        let received: Vec<_> = coordinator.from_workers.iter().collect();
        assert_eq!(received.len(), 1);
        match &received[0] {
            WorkerMessage::WorkItemDone { worker_id } => assert_eq!(*worker_id, 0),
            other => panic!("Unexpected message: {:?}", other),
        }
    }
}
