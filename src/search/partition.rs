//! Splitting the search tree into independent work items

use crate::board::Board;
use crate::error::ConfigError;

use super::walk;

/// A conflict-free partial board whose subtree is searched by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Rows `0..depth` hold queens, the rest are unassigned.
    pub board: Board,
    /// First row the worker still has to fill.
    pub depth: usize,
}

/// Enumerate every valid partial board with exactly `split_depth` queens.
///
/// Uses the same backtracking as the full search, stopping at `split_depth`,
/// so only prefixes that pass the safety check become work items. Items are
/// returned in search order, which makes the concatenation of their subtrees
/// identical to a search from row 0. A `split_depth` past the last row is
/// clamped to `board_size`.
pub fn partition(board_size: usize, split_depth: usize) -> Result<Vec<WorkItem>, ConfigError> {
    let split_depth = split_depth.min(board_size);
    let mut board = Board::new(board_size)?;
    let mut items = Vec::new();
    walk(&mut board, 0, split_depth, &mut |partial: &Board| {
        items.push(WorkItem {
            board: partial.clone(),
            depth: split_depth,
        });
    });
    Ok(items)
}
