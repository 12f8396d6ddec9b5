//! Board symmetries and canonical forms
//!
//! The square board has eight symmetries: the identity, three rotations and
//! four reflections (the dihedral group of order 8). Every solution is mapped
//! to the lexicographically smallest serialization over that group, so two
//! solutions share a canonical form exactly when one is a symmetry of the
//! other.

use std::fmt;

use super::Board;

/// One symbol per column index. ASCII order matches column order.
const SYMBOLS: &[u8; super::MAX_BOARD_SIZE] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Element of the board's symmetry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Identity,
    /// Quarter turn clockwise: `(r, c) -> (c, n-1-r)`
    Rotate90,
    /// Half turn: `(r, c) -> (n-1-r, n-1-c)`
    Rotate180,
    /// Three quarter turns clockwise: `(r, c) -> (n-1-c, r)`
    Rotate270,
    /// Mirror columns: `(r, c) -> (r, n-1-c)`
    FlipHorizontal,
    /// Mirror rows: `(r, c) -> (n-1-r, c)`
    FlipVertical,
    /// Transpose: `(r, c) -> (c, r)`
    FlipDiagonal,
    /// Reflect across the anti-diagonal: `(r, c) -> (n-1-c, n-1-r)`
    FlipAntiDiagonal,
}

impl Transform {
    /// All eight symmetries, identity first.
    pub const ALL: [Transform; 8] = [
        Transform::Identity,
        Transform::Rotate90,
        Transform::Rotate180,
        Transform::Rotate270,
        Transform::FlipHorizontal,
        Transform::FlipVertical,
        Transform::FlipDiagonal,
        Transform::FlipAntiDiagonal,
    ];

    /// Where a queen at `(row, col)` lands on an `n`-sized board.
    #[inline]
    pub fn map(self, n: usize, row: usize, col: usize) -> (usize, usize) {
        let last = n - 1;
        match self {
            Transform::Identity => (row, col),
            Transform::Rotate90 => (col, last - row),
            Transform::Rotate180 => (last - row, last - col),
            Transform::Rotate270 => (last - col, row),
            Transform::FlipHorizontal => (row, last - col),
            Transform::FlipVertical => (last - row, col),
            Transform::FlipDiagonal => (col, row),
            Transform::FlipAntiDiagonal => (last - col, last - row),
        }
    }

    /// Write the transformed placement of a complete board into `out`.
    fn apply_into(self, columns: &[u8], out: &mut [u8]) {
        let n = columns.len();
        for (row, &col) in columns.iter().enumerate() {
            let (new_row, new_col) = self.map(n, row, col as usize);
            out[new_row] = new_col as u8;
        }
    }

    /// Apply this symmetry to a complete board.
    ///
    /// Every row of the result holds exactly one queen because a complete
    /// solution places exactly one queen per column as well.
    pub fn apply(self, board: &Board) -> Board {
        debug_assert!(board.is_complete(), "symmetries act on complete boards");
        // Every slot is overwritten, so the copy only provides the allocation.
        let mut out = board.clone();
        self.apply_into(board.columns(), &mut out.columns);
        out
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => write!(f, "identity"),
            Transform::Rotate90 => write!(f, "rotate-90"),
            Transform::Rotate180 => write!(f, "rotate-180"),
            Transform::Rotate270 => write!(f, "rotate-270"),
            Transform::FlipHorizontal => write!(f, "flip-horizontal"),
            Transform::FlipVertical => write!(f, "flip-vertical"),
            Transform::FlipDiagonal => write!(f, "flip-diagonal"),
            Transform::FlipAntiDiagonal => write!(f, "flip-anti-diagonal"),
        }
    }
}

/// Representative of a symmetry class: the smallest serialization of a
/// solution over all eight transforms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalForm(Box<str>);

impl CanonicalForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[inline]
fn serialize_into(columns: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.extend(columns.iter().map(|&c| SYMBOLS[c as usize]));
}

/// Compute the canonical form of a complete board.
///
/// The identity serialization is the starting candidate; a transform only
/// replaces it when strictly smaller, so ties keep the first one produced.
pub fn canonicalize(board: &Board) -> CanonicalForm {
    debug_assert!(board.is_complete(), "only complete boards have a canonical form");
    let columns = board.columns();
    let mut scratch = vec![0u8; columns.len()];
    let mut best = Vec::with_capacity(columns.len());
    let mut candidate = Vec::with_capacity(columns.len());

    serialize_into(columns, &mut best);
    for transform in &Transform::ALL[1..] {
        transform.apply_into(columns, &mut scratch);
        serialize_into(&scratch, &mut candidate);
        if candidate < best {
            std::mem::swap(&mut best, &mut candidate);
        }
    }

    // SYMBOLS is ASCII, so every byte is its own char.
    let symbols: String = best.iter().map(|&b| b as char).collect();
    CanonicalForm(symbols.into_boxed_str())
}
