//! Board representation and queen safety checks
//!
//! A board stores one queen per row: index is the row, value is the column.
//! Rows that have not been assigned yet hold [`UNASSIGNED`].

pub mod symmetry;

use std::fmt;

use crate::error::ConfigError;

pub use symmetry::{canonicalize, CanonicalForm, Transform};

/// Largest supported board size.
///
/// Columns are stored as `u8` and every column must map to a single printable
/// canonical-form symbol.
pub const MAX_BOARD_SIZE: usize = 32;

/// Sentinel for a row without a queen.
pub const UNASSIGNED: u8 = u8::MAX;

/// Returns whether a queen at `(row, col)` conflicts with none of the queens
/// in rows `0..row`.
///
/// A conflict is a shared column or a shared diagonal.
#[inline]
pub fn is_safe(columns: &[u8], row: usize, col: u8) -> bool {
    columns[..row]
        .iter()
        .enumerate()
        .all(|(i, &placed)| placed != col && placed.abs_diff(col) as usize != row - i)
}

/// A (possibly partial) queen placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<u8>,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// Fails for sizes above [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSizeTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            columns: vec![UNASSIGNED; size],
        })
    }

    /// Create a board from explicit column values.
    ///
    /// Returns `None` if the board is larger than [`MAX_BOARD_SIZE`] or any
    /// value is neither a valid column nor [`UNASSIGNED`].
    pub fn from_columns(columns: Vec<u8>) -> Option<Self> {
        let size = columns.len();
        (size <= MAX_BOARD_SIZE
            && columns
                .iter()
                .all(|&c| c == UNASSIGNED || (c as usize) < size))
            .then_some(Self { columns })
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Raw column values, including sentinels for unassigned rows.
    pub fn columns(&self) -> &[u8] {
        &self.columns
    }

    /// Column of the queen in `row`, if one has been placed.
    pub fn column(&self, row: usize) -> Option<u8> {
        self.columns
            .get(row)
            .copied()
            .filter(|&c| c != UNASSIGNED)
    }

    /// Place a queen, overwriting whatever the row held before.
    #[inline]
    pub fn place(&mut self, row: usize, col: u8) {
        self.columns[row] = col;
    }

    /// Number of leading rows that hold a queen.
    pub fn depth(&self) -> usize {
        self.columns
            .iter()
            .take_while(|&&c| c != UNASSIGNED)
            .count()
    }

    /// True once every row holds a queen.
    pub fn is_complete(&self) -> bool {
        self.columns.iter().all(|&c| c != UNASSIGNED)
    }

    /// Check a candidate placement against rows `0..row`.
    #[inline]
    pub fn is_safe(&self, row: usize, col: u8) -> bool {
        is_safe(&self.columns, row, col)
    }

    /// True if the assigned prefix of the board is conflict-free.
    pub fn is_consistent(&self) -> bool {
        let depth = self.depth();
        (0..depth).all(|row| self.is_safe(row, self.columns[row]))
    }

    /// Copy another board's placements into this one without reallocating.
    pub fn copy_from(&mut self, other: &Board) {
        self.columns.copy_from_slice(&other.columns);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for &placed in &self.columns {
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }
                if placed as usize == col {
                    write!(f, "♛")?;
                } else {
                    write!(f, "·")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
