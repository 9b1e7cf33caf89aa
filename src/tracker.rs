//! Per-player line tallies for O(1) win checks.
//!
//! A player wins exactly when one of their row, column, or diagonal
//! tallies reaches the board dimension, so instead of rescanning the
//! board after every move the engine compares one cached integer.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Running tallies of one player's marks per row, column, and diagonal,
/// with a cached running maximum.
///
/// The cache is maintained incrementally on every recorded mark and is
/// never recomputed by scanning. Counters only grow between resets and
/// are bounded by the board dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTracker {
    size: usize,
    rows: Vec<u16>,
    cols: Vec<u16>,
    diagonal: u16,
    anti_diagonal: u16,
    max_line: u16,
}

impl PointTracker {
    /// Creates a zeroed tracker for a `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            rows: vec![0; size],
            cols: vec![0; size],
            diagonal: 0,
            anti_diagonal: 0,
            max_line: 0,
        }
    }

    /// Records one mark at the given coordinates.
    ///
    /// Bumps the row and column tallies, the main diagonal when
    /// `row == col`, and the anti-diagonal when `row + col + 1 == size`.
    /// The anti-diagonal form is the zero-indexed identity for cells on
    /// the top-right-to-bottom-left diagonal; any other offset silently
    /// misses those wins.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn record_mark(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.size && col < self.size);
        self.rows[row] += 1;
        self.max_line = self.max_line.max(self.rows[row]);
        self.cols[col] += 1;
        self.max_line = self.max_line.max(self.cols[col]);
        if row == col {
            self.diagonal += 1;
            self.max_line = self.max_line.max(self.diagonal);
        }
        if row + col + 1 == self.size {
            self.anti_diagonal += 1;
            self.max_line = self.max_line.max(self.anti_diagonal);
        }
    }

    /// The highest number of this player's marks in any single line.
    pub fn max_line(&self) -> u16 {
        self.max_line
    }

    /// Zeroes every counter and the cached maximum.
    pub fn reset(&mut self) {
        self.rows.fill(0);
        self.cols.fill(0);
        self.diagonal = 0;
        self.anti_diagonal = 0;
        self.max_line = 0;
    }
}
