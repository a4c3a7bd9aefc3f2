//! The outcome grid filled by the recurrences.
//!
//! Cell `(i, j)` holds the probability that the player wins when the enemy
//! still needs `i` normal hits to finish the player and the player still
//! needs `j` normal hits to finish the enemy. Column 0 is a win, row 0
//! (outside column 0) is a loss.

use crate::error::{ArenaError, ArenaResult};
use crate::rational::Rational;

/// Largest number of cells a table may hold.
pub const MAX_CELLS: usize = 1_000_000;

/// An `(m + 1) x (n + 1)` grid of win probabilities.
#[derive(Debug, Clone)]
pub struct OutcomeTable {
    rows: usize,
    cols: usize,
    cells: Vec<Rational>,
}

impl OutcomeTable {
    /// Create a table for `m` hits against the player and `n` against the
    /// enemy, with the boundary already set.
    ///
    /// Fails with [`ArenaError::TableTooLarge`] if the table would exceed
    /// [`MAX_CELLS`].
    pub fn new(m: u32, n: u32) -> ArenaResult<Self> {
        let too_large = || ArenaError::TableTooLarge { m, n };
        let rows = dimension(m).ok_or_else(too_large)?;
        let cols = dimension(n).ok_or_else(too_large)?;
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or_else(too_large)?;
        let mut cells = vec![Rational::zero(); size];
        for first in cells.iter_mut().step_by(cols) {
            *first = Rational::one();
        }
        Ok(Self { rows, cols, cells })
    }

    /// Hits the enemy needs against the player (`m`).
    pub fn m(&self) -> usize {
        self.rows - 1
    }

    /// Hits the player needs against the enemy (`n`).
    pub fn n(&self) -> usize {
        self.cols - 1
    }

    /// Read cell `(i, j)`. A negative coordinate reads index 0 in that
    /// dimension, so an overkill strike lands on the resolved boundary.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate exceeds the table size. The recurrences only
    /// ever read at or below the cell they are filling.
    pub fn get(&self, i: isize, j: isize) -> &Rational {
        let i = if i < 0 { 0 } else { i as usize };
        let j = if j < 0 { 0 } else { j as usize };
        &self.cells[i * self.cols + j]
    }

    /// Store an interior cell.
    pub(crate) fn set(&mut self, i: usize, j: usize, value: Rational) {
        debug_assert!(i >= 1 && j >= 1, "boundary cells are fixed");
        self.cells[i * self.cols + j] = value;
    }

    /// The final answer, cell `(m, n)`.
    pub fn corner(&self) -> &Rational {
        &self.cells[self.rows * self.cols - 1]
    }
}

fn dimension(hits: u32) -> Option<usize> {
    usize::try_from(hits).ok()?.checked_add(1)
}
