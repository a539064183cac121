use crate::error::EngineError;
use crate::{HEIGHT, WIDTH};

/// The owner of a single board cell
///
/// The discriminants are the values exposed by [`Board::snapshot`].
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty = 0,
    Human = 1,
    Ai = 2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The opposing piece; `Empty` has no opponent and maps to itself
    pub fn other(self) -> Cell {
        match self {
            Cell::Human => Cell::Ai,
            Cell::Ai => Cell::Human,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A fixed 7x6 grid of cells
///
/// Cells are stored left-to-right, bottom-to-top: row 0 is the bottom row,
/// so gravity fills rows in ascending order. An occupied cell is never
/// overwritten except through [`Board::reset`] or the search's single-cell
/// undo via [`Board::clear`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Returns every cell to `Empty`
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; WIDTH * HEIGHT];
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// Writes `piece` at (row, column) without validation
    ///
    /// Callers must resolve `row` via [`Board::next_open_row`] first;
    /// out-of-range indices are a caller bug.
    pub fn place(&mut self, row: usize, column: usize, piece: Cell) {
        self.cells[column + WIDTH * row] = piece;
    }

    /// Empties a single cell, undoing a trial placement during search
    ///
    /// A placement only ever writes one previously-empty cell, so clearing
    /// that cell restores the exact prior board state.
    pub fn clear(&mut self, row: usize, column: usize) {
        self.cells[column + WIDTH * row] = Cell::Empty;
    }

    /// Whether a piece can still be dropped into `column`
    ///
    /// Takes a signed index so a transport layer can pass raw input through;
    /// anything outside `[0, WIDTH)` is rejected with `OutOfRangeColumn`.
    pub fn is_column_playable(&self, column: i32) -> Result<bool, EngineError> {
        if column < 0 || column >= WIDTH as i32 {
            return Err(EngineError::OutOfRangeColumn(column));
        }
        Ok(self.get(HEIGHT - 1, column as usize).is_empty())
    }

    /// The row a dropped piece would land in, scanning bottom-to-top
    ///
    /// `None` means the column is full; callers that checked playability
    /// first may treat it as an invariant violation.
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.get(row, column).is_empty())
    }

    /// Playable columns in ascending order
    ///
    /// This is the authoritative move-enumeration order for search, and it
    /// fixes the first-enumerated-column-wins tie-break.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| self.get(HEIGHT - 1, column).is_empty())
            .collect()
    }

    /// The grid as rows x columns of `{0, 1, 2}`, row 0 at the bottom
    ///
    /// This is the serialization surface for the transport layer; the wire
    /// format around it is the collaborator's business.
    pub fn snapshot(&self) -> [[u8; WIDTH]; HEIGHT] {
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                grid[row][column] = self.get(row, column) as u8;
            }
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
