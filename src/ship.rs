//! Ship placements on the board.

use crate::common::{BoardError, Shots};
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship stamped on the board: its id, length and anchor cell.
///
/// Horizontal ships extend to the right of the anchor, vertical ones downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    id: u32,
    length: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl ShipPlacement {
    /// Build a placement, rejecting zero ids, empty ships and anything that
    /// leaves the grid.
    pub fn new(
        id: u32,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let n = BOARD_SIZE as usize;
        if id == 0 {
            return Err(BoardError::InvalidShipId);
        }
        if length == 0 || length > n {
            return Err(BoardError::ShipTooLong(length));
        }
        let fits = match orientation {
            Orientation::Horizontal => row < n && col + length <= n,
            Orientation::Vertical => col < n && row + length <= n,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self {
            id,
            length,
            row,
            col,
            orientation,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> Result<Shots, BoardError> {
        Ok(Shots::from_cells(self.cells())?)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}
