//! Plaintext board: ship layout plus the shot overlay.

use core::fmt;

use crate::common::{BoardError, Coord, Shots};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipPlacement};
use rand::Rng;

const N: usize = BOARD_SIZE as usize;

/// Ship layout and shot record for one player.
///
/// `cell_owner` is fixed once ships are placed; afterwards only the shot
/// overlay and the hit counter change.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cell_owner: [[u32; N]; N],
    ships: Vec<ShipPlacement>,
    ship_map: Shots,
    shots: Shots,
    total_ship_cells: usize,
    hit_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (all water, nothing shot).
    pub fn new() -> Self {
        Board {
            cell_owner: [[0; N]; N],
            ships: Vec::new(),
            ship_map: Shots::new(),
            shots: Shots::new(),
            total_ship_cells: 0,
            hit_count: 0,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        N
    }

    /// Ship id at (row, col), 0 for water.
    pub fn cell_owner(&self, row: usize, col: usize) -> Result<u32, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cell_owner[row][col])
    }

    /// Whether (row, col) has already been fired upon.
    pub fn is_shot(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.shots.get(row, col)?)
    }

    /// The shot overlay. This is all a guess source gets to see.
    pub fn shots(&self) -> Shots {
        self.shots
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> Shots {
        self.ship_map
    }

    pub fn ships(&self) -> &[ShipPlacement] {
        &self.ships
    }

    pub fn total_ship_cells(&self) -> usize {
        self.total_ship_cells
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.total_ship_cells.saturating_sub(self.hit_count)
    }

    /// Stamp a ship with `id` onto the board.
    pub fn place_ship(
        &mut self,
        id: u32,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.ships.iter().any(|s| s.id() == id) {
            return Err(BoardError::ShipAlreadyPlaced(id));
        }
        let ship = ShipPlacement::new(id, length, row, col, orientation)?;
        let mask = ship.mask()?;
        if !(self.ship_map & mask).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in ship.cells() {
            self.cell_owner[r][c] = id;
        }
        self.ship_map = self.ship_map | mask;
        self.total_ship_cells += length;
        self.ships.push(ship);
        Ok(())
    }

    /// Clear the board and place one ship per entry of `lengths`, with ids
    /// 1, 2, ... in order, at random non-overlapping positions.
    ///
    /// Each ship gets `MAX_PLACEMENT_ATTEMPTS` samples. If one runs out the
    /// board is left empty and `UnableToPlaceShip` is returned.
    pub fn place_ships_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<(), BoardError> {
        *self = Board::new();
        for (i, &len) in lengths.iter().enumerate() {
            let id = i as u32 + 1;
            if let Err(e) = self.place_randomly(rng, id, len) {
                *self = Board::new();
                return Err(e);
            }
        }
        Ok(())
    }

    fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        id: u32,
        length: usize,
    ) -> Result<(), BoardError> {
        if length == 0 || length > N {
            return Err(BoardError::ShipTooLong(length));
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical { N - length } else { N - 1 };
            let max_c = if orient == Orientation::Horizontal { N - length } else { N - 1 };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            match self.place_ship(id, length, r, c, orient) {
                Ok(()) => return Ok(()),
                Err(BoardError::ShipOverlaps) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip(length))
    }

    /// Record a shot at (row, col).
    ///
    /// Returns `Ok(false)` and changes nothing when the cell was already
    /// shot. Otherwise marks it and counts a hit when `hit` is set.
    pub fn register_shot(&mut self, row: usize, col: usize, hit: bool) -> Result<bool, BoardError> {
        Self::check_bounds(row, col)?;
        if self.shots.get(row, col)? {
            return Ok(false);
        }
        self.shots.set(row, col)?;
        if hit {
            self.hit_count += 1;
        }
        Ok(true)
    }

    /// Returns `true` once every ship cell has been hit.
    pub fn all_sunk(&self) -> bool {
        self.hit_count >= self.total_ship_cells
    }

    /// Whether every cell of ship `id` has been shot.
    pub fn is_sunk(&self, id: u32) -> bool {
        self.ships
            .iter()
            .find(|s| s.id() == id)
            .is_some_and(|s| s.cells().all(|(r, c)| self.shots.get(r, c).unwrap_or(false)))
    }

    /// Ship covering (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&ShipPlacement> {
        self.ships.iter().find(|s| s.contains(row, col))
    }

    /// Number of ships with every cell shot.
    pub fn ships_sunk(&self) -> usize {
        self.ships.iter().filter(|s| self.is_sunk(s.id())).count()
    }

    /// Cells not yet fired upon, row-major.
    pub fn unshot_cells(&self) -> Vec<Coord> {
        (!self.shots).iter_set_bits().collect()
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= N || col >= N {
            Err(BoardError::OutOfBounds((row, col)))
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("shots", &self.shots)
            .field("total_ship_cells", &self.total_ship_cells)
            .field("hit_count", &self.hit_count)
            .finish()
    }
}
