//! Shared types: coordinates, the shot overlay and error enums.

use core::fmt;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::config::BOARD_SIZE;

/// A board coordinate as (row, col).
pub type Coord = (usize, usize);

/// Cell set sized for the game board.
pub type Shots = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Coordinate lies outside the board.
    OutOfBounds(Coord),
    /// Ship id 0 is reserved for water.
    InvalidShipId,
    /// A ship with this id is already on the board.
    ShipAlreadyPlaced(u32),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the grid.
    ShipOutOfBounds,
    /// Ship length is zero or longer than the board side.
    ShipTooLong(usize),
    /// Random placement ran out of attempts for a ship of this length.
    UnableToPlaceShip(usize),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds((r, c)) => write!(f, "Coordinate ({}, {}) is off the board", r, c),
            BoardError::InvalidShipId => write!(f, "Ship id 0 is reserved for water"),
            BoardError::ShipAlreadyPlaced(id) => write!(f, "Ship {} is already placed on the board", id),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooLong(len) => write!(f, "Ship length {} does not fit the board", len),
            BoardError::UnableToPlaceShip(len) => {
                write!(f, "Unable to place ship of length {}", len)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Why a guess source produced no coordinate.
#[derive(Debug)]
pub enum GuessError {
    /// The human asked to leave the game.
    Quit,
    /// Every cell on the target board has already been shot.
    NoTargets,
    /// Reading input or writing a prompt failed.
    Io(std::io::Error),
}

impl From<std::io::Error> for GuessError {
    fn from(err: std::io::Error) -> Self {
        GuessError::Io(err)
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::Quit => write!(f, "Player quit"),
            GuessError::NoTargets => write!(f, "No unshot cells left"),
            GuessError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GuessError {}

/// Errors surfaced by the turn loop.
#[derive(Debug)]
pub enum GameError {
    /// A human quit while a guess was awaited.
    Cancelled,
    /// The game already finished.
    GameOver,
    Board(BoardError),
    Guess(GuessError),
    /// The encryption backend failed.
    Crypto(anyhow::Error),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<GuessError> for GameError {
    fn from(err: GuessError) -> Self {
        match err {
            GuessError::Quit => GameError::Cancelled,
            other => GameError::Guess(other),
        }
    }
}

impl From<anyhow::Error> for GameError {
    fn from(err: anyhow::Error) -> Self {
        GameError::Crypto(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Cancelled => write!(f, "Game cancelled"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Guess(e) => write!(f, "Guess error: {}", e),
            GameError::Crypto(e) => write!(f, "Encryption error: {:#}", e),
        }
    }
}

impl std::error::Error for GameError {}
