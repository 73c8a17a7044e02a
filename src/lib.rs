//! Battleship where each board is sealed under BFV homomorphic encryption and
//! hits are decided by blinding ciphertexts before the owner decrypts them.

mod arbiter;
mod bitboard;
mod board;
mod common;
mod config;
pub mod crypto;
mod encrypted_board;
mod game;
mod logging;
mod player;
mod ship;
pub mod targeting;
pub mod ui;

pub use arbiter::Arbiter;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::Board;
pub use common::*;
pub use config::*;
pub use crypto::{BfvEvaluator, BfvKeyPair, CiphertextOf, Evaluator, KeyPair, PlaintextOf};
pub use encrypted_board::{EncryptedBoard, EncryptedBoardOf};
pub use game::{Game, GameOutcome, GameReport, PlayerReport, TurnState};
pub use logging::init_logging;
pub use player::{Player, PlayerKind};
pub use ship::{Orientation, ShipPlacement};
pub use targeting::{CliTargeting, RandomTargeting, Targeting};
