#![allow(dead_code)]

use std::collections::VecDeque;

use he_battleship::{
    BfvConfig, BfvKeyPair, Board, Coord, Evaluator, GuessError, KeyPair, Orientation, Player,
    PlayerKind, Shots, Targeting,
};
use rand::rngs::SmallRng;

/// Backend that stores values in the clear. Lets game tests run without BFV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clear(pub u64);

#[derive(Debug, Default)]
pub struct ClearEvaluator;

impl Evaluator for ClearEvaluator {
    type Plaintext = u64;
    type Ciphertext = Clear;

    fn encode(&self, value: u64) -> anyhow::Result<u64> {
        Ok(value)
    }

    fn multiply_plain(&self, ciphertext: &Clear, plaintext: &u64) -> anyhow::Result<Clear> {
        Ok(Clear(ciphertext.0.wrapping_mul(*plaintext)))
    }
}

#[derive(Debug, Default)]
pub struct ClearKeyPair {
    evaluator: ClearEvaluator,
}

impl KeyPair for ClearKeyPair {
    type Evaluator = ClearEvaluator;

    fn evaluator(&self) -> &ClearEvaluator {
        &self.evaluator
    }

    fn encrypt(&mut self, plaintext: &u64) -> anyhow::Result<Clear> {
        Ok(Clear(*plaintext))
    }

    fn decrypt(&self, ciphertext: &Clear) -> anyhow::Result<u64> {
        Ok(ciphertext.0)
    }

    fn decode_first_slot(&self, plaintext: &u64) -> anyhow::Result<u64> {
        Ok(*plaintext)
    }
}

/// Guess source replaying a fixed list of shots, then quitting.
pub struct ScriptedTargeting {
    moves: VecDeque<Coord>,
}

impl ScriptedTargeting {
    pub fn new(moves: &[Coord]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Targeting for ScriptedTargeting {
    fn select_target(&mut self, _rng: &mut SmallRng, _shots: &Shots) -> Result<Coord, GuessError> {
        self.moves.pop_front().ok_or(GuessError::Quit)
    }
}

/// Board holding a single two-cell ship at row 0, columns 0-1.
pub fn one_destroyer_board() -> Board {
    let mut board = Board::new();
    board
        .place_ship(1, 2, 0, 0, Orientation::Horizontal)
        .unwrap();
    board
}

pub fn bfv_player(name: &str, board: Board, seed: u8) -> Player<BfvKeyPair> {
    let keys = BfvKeyPair::new(&BfvConfig::default(), [seed; 32]).unwrap();
    Player::new(name, PlayerKind::Automated, board, keys).unwrap()
}

pub fn clear_player(name: &str, board: Board) -> Player<ClearKeyPair> {
    Player::new(name, PlayerKind::Automated, board, ClearKeyPair::default()).unwrap()
}
