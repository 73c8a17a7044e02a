//! Shot mediation without access to any secret key.
//!
//! For a shot at (row, col) the arbiter takes the defender's ciphertext
//! `Enc(v)`, multiplies it by a fresh random plaintext `r`, and asks the
//! defender to reveal whether `Enc(r * v)` decrypts to zero. Water stays zero;
//! a ship id becomes `r * v`, which is never the literal id. The defender is
//! trusted to report the decryption honestly.

use core::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::common::{Coord, GameError};
use crate::config::{check_blind_range, ConfigError, GameConfig, BLIND_RANGE};
use crate::crypto::{Evaluator, KeyPair};
use crate::player::Player;

/// Mediates shots between two players.
#[derive(Debug, Clone)]
pub struct Arbiter {
    blind_range: RangeInclusive<u64>,
}

impl Default for Arbiter {
    fn default() -> Self {
        Self {
            blind_range: BLIND_RANGE,
        }
    }
}

impl Arbiter {
    /// Arbiter drawing blind scalars from `blind_range`.
    ///
    /// An empty range or one containing 0 is rejected: a zero blind would
    /// turn a ship cell into water.
    pub fn new(blind_range: RangeInclusive<u64>) -> Result<Self, ConfigError> {
        check_blind_range(&blind_range)?;
        Ok(Self { blind_range })
    }

    /// Arbiter for a game played under `config`, after validating it.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.blind_range.clone())
    }

    /// Resolve a shot by `attacker` at `target` on `defender`'s board.
    ///
    /// Coordinates that were already shot resolve to a miss without touching
    /// ciphertexts or the board.
    pub fn process_guess<K, R>(
        &self,
        rng: &mut R,
        attacker: &Player<K>,
        defender: &mut Player<K>,
        target: Coord,
    ) -> Result<bool, GameError>
    where
        K: KeyPair,
        R: Rng + ?Sized,
    {
        let (row, col) = target;
        if defender.board().is_shot(row, col)? {
            debug!(
                "{} fired at already-shot ({}, {}) on {}; miss",
                attacker.name(),
                row,
                col,
                defender.name()
            );
            return Ok(false);
        }

        let cell = defender.encrypted_board().cell(row, col)?;
        let blinded = {
            let evaluator = defender.evaluator();
            let r = evaluator.encode(rng.random_range(self.blind_range.clone()))?;
            evaluator.multiply_plain(cell, &r)?
        };
        let hit = defender.reveal(&blinded)?;

        defender.register_incoming(row, col, hit)?;
        debug!(
            "{} -> {} at ({}, {}): {}",
            attacker.name(),
            defender.name(),
            row,
            col,
            if hit { "hit" } else { "miss" }
        );
        Ok(hit)
    }
}
