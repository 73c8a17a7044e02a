//! Turn state machine driving two players through the arbiter.
//!
//! Each turn walks `TurnStart -> AwaitingGuess -> Resolving -> Scoring ->
//! CheckWin` and then either hands the attack to the other seat or ends in
//! `GameOver`. Seat 0 attacks first.

use log::{debug, info};
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::arbiter::Arbiter;
use crate::common::{Coord, GameError, GuessError};
use crate::crypto::KeyPair;
use crate::player::{Player, PlayerKind};
use crate::targeting::Targeting;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The seat at this index sank every enemy ship.
    Winner(usize),
    /// A human quit before anyone won.
    Cancelled,
}

/// Position of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    TurnStart,
    AwaitingGuess,
    Resolving(Coord),
    Scoring { target: Coord, hit: bool },
    CheckWin,
    GameOver(GameOutcome),
}

/// Two seats, their guess sources, and the arbiter between them.
pub struct Game<K: KeyPair> {
    players: [Player<K>; 2],
    sources: [Box<dyn Targeting>; 2],
    arbiter: Arbiter,
    attacker: usize,
    turn: usize,
    state: TurnState,
}

impl<K: KeyPair> Game<K> {
    pub fn new(players: [Player<K>; 2], sources: [Box<dyn Targeting>; 2], arbiter: Arbiter) -> Self {
        Self {
            players,
            sources,
            arbiter,
            attacker: 0,
            turn: 0,
            state: TurnState::TurnStart,
        }
    }

    pub fn players(&self) -> &[Player<K>; 2] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> &Player<K> {
        &self.players[seat]
    }

    /// Number of turns started so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Seat currently attacking.
    pub fn attacker(&self) -> usize {
        self.attacker
    }

    /// Seat currently defending.
    pub fn defender(&self) -> usize {
        1 - self.attacker
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Advance the state machine by one state and return the new state.
    ///
    /// A quit during `AwaitingGuess` ends the game and surfaces as
    /// `GameError::Cancelled`; neither board is touched on that turn.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<TurnState, GameError> {
        let attacker = self.attacker;
        let defender = self.defender();
        let next = match self.state {
            TurnState::TurnStart => {
                self.turn += 1;
                debug!(
                    "turn {}: {} attacks {}",
                    self.turn,
                    self.players[attacker].name(),
                    self.players[defender].name()
                );
                TurnState::AwaitingGuess
            }
            TurnState::AwaitingGuess => {
                let shots = self.players[defender].board().shots();
                match self.sources[attacker].select_target(rng, &shots) {
                    Ok(target) => TurnState::Resolving(target),
                    Err(GuessError::Quit) => {
                        info!("{} quit on turn {}", self.players[attacker].name(), self.turn);
                        self.state = TurnState::GameOver(GameOutcome::Cancelled);
                        return Err(GameError::Cancelled);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            TurnState::Resolving(target) => {
                let (att, def) = seats_mut(&mut self.players, attacker);
                let hit = self.arbiter.process_guess(rng, att, def, target)?;
                self.sources[attacker].handle_guess_result(target, hit);
                self.sources[defender].handle_opponent_guess(target, hit);
                TurnState::Scoring { target, hit }
            }
            TurnState::Scoring { target: (row, col), hit } => {
                if hit {
                    self.players[attacker].record_hit();
                    let board = self.players[defender].board();
                    if let Some(ship) = board.ship_at(row, col).filter(|s| board.is_sunk(s.id())) {
                        info!(
                            "{} sank {}'s ship {} (length {})",
                            self.players[attacker].name(),
                            self.players[defender].name(),
                            ship.id(),
                            ship.length()
                        );
                    }
                }
                TurnState::CheckWin
            }
            TurnState::CheckWin => {
                if self.players[defender].board().all_sunk() {
                    info!(
                        "{} wins after {} turns",
                        self.players[attacker].name(),
                        self.turn
                    );
                    TurnState::GameOver(GameOutcome::Winner(attacker))
                } else {
                    self.attacker = defender;
                    TurnState::TurnStart
                }
            }
            TurnState::GameOver(_) => return Err(GameError::GameOver),
        };
        self.state = next;
        Ok(next)
    }

    /// Run turns until the game ends. Cancellation is reported as
    /// `GameOutcome::Cancelled`, not as an error.
    pub fn play(&mut self, rng: &mut SmallRng) -> Result<GameOutcome, GameError> {
        if let Some(outcome) = self.outcome() {
            return Ok(outcome);
        }
        loop {
            match self.step(rng) {
                Ok(TurnState::GameOver(outcome)) => return Ok(outcome),
                Ok(_) => {}
                Err(GameError::Cancelled) => return Ok(GameOutcome::Cancelled),
                Err(e) => return Err(e),
            }
        }
    }

    /// Summary of the game so far.
    pub fn report(&self) -> GameReport {
        let outcome = self.outcome();
        GameReport {
            turns: self.turn,
            winner: match outcome {
                Some(GameOutcome::Winner(seat)) => Some(self.players[seat].name().to_string()),
                _ => None,
            },
            cancelled: outcome == Some(GameOutcome::Cancelled),
            players: self
                .players
                .iter()
                .map(|p| PlayerReport {
                    name: p.name().to_string(),
                    kind: p.kind(),
                    score: p.score(),
                    hits_taken: p.board().hit_count(),
                    ships_sunk: p.board().ships_sunk(),
                    ship_cells: p.board().total_ship_cells(),
                })
                .collect(),
        }
    }
}

fn seats_mut<K: KeyPair>(players: &mut [Player<K>; 2], attacker: usize) -> (&Player<K>, &mut Player<K>) {
    let [first, second] = players;
    if attacker == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

/// Serializable end-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub turns: usize,
    pub winner: Option<String>,
    pub cancelled: bool,
    pub players: Vec<PlayerReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerReport {
    pub name: String,
    pub kind: PlayerKind,
    /// Hits landed on the opponent.
    pub score: usize,
    /// Hits received on this player's own board.
    pub hits_taken: usize,
    pub ships_sunk: usize,
    pub ship_cells: usize,
}
