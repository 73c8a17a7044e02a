//! Players: a sealed board, its ciphertext image and the keys behind it.

use core::fmt;

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::crypto::{BfvKeyPair, CiphertextOf, KeyPair};
use crate::encrypted_board::{EncryptedBoard, EncryptedBoardOf};

/// Who drives a player's guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Automated,
}

/// A participant: identity, plaintext board, its encrypted image, the key
/// pair that produced it, and the number of hits landed on the opponent.
///
/// The key pair never leaves the player. Other parties get the public
/// evaluator and the ciphertexts; decryption happens through [`Player::reveal`].
pub struct Player<K: KeyPair> {
    name: String,
    kind: PlayerKind,
    board: Board,
    encrypted: EncryptedBoardOf<K>,
    keys: K,
    score: usize,
}

impl<K: KeyPair> Player<K> {
    /// Bind `board` and `keys` to a new player, encrypting the board once.
    pub fn new(
        name: impl Into<String>,
        kind: PlayerKind,
        board: Board,
        mut keys: K,
    ) -> anyhow::Result<Self> {
        let encrypted = EncryptedBoard::from_board(&board, &mut keys)?;
        Ok(Self {
            name: name.into(),
            kind,
            board,
            encrypted,
            keys,
            score: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Record a resolved shot on this player's board.
    ///
    /// The ship layout is sealed once encrypted; the shot overlay is the only
    /// thing that changes afterwards.
    pub(crate) fn register_incoming(
        &mut self,
        row: usize,
        col: usize,
        hit: bool,
    ) -> Result<bool, BoardError> {
        self.board.register_shot(row, col, hit)
    }

    pub fn encrypted_board(&self) -> &EncryptedBoardOf<K> {
        &self.encrypted
    }

    /// Public evaluation capability for this player's ciphertexts.
    pub fn evaluator(&self) -> &K::Evaluator {
        self.keys.evaluator()
    }

    /// Decrypt a blinded ciphertext and report whether it is nonzero.
    ///
    /// Only the zero/nonzero fact leaves this method.
    pub fn reveal(&self, blinded: &CiphertextOf<K>) -> anyhow::Result<bool> {
        let pt = self.keys.decrypt(blinded)?;
        Ok(self.keys.decode_first_slot(&pt)? != 0)
    }

    /// Hits this player has landed on the opponent.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn record_hit(&mut self) {
        self.score += 1;
    }
}

impl Player<BfvKeyPair> {
    /// Player with a fleet from `config` placed using `rng`, and a fresh BFV
    /// key pair generated from `key_seed`.
    pub fn with_random_board<R: Rng + ?Sized>(
        name: impl Into<String>,
        kind: PlayerKind,
        config: &GameConfig,
        rng: &mut R,
        key_seed: [u8; 32],
    ) -> anyhow::Result<Self> {
        let mut board = Board::new();
        board.place_ships_randomly(rng, &config.ship_lengths)?;
        let keys = BfvKeyPair::new(&config.bfv, key_seed)?;
        Self::new(name, kind, board, keys)
    }
}

impl<K: KeyPair> fmt::Debug for Player<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("board", &self.board)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}
