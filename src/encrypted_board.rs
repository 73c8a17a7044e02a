//! One-time per-cell encryption of a player's board.

use crate::board::Board;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::crypto::{CiphertextOf, Evaluator, KeyPair};

/// Per-cell ciphertexts of a finalized [`Board`], row-major.
///
/// Cell `(r, c)` encrypts the ship id stamped there, 0 for water. Built once
/// and never modified; shots only touch the plaintext board's overlay.
pub struct EncryptedBoard<C> {
    cells: Vec<C>,
}

impl<C> EncryptedBoard<C> {
    /// Encrypt every cell of `board` under `keys`.
    pub fn from_board<K>(board: &Board, keys: &mut K) -> anyhow::Result<Self>
    where
        K: KeyPair,
        K::Evaluator: Evaluator<Ciphertext = C>,
    {
        let n = BOARD_SIZE as usize;
        let mut cells = Vec::with_capacity(n * n);
        for r in 0..n {
            for c in 0..n {
                let pt = keys.evaluator().encode(u64::from(board.cell_owner(r, c)?))?;
                cells.push(keys.encrypt(&pt)?);
            }
        }
        Ok(Self { cells })
    }

    /// Ciphertext at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<&C, BoardError> {
        let n = BOARD_SIZE as usize;
        if row >= n || col >= n {
            return Err(BoardError::OutOfBounds((row, col)));
        }
        Ok(&self.cells[row * n + col])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Encrypted board type produced by key pair `K`.
pub type EncryptedBoardOf<K> = EncryptedBoard<CiphertextOf<K>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BfvConfig;
    use crate::crypto::BfvKeyPair;
    use crate::ship::Orientation;

    #[test]
    fn cells_decrypt_to_ship_ids() {
        let mut board = Board::new();
        board.place_ship(1, 3, 2, 2, Orientation::Horizontal).unwrap();
        board.place_ship(2, 2, 7, 9, Orientation::Vertical).unwrap();
        let mut keys = BfvKeyPair::new(&BfvConfig::default(), [9; 32]).unwrap();
        let enc: EncryptedBoardOf<BfvKeyPair> = EncryptedBoard::from_board(&board, &mut keys).unwrap();
        assert_eq!(enc.len(), 100);

        for (r, c, expected) in [(2, 2, 1), (2, 4, 1), (2, 5, 0), (8, 9, 2), (0, 0, 0)] {
            let pt = keys.decrypt(enc.cell(r, c).unwrap()).unwrap();
            assert_eq!(keys.decode_first_slot(&pt).unwrap(), expected);
        }
        assert!(matches!(enc.cell(0, 10), Err(BoardError::OutOfBounds((0, 10)))));
    }
}
