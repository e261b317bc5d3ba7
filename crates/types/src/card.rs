use crate::ids::CardId;
use serde::{Deserialize, Serialize};

/// Cells per row and per column.
pub const GRID_SIZE: usize = 5;
pub const CARD_CELLS: usize = GRID_SIZE * GRID_SIZE;
pub const PLAYABLE_CELLS: usize = CARD_CELLS - 1;

/// Row-major index of the free space (row 2, column 2).
pub const FREE_SPACE_INDEX: usize = 12;
/// Sentinel stored in the free-space cell.
pub const FREE_SPACE: u8 = 0;

/// A 5×5 bingo card stored row-major.
///
/// Index 12 always holds [`FREE_SPACE`]; the remaining 24 cells hold the
/// playable numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BingoCard {
    pub id: CardId,
    pub numbers: [u8; CARD_CELLS],
}

impl BingoCard {
    pub fn new(id: impl Into<CardId>, numbers: [u8; CARD_CELLS]) -> Self {
        Self {
            id: id.into(),
            numbers,
        }
    }

    /// Builds a card from the 24 playable numbers in row-major order,
    /// splicing the free space back in at index 12.
    pub fn from_playable(id: impl Into<CardId>, playable: [u8; PLAYABLE_CELLS]) -> Self {
        let mut numbers = [FREE_SPACE; CARD_CELLS];
        numbers[..FREE_SPACE_INDEX].copy_from_slice(&playable[..FREE_SPACE_INDEX]);
        numbers[FREE_SPACE_INDEX + 1..].copy_from_slice(&playable[FREE_SPACE_INDEX..]);
        Self::new(id, numbers)
    }

    /// The 24 non-center numbers in row-major order.
    pub fn playable_numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !Self::is_free_space(*idx))
            .map(|(_, n)| *n)
    }

    pub fn number_at(&self, index: usize) -> Option<u8> {
        self.numbers.get(index).copied()
    }

    /// The five cells of a column, top to bottom.
    pub fn column(&self, column: usize) -> [u8; GRID_SIZE] {
        std::array::from_fn(|row| self.numbers[row * GRID_SIZE + column])
    }

    pub fn is_free_space(index: usize) -> bool {
        index == FREE_SPACE_INDEX
    }
}
