use crate::ids::CardIdSequence;
use bingo_types::{column_range, BingoCard, CARD_CELLS, FREE_SPACE, GRID_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// How many numbers each column contributes. N gives up one slot to the free space.
const COLUMN_COUNTS: [usize; GRID_SIZE] = [5, 5, 4, 5, 5];
const N_COLUMN: usize = 2;
const FREE_SPACE_ROW: usize = 2;

/// Produces cards under the classic B/I/N/G/O column constraints.
#[derive(Debug, Clone)]
pub struct CardGenerator<R: Rng = StdRng> {
    rng: R,
    sequence: CardIdSequence,
}

impl CardGenerator<StdRng> {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A reproducible generator, for tests and simulations.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CardGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CardGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            sequence: CardIdSequence::default(),
        }
    }

    pub fn with_sequence(mut self, sequence: CardIdSequence) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn sequence(&self) -> &CardIdSequence {
        &self.sequence
    }

    pub fn sequence_mut(&mut self) -> &mut CardIdSequence {
        &mut self.sequence
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Draws a fresh card and takes the next id from the sequence.
    pub fn generate(&mut self) -> BingoCard {
        let numbers = self.generate_numbers();
        let id = self.sequence.next_id();
        BingoCard::new(id, numbers)
    }

    /// Fills the 25-slot grid row-major, with the free space at index 12.
    ///
    /// Columns are left in draw order rather than sorted so the printed card
    /// has no predictable top-to-bottom progression.
    pub fn generate_numbers(&mut self) -> [u8; CARD_CELLS] {
        let columns: [Vec<u8>; GRID_SIZE] = std::array::from_fn(|col| {
            let mut picked = pick_unique(&mut self.rng, COLUMN_COUNTS[col], column_range(col));
            if col == N_COLUMN {
                picked.insert(FREE_SPACE_ROW, FREE_SPACE);
            }
            picked
        });

        std::array::from_fn(|idx| columns[idx % GRID_SIZE][idx / GRID_SIZE])
    }
}

/// Rejection-samples `count` distinct values from `range`, keeping draw order.
fn pick_unique<R: Rng>(rng: &mut R, count: usize, range: RangeInclusive<u8>) -> Vec<u8> {
    let mut picked = Vec::with_capacity(count + 1);
    while picked.len() < count {
        let n = rng.random_range(range.clone());
        if !picked.contains(&n) {
            picked.push(n);
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_types::{FREE_SPACE_INDEX, PLAYABLE_CELLS};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn assert_well_formed(numbers: &[u8; CARD_CELLS]) {
        assert_eq!(numbers[FREE_SPACE_INDEX], FREE_SPACE);

        let playable: HashSet<u8> = numbers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != FREE_SPACE_INDEX)
            .map(|(_, n)| *n)
            .collect();
        assert_eq!(playable.len(), PLAYABLE_CELLS, "playable numbers must be distinct");

        for col in 0..GRID_SIZE {
            let range = column_range(col);
            let in_column: Vec<u8> = (0..GRID_SIZE)
                .map(|row| numbers[row * GRID_SIZE + col])
                .filter(|n| *n != FREE_SPACE)
                .collect();
            assert_eq!(in_column.len(), COLUMN_COUNTS[col]);
            assert!(
                in_column.iter().all(|n| range.contains(n)),
                "column {} out of range: {:?}",
                col,
                in_column
            );
        }
    }

    #[test]
    fn test_generate_assigns_sequential_ids() {
        let mut generator = CardGenerator::seeded(1);
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first.id.as_str(), "0001");
        assert_eq!(second.id.as_str(), "0002");
        assert_eq!(generator.sequence().last(), 2);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = CardGenerator::seeded(42).generate_numbers();
        let b = CardGenerator::seeded(42).generate_numbers();
        assert_eq!(a, b);
    }

    #[test]
    fn test_many_cards_are_well_formed() {
        let mut generator = CardGenerator::seeded(2024);
        for _ in 0..500 {
            assert_well_formed(&generator.generate_numbers());
        }
    }

    #[test]
    fn test_n_column_places_free_space_in_middle() {
        let card = CardGenerator::seeded(3).generate();
        let n = card.column(N_COLUMN);
        assert_eq!(n[FREE_SPACE_ROW], FREE_SPACE);
        assert!(
            n.iter()
                .enumerate()
                .all(|(row, v)| row == FREE_SPACE_ROW || (31..=45).contains(v))
        );
    }

    proptest! {
        #[test]
        fn prop_generated_cards_respect_columns(seed in any::<u64>()) {
            let numbers = CardGenerator::seeded(seed).generate_numbers();
            assert_well_formed(&numbers);
        }
    }
}
