use bingo::types::{BingoCard, Participant};

/// B 1-5, I 16-20, N 31-34, G 46-50, O 61-65, row-major with the free space at 12.
pub const SCENARIO_GRID: [u8; 25] = [
    1, 16, 31, 46, 61, 2, 17, 32, 47, 62, 3, 18, 0, 48, 63, 4, 19, 33, 49, 64, 5, 20, 34, 50, 65,
];

pub fn card(id: &str) -> BingoCard {
    BingoCard::new(id, SCENARIO_GRID)
}

/// A participant holding `count` cards with ids `first`, `first + 1`, …
pub fn participant_with_cards(id: &str, name: &str, first: u32, count: u32) -> Participant {
    let cards = (first..first + count).map(|n| card(&format!("{:04}", n))).collect();
    Participant::new(id, name, "Pérez", "12345678").with_cards(cards)
}

pub fn two_participants() -> Vec<Participant> {
    vec![
        participant_with_cards("P1", "Ana María", 1, 2),
        participant_with_cards("P2", "Luis", 3, 1).with_phone("600 123 456"),
    ]
}
