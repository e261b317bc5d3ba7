use crate::patterns::{self, WinPattern};
use bingo_types::{BingoCard, CardId, Participant, PatternKey, Winner, FREE_SPACE_INDEX, MAX_BALL};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Constant-time membership over the drawn balls.
#[derive(Debug, Clone)]
pub struct DrawnMask([bool; MAX_BALL as usize + 1]);

impl DrawnMask {
    pub fn new(drawn: &[u8]) -> Self {
        let mut mask = [false; MAX_BALL as usize + 1];
        for &ball in drawn {
            if let Some(slot) = mask.get_mut(ball as usize) {
                *slot = true;
            }
        }
        // The free-space sentinel is never a ball.
        mask[0] = false;
        Self(mask)
    }

    pub fn contains(&self, ball: u8) -> bool {
        self.0.get(ball as usize).copied().unwrap_or(false)
    }
}

/// How much of the active pattern a card has covered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardProgress {
    pub covered: usize,
    pub required: usize,
}

impl CardProgress {
    pub fn is_complete(&self) -> bool {
        self.required > 0 && self.covered == self.required
    }

    pub fn missing(&self) -> usize {
        self.required - self.covered
    }
}

/// Checks cards against one pattern from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct WinDetector {
    pattern: &'static WinPattern,
}

impl WinDetector {
    pub fn new(key: PatternKey) -> Self {
        Self {
            pattern: patterns::pattern(key),
        }
    }

    pub fn pattern(&self) -> &'static WinPattern {
        self.pattern
    }

    fn required_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.pattern
            .indices
            .iter()
            .copied()
            .filter(|&idx| idx != FREE_SPACE_INDEX)
    }

    /// A card wins iff every required cell's number has been drawn.
    /// `NONE` never wins, even though its empty set is trivially covered.
    pub fn is_winning(&self, card: &BingoCard, drawn: &DrawnMask) -> bool {
        if !self.pattern.is_playable() {
            return false;
        }
        self.required_cells()
            .all(|idx| card.number_at(idx).is_some_and(|n| drawn.contains(n)))
    }

    pub fn progress(&self, card: &BingoCard, drawn: &DrawnMask) -> CardProgress {
        if !self.pattern.is_playable() {
            return CardProgress::default();
        }
        let mut progress = CardProgress::default();
        for idx in self.required_cells() {
            progress.required += 1;
            if card.number_at(idx).is_some_and(|n| drawn.contains(n)) {
                progress.covered += 1;
            }
        }
        progress
    }

    /// Runs detection over every card of every participant, stamping new
    /// winners with the current time.
    pub fn detect(
        &self,
        participants: &[Participant],
        drawn: &[u8],
        existing: &[Winner],
    ) -> Vec<Winner> {
        let cards = participants
            .iter()
            .flat_map(|p| p.cards.iter().map(move |c| (p, c)));
        self.detect_cards_at(cards, drawn, existing, Utc::now())
    }

    /// Returns a winner for each card that now satisfies the pattern and has
    /// no existing winner record. The last drawn ball is the winning number.
    pub fn detect_cards_at<'a, I>(
        &self,
        cards: I,
        drawn: &[u8],
        existing: &[Winner],
        now: DateTime<Utc>,
    ) -> Vec<Winner>
    where
        I: IntoIterator<Item = (&'a Participant, &'a BingoCard)>,
    {
        let Some(&winning_number) = drawn.last() else {
            return Vec::new();
        };
        if !self.pattern.is_playable() {
            return Vec::new();
        }

        let mask = DrawnMask::new(drawn);
        let mut already_won: HashSet<&CardId> = existing.iter().map(|w| &w.card_id).collect();
        let mut winners = Vec::new();

        for (participant, card) in cards {
            if already_won.contains(&card.id) || !self.is_winning(card, &mask) {
                continue;
            }
            log::debug!(
                "Card {} of {} completes {} on ball {}",
                card.id,
                participant.id,
                self.pattern.key,
                winning_number
            );
            already_won.insert(&card.id);
            winners.push(Winner {
                participant_id: participant.id.clone(),
                participant_name: participant.full_name(),
                card_id: card.id.clone(),
                timestamp: now,
                winning_number,
                pattern: Some(self.pattern.key),
                card_snapshot: Some(card.clone()),
            });
        }
        winners
    }
}

/// Convenience entry point: which cards satisfy `pattern` given `drawn`.
pub fn detect(
    participants: &[Participant],
    drawn: &[u8],
    pattern: PatternKey,
    existing: &[Winner],
) -> Vec<Winner> {
    WinDetector::new(pattern).detect(participants, drawn, existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::CardGenerator;
    use proptest::prelude::*;

    const SCENARIO: [u8; 25] = [
        1, 16, 31, 46, 61, 2, 17, 32, 47, 62, 3, 18, 0, 48, 63, 4, 19, 33, 49, 64, 5, 20, 34, 50,
        65,
    ];

    fn scenario_participant() -> Participant {
        Participant::new("P1", "Ana", "Pérez", "12345678")
            .with_cards(vec![BingoCard::new("0001", SCENARIO)])
    }

    fn all_but_center() -> Vec<u8> {
        SCENARIO.iter().copied().filter(|n| *n != 0).collect()
    }

    #[test]
    fn test_full_card_wins_only_with_every_number() {
        let participants = vec![scenario_participant()];
        let mut drawn = all_but_center();
        let last = drawn.pop().unwrap();

        assert!(detect(&participants, &drawn, PatternKey::FullCard, &[]).is_empty());

        drawn.push(last);
        let winners = detect(&participants, &drawn, PatternKey::FullCard, &[]);
        assert_eq!(winners.len(), 1);
        let w = &winners[0];
        assert_eq!(w.card_id.as_str(), "0001");
        assert_eq!(w.participant_name, "Ana Pérez");
        assert_eq!(w.winning_number, last);
        assert_eq!(w.pattern, Some(PatternKey::FullCard));
        assert_eq!(w.card_snapshot.as_ref().map(|c| c.numbers), Some(SCENARIO));
    }

    #[test]
    fn test_extra_balls_do_not_matter() {
        let participants = vec![scenario_participant()];
        let mut drawn: Vec<u8> = vec![70, 71];
        drawn.extend(all_but_center());
        drawn.push(75);
        let winners = detect(&participants, &drawn, PatternKey::FullCard, &[]);
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].winning_number, 75);
    }

    #[test]
    fn test_none_never_wins() {
        let participants = vec![scenario_participant()];
        let drawn: Vec<u8> = (1..=75).collect();
        assert!(detect(&participants, &drawn, PatternKey::None, &[]).is_empty());
        let mask = DrawnMask::new(&drawn);
        assert!(!WinDetector::new(PatternKey::None).is_winning(&participants[0].cards[0], &mask));
    }

    #[test]
    fn test_middle_row_ignores_free_space() {
        let participants = vec![scenario_participant()];
        let winners = detect(&participants, &[3, 18, 48, 63], PatternKey::Row3, &[]);
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].winning_number, 63);
    }

    #[test]
    fn test_empty_draw_yields_nothing() {
        let participants = vec![scenario_participant()];
        assert!(detect(&participants, &[], PatternKey::FourCorners, &[]).is_empty());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let participants = vec![scenario_participant()];
        let drawn = [1, 61, 5, 65];
        let mut existing = detect(&participants, &drawn, PatternKey::FourCorners, &[]);
        assert_eq!(existing.len(), 1);

        let again = detect(&participants, &drawn, PatternKey::FourCorners, &existing);
        assert!(again.is_empty());

        existing.extend(again);
        assert_eq!(existing.len(), 1);
    }

    #[test]
    fn test_duplicate_card_ids_win_once_per_call() {
        let p = scenario_participant();
        let twin = Participant::new("P2", "Luis", "Gómez", "87654321").with_cards(p.cards.clone());
        let winners = detect(&[p, twin], &[1, 61, 5, 65], PatternKey::FourCorners, &[]);
        assert_eq!(winners.len(), 1);
    }

    #[test]
    fn test_progress_counts_covered_cells() {
        let card = BingoCard::new("0001", SCENARIO);
        let detector = WinDetector::new(PatternKey::ColumnN);
        let progress = detector.progress(&card, &DrawnMask::new(&[31, 33, 70]));
        assert_eq!((progress.covered, progress.required), (2, 4));
        assert_eq!(progress.missing(), 2);
        assert!(!progress.is_complete());
    }

    proptest! {
        #[test]
        fn prop_winning_matches_definition(
            seed in any::<u64>(),
            drawn in proptest::collection::hash_set(1u8..=75, 0..40),
            key_idx in 0usize..PatternKey::ALL.len(),
        ) {
            let key = PatternKey::ALL[key_idx];
            let card = CardGenerator::seeded(seed).generate();
            let drawn: Vec<u8> = drawn.into_iter().collect();
            let mask = DrawnMask::new(&drawn);

            let expected = key != PatternKey::None
                && patterns::pattern(key)
                    .indices
                    .iter()
                    .filter(|&&i| i != FREE_SPACE_INDEX)
                    .all(|&i| drawn.contains(&card.numbers[i]));

            prop_assert_eq!(WinDetector::new(key).is_winning(&card, &mask), expected);
        }
    }
}
