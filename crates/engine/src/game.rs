use crate::detector::{CardProgress, DrawnMask, WinDetector};
use crate::error::GameError;
use bingo_types::{BingoCard, DrawState, Participant, PatternKey, Winner};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prize {
    pub id: u32,
    pub description: String,
    pub awarded: bool,
}

/// Why the next ball cannot be drawn yet. Variants are listed in the order
/// they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawBlock {
    Paused,
    NoPrizes,
    AllPrizesAwarded,
    RoundLocked,
    NoPattern,
    NoParticipants,
    Exhausted,
}

impl fmt::Display for DrawBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DrawBlock::Paused => "the game is paused",
            DrawBlock::NoPrizes => "register at least one prize first",
            DrawBlock::AllPrizesAwarded => "every prize has been awarded",
            DrawBlock::RoundLocked => {
                "the round has a winner; reset the balls to play the next prize"
            }
            DrawBlock::NoPattern => "select a winning pattern first",
            DrawBlock::NoParticipants => "register participants first",
            DrawBlock::Exhausted => "all 75 balls have been drawn",
        };
        f.write_str(msg)
    }
}

/// The ball just drawn and any cards it completed.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    pub ball: u8,
    pub winners: Vec<Winner>,
}

/// State of a live event: drawn balls, the active pattern, prizes and winners.
///
/// A round locks as soon as any card wins and stays locked until
/// [`GameSession::reset_round`]; winners accumulate across rounds.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    draw: DrawState,
    pattern: PatternKey,
    winners: Vec<Winner>,
    prizes: Vec<Prize>,
    round_locked: bool,
    paused: bool,
    next_prize_id: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a persisted draw state.
    pub fn with_draw_state(mut self, draw: DrawState) -> Self {
        self.draw = draw;
        self
    }

    pub fn draw_state(&self) -> &DrawState {
        &self.draw
    }

    pub fn pattern(&self) -> PatternKey {
        self.pattern
    }

    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn is_round_locked(&self) -> bool {
        self.round_locked
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The pattern cannot change while a round is locked.
    pub fn set_pattern(&mut self, key: PatternKey) -> Result<(), GameError> {
        if self.round_locked {
            return Err(GameError::Blocked(DrawBlock::RoundLocked));
        }
        if self.pattern != key {
            log::info!("Active pattern: {}", key);
            self.draw.log(format!("Patrón: {}", crate::patterns::pattern(key).label));
            self.pattern = key;
        }
        Ok(())
    }

    pub fn add_prize(&mut self, description: impl Into<String>) -> u32 {
        self.next_prize_id += 1;
        self.prizes.push(Prize {
            id: self.next_prize_id,
            description: description.into(),
            awarded: false,
        });
        self.next_prize_id
    }

    /// Flips a prize between awarded and pending. Returns the new state.
    pub fn toggle_prize(&mut self, id: u32) -> Option<bool> {
        let prize = self.prizes.iter_mut().find(|p| p.id == id)?;
        prize.awarded = !prize.awarded;
        Some(prize.awarded)
    }

    /// The next prize nobody has won yet.
    pub fn next_prize(&self) -> Option<&Prize> {
        self.prizes.iter().find(|p| !p.awarded)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn draw_blocker(&self, has_participants: bool) -> Option<DrawBlock> {
        if self.paused {
            Some(DrawBlock::Paused)
        } else if self.prizes.is_empty() {
            Some(DrawBlock::NoPrizes)
        } else if self.prizes.iter().all(|p| p.awarded) {
            Some(DrawBlock::AllPrizesAwarded)
        } else if self.round_locked {
            Some(DrawBlock::RoundLocked)
        } else if self.pattern.is_none() {
            Some(DrawBlock::NoPattern)
        } else if !has_participants {
            Some(DrawBlock::NoParticipants)
        } else if self.draw.is_complete() {
            Some(DrawBlock::Exhausted)
        } else {
            None
        }
    }

    /// Draws a uniformly random ball from those still in the drum.
    pub fn draw_next<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        participants: &[Participant],
    ) -> Result<DrawOutcome, GameError> {
        self.ensure_can_draw(participants)?;
        let remaining = self.draw.remaining();
        let ball = remaining[rng.random_range(0..remaining.len())];
        self.apply(ball, participants, Utc::now())
    }

    /// Draws a specific ball, e.g. when mirroring a physical drum.
    pub fn draw_ball(
        &mut self,
        ball: u8,
        participants: &[Participant],
    ) -> Result<DrawOutcome, GameError> {
        self.ensure_can_draw(participants)?;
        self.apply(ball, participants, Utc::now())
    }

    fn ensure_can_draw(&self, participants: &[Participant]) -> Result<(), GameError> {
        match self.draw_blocker(!participants.is_empty()) {
            Some(block) => Err(GameError::Blocked(block)),
            None => Ok(()),
        }
    }

    fn apply(
        &mut self,
        ball: u8,
        participants: &[Participant],
        now: DateTime<Utc>,
    ) -> Result<DrawOutcome, GameError> {
        self.draw.draw(ball)?;
        log::debug!("Drew ball {} ({} drawn)", ball, self.draw.len());

        let cards = participants
            .iter()
            .flat_map(|p| p.cards.iter().map(move |c| (p, c)));
        let winners = WinDetector::new(self.pattern).detect_cards_at(
            cards,
            self.draw.drawn(),
            &self.winners,
            now,
        );

        for winner in &winners {
            log::info!(
                "BINGO: card {} ({}) on ball {}",
                winner.card_id,
                winner.participant_name,
                ball
            );
            self.draw
                .log(format!("¡BINGO! Cartón {} - {}", winner.card_id, winner.participant_name));
        }
        if !winners.is_empty() {
            self.round_locked = true;
        }
        self.winners.extend(winners.iter().cloned());
        Ok(DrawOutcome { ball, winners })
    }

    /// Clears the drum for the next prize. Winners and prizes are kept.
    pub fn reset_round(&mut self) {
        log::info!("Round reset after {} balls", self.draw.len());
        self.draw.reset();
        self.round_locked = false;
    }

    pub fn progress(&self, card: &BingoCard) -> CardProgress {
        WinDetector::new(self.pattern).progress(card, &DrawnMask::new(self.draw.drawn()))
    }
}
