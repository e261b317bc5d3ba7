use crate::ball::{column_letter, MAX_BALL, MIN_BALL, TOTAL_BALLS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Ball {0} is outside the 1-75 range")]
    OutOfRange(u8),

    #[error("Ball {0} has already been drawn")]
    AlreadyDrawn(u8),

    #[error("All {} balls have been drawn", TOTAL_BALLS)]
    Exhausted,
}

/// The append-only sequence of drawn balls plus a human-readable log.
///
/// `drawn` never holds duplicates and never exceeds 75 entries; every
/// mutation goes through [`DrawState::draw`] to keep it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawState {
    drawn: Vec<u8>,
    history: Vec<String>,
    /// Last value handed out by the card id sequence.
    #[serde(default)]
    pub last_card_sequence: u32,
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `ball` to the draw order and logs it.
    pub fn draw(&mut self, ball: u8) -> Result<(), DrawError> {
        if !(MIN_BALL..=MAX_BALL).contains(&ball) {
            return Err(DrawError::OutOfRange(ball));
        }
        if self.is_complete() {
            return Err(DrawError::Exhausted);
        }
        if self.contains(ball) {
            return Err(DrawError::AlreadyDrawn(ball));
        }
        self.drawn.push(ball);
        let letter = column_letter(ball).unwrap_or('?');
        self.history.push(format!("Bolilla {}-{}", letter, ball));
        Ok(())
    }

    pub fn log(&mut self, entry: impl Into<String>) {
        self.history.push(entry.into());
    }

    pub fn drawn(&self) -> &[u8] {
        &self.drawn
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recently drawn ball.
    pub fn last(&self) -> Option<u8> {
        self.drawn.last().copied()
    }

    pub fn contains(&self, ball: u8) -> bool {
        self.drawn.contains(&ball)
    }

    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.drawn.len() >= TOTAL_BALLS
    }

    /// Balls still in the drum, ascending.
    pub fn remaining(&self) -> Vec<u8> {
        (MIN_BALL..=MAX_BALL).filter(|b| !self.contains(*b)).collect()
    }

    /// Clears balls and history for a new round. The card sequence survives.
    pub fn reset(&mut self) {
        self.drawn.clear();
        self.history.clear();
    }
}
