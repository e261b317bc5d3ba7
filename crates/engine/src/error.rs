use crate::game::DrawBlock;
use bingo_types::{CardId, DrawError, ParticipantId};
use thiserror::Error;

/// A referenced participant or card no longer exists and no snapshot covers it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Participant '{0}' not found")]
    Participant(ParticipantId),

    #[error("Card '{0}' not found")]
    Card(CardId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Participant '{participant}' already holds {held} cards; limit is {limit}")]
    CardLimit {
        participant: ParticipantId,
        held: usize,
        limit: usize,
    },

    #[error("Could not generate a unique card after {0} attempts")]
    UniqueExhausted(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Draw not allowed: {0}")]
    Blocked(DrawBlock),

    #[error(transparent)]
    Draw(#[from] DrawError),
}
