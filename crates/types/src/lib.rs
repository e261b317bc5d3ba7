//! Shared data model for the bingo crates.
//!
//! Everything here is plain data: cards, participants, the draw log and
//! winner records, plus the small geometry and color primitives used by the
//! render and export layers.

pub mod ball;
pub mod card;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod ids;
pub mod participant;
pub mod pattern;
pub mod winner;

pub use ball::{column_letter, column_range, BALL_COLUMNS, MAX_BALL, MIN_BALL, TOTAL_BALLS};
pub use card::{
    BingoCard, CARD_CELLS, FREE_SPACE, FREE_SPACE_INDEX, GRID_SIZE, PLAYABLE_CELLS,
};
pub use color::Color;
pub use draw::{DrawError, DrawState};
pub use geometry::{Rect, Size};
pub use ids::{CardId, ParticipantId};
pub use participant::{normalize_phone, Participant};
pub use pattern::PatternKey;
pub use winner::Winner;
