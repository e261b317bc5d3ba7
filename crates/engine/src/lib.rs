//! Game logic for live bingo rounds.
//!
//! - [`CardGenerator`]: column-constrained 5×5 card generation
//! - [`patterns`]: the static catalog of winning shapes
//! - [`WinDetector`]: decides which cards satisfy the active pattern
//! - [`Roster`]: in-memory owner of participants and their cards
//! - [`GameSession`]: draw loop, prizes and round locking
//! - [`resolve_winner`]: reconstructs a winner's card after deletions
//!
//! Generation and detection are pure and never fail on well-formed input.

mod error;
pub mod detector;
pub mod game;
pub mod generator;
pub mod ids;
pub mod lookup;
pub mod patterns;
pub mod roster;

pub use detector::{detect, CardProgress, DrawnMask, WinDetector};
pub use error::{GameError, NotFoundError, RosterError};
pub use game::{DrawBlock, DrawOutcome, GameSession, Prize};
pub use generator::CardGenerator;
pub use ids::{generate_id, CardIdSequence};
pub use lookup::{resolve_winner, WinnerView};
pub use patterns::WinPattern;
pub use roster::{IssuePolicy, ParticipantDetails, Roster, CARDS_PER_PARTICIPANT_LIMIT};
