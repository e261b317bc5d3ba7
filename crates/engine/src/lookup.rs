use crate::error::NotFoundError;
use bingo_types::{BingoCard, Participant, Winner};

/// A winner joined back to the card it won with.
#[derive(Debug, Clone, Copy)]
pub struct WinnerView<'a> {
    pub winner: &'a Winner,
    /// `None` once the participant has been deleted.
    pub participant: Option<&'a Participant>,
    pub card: &'a BingoCard,
    /// True when `card` comes from the snapshot rather than the live roster.
    pub from_snapshot: bool,
}

/// Reconstructs the detail view for a winner, preferring live data and
/// falling back to the snapshot taken when the card won.
pub fn resolve_winner<'a>(
    winner: &'a Winner,
    participants: &'a [Participant],
) -> Result<WinnerView<'a>, NotFoundError> {
    let participant = participants.iter().find(|p| p.id == winner.participant_id);

    if let Some(card) = participant.and_then(|p| p.card(winner.card_id.as_str())) {
        return Ok(WinnerView {
            winner,
            participant,
            card,
            from_snapshot: false,
        });
    }

    match (&winner.card_snapshot, participant) {
        (Some(card), _) => Ok(WinnerView {
            winner,
            participant,
            card,
            from_snapshot: true,
        }),
        (None, Some(_)) => Err(NotFoundError::Card(winner.card_id.clone())),
        (None, None) => Err(NotFoundError::Participant(winner.participant_id.clone())),
    }
}
