use crate::card::BingoCard;
use crate::ids::{CardId, ParticipantId};
use crate::pattern::PatternKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable record of a card satisfying the active pattern.
///
/// The snapshots make the record self-contained, so it stays viewable after
/// the source card or participant is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub participant_id: ParticipantId,
    pub participant_name: String,
    pub card_id: CardId,
    pub timestamp: DateTime<Utc>,
    pub winning_number: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_snapshot: Option<BingoCard>,
}
