use crate::error::{NotFoundError, RosterError};
use crate::generator::CardGenerator;
use crate::ids::generate_id;
use bingo_types::{
    normalize_phone, BingoCard, CardId, DrawState, Participant, ParticipantId, CARD_CELLS,
};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashSet;

pub const CARDS_PER_PARTICIPANT_LIMIT: usize = 10;
const MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// Whether two cards may carry the same numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IssuePolicy {
    /// No cross-card check; identical cards may be issued.
    #[default]
    AllowDuplicates,
    /// Keep a registry of issued grids and regenerate on collision.
    Unique,
}

/// Editable participant fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantDetails {
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub phone: Option<String>,
}

/// The in-memory set of participants and their cards.
#[derive(Debug)]
pub struct Roster<R: Rng = StdRng> {
    participants: Vec<Participant>,
    generator: CardGenerator<R>,
    limit: usize,
    policy: IssuePolicy,
    issued: HashSet<[u8; CARD_CELLS]>,
}

impl Roster<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(CardGenerator::new())
    }
}

impl Default for Roster<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Roster<R> {
    pub fn with_generator(generator: CardGenerator<R>) -> Self {
        Self {
            participants: Vec::new(),
            generator,
            limit: CARDS_PER_PARTICIPANT_LIMIT,
            policy: IssuePolicy::default(),
            issued: HashSet::new(),
        }
    }

    /// Adopts an existing set of participants, e.g. from a spreadsheet import.
    /// The card id sequence is advanced past every numeric card id seen.
    pub fn with_participants(mut self, participants: Vec<Participant>) -> Self {
        for card in participants.iter().flat_map(|p| &p.cards) {
            if let Ok(value) = card.id.as_str().parse::<u32>() {
                self.generator.sequence_mut().observe(value);
            }
            self.issued.insert(card.numbers);
        }
        self.participants = participants;
        self
    }

    /// Continues card numbering from a persisted draw state, so ids of
    /// cards deleted before the restart are not handed out again.
    pub fn resume_from(mut self, state: &DrawState) -> Self {
        self.generator
            .sequence_mut()
            .observe(state.last_card_sequence);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_policy(mut self, policy: IssuePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn card_count(&self) -> usize {
        self.participants.iter().map(|p| p.cards.len()).sum()
    }

    pub fn last_card_sequence(&self) -> u32 {
        self.generator.sequence().last()
    }

    /// Stores the card id sequence in `state` for [`Roster::resume_from`].
    pub fn record_sequence(&self, state: &mut DrawState) {
        state.last_card_sequence = state.last_card_sequence.max(self.last_card_sequence());
    }

    pub fn find_participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id.as_str() == id)
    }

    pub fn find_card(&self, card_id: &str) -> Option<(&Participant, &BingoCard)> {
        self.participants
            .iter()
            .find_map(|p| p.card(card_id).map(|c| (p, c)))
    }

    pub fn add_participant(&mut self, details: ParticipantDetails) -> ParticipantId {
        let id = ParticipantId::new(generate_id("P", self.generator.rng_mut()));
        let mut participant =
            Participant::new(id.clone(), details.name, details.surname, details.dni);
        participant.phone = details.phone.and_then(normalize_phone);
        log::info!("Registered participant {} ({})", id, participant.full_name());
        self.participants.push(participant);
        id
    }

    pub fn update_participant(
        &mut self,
        id: &str,
        details: ParticipantDetails,
    ) -> Result<(), RosterError> {
        let participant = self.participant_mut(id)?;
        participant.name = details.name;
        participant.surname = details.surname;
        participant.dni = details.dni;
        participant.phone = details.phone.and_then(normalize_phone);
        Ok(())
    }

    pub fn remove_participant(&mut self, id: &str) -> Result<Participant, RosterError> {
        let pos = self
            .participants
            .iter()
            .position(|p| p.id.as_str() == id)
            .ok_or_else(|| NotFoundError::Participant(id.into()))?;
        let removed = self.participants.remove(pos);
        for card in &removed.cards {
            self.issued.remove(&card.numbers);
        }
        Ok(removed)
    }

    /// Generates `count` new cards for a participant, respecting the per-participant limit.
    pub fn issue_cards(&mut self, id: &str, count: usize) -> Result<Vec<CardId>, RosterError> {
        let held = self.participant_mut(id)?.cards.len();
        if held + count > self.limit {
            return Err(RosterError::CardLimit {
                participant: id.into(),
                held,
                limit: self.limit,
            });
        }

        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.next_card()?);
        }
        let ids: Vec<CardId> = cards.iter().map(|c| c.id.clone()).collect();
        log::info!("Issued {} card(s) to {}", ids.len(), id);
        self.participant_mut(id)?.cards.extend(cards);
        Ok(ids)
    }

    pub fn remove_card(&mut self, card_id: &str) -> Result<BingoCard, RosterError> {
        for participant in &mut self.participants {
            if let Some(pos) = participant.cards.iter().position(|c| c.id.as_str() == card_id) {
                let card = participant.cards.remove(pos);
                self.issued.remove(&card.numbers);
                return Ok(card);
            }
        }
        Err(NotFoundError::Card(card_id.into()).into())
    }

    fn next_card(&mut self) -> Result<BingoCard, RosterError> {
        match self.policy {
            IssuePolicy::AllowDuplicates => {
                let card = self.generator.generate();
                self.issued.insert(card.numbers);
                Ok(card)
            }
            IssuePolicy::Unique => {
                for _ in 0..MAX_UNIQUE_ATTEMPTS {
                    let numbers = self.generator.generate_numbers();
                    if self.issued.insert(numbers) {
                        let id = self.generator.sequence_mut().next_id();
                        return Ok(BingoCard::new(id, numbers));
                    }
                    log::debug!("Regenerating card after a duplicate grid");
                }
                Err(RosterError::UniqueExhausted(MAX_UNIQUE_ATTEMPTS))
            }
        }
    }

    fn participant_mut(&mut self, id: &str) -> Result<&mut Participant, RosterError> {
        self.participants
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| NotFoundError::Participant(id.into()).into())
    }
}
