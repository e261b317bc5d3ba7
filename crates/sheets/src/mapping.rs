//! Participants and cards to and from the two-sheet layout.
//!
//! `Participantes`: `ID, Nombre, Apellidos, DNI, Telefono`.
//! `Cartones`: `ID_Part, ID_Carton, N1..N24`, the playable numbers in
//! row-major order with the free space removed.

use crate::error::ParseError;
use crate::workbook::{Cell, Record, Sheet, Workbook};
use bingo_types::{BingoCard, Participant, ParticipantId, MAX_BALL, MIN_BALL, PLAYABLE_CELLS};
use rand::Rng;

pub const PARTICIPANTS_SHEET: &str = "Participantes";
pub const CARDS_SHEET: &str = "Cartones";

pub const PARTICIPANT_COLUMNS: [&str; 5] = ["ID", "Nombre", "Apellidos", "DNI", "Telefono"];
const CARD_OWNER: &str = "ID_Part";
const CARD_ID: &str = "ID_Carton";

const DEFAULT_NAME: &str = "Sin Nombre";
const ID_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn number_column(i: usize) -> String {
    format!("N{}", i + 1)
}

/// Lays out participants and their cards as a two-sheet workbook.
pub fn to_workbook(participants: &[Participant]) -> Workbook {
    let mut people = Sheet::new(PARTICIPANTS_SHEET);
    people.push_row(PARTICIPANT_COLUMNS.iter().map(|&h| Cell::text(h)).collect());

    let mut cards = Sheet::new(CARDS_SHEET);
    let mut header = vec![Cell::text(CARD_OWNER), Cell::text(CARD_ID)];
    header.extend((0..PLAYABLE_CELLS).map(|i| Cell::Text(number_column(i))));
    cards.push_row(header);

    for p in participants {
        people.push_row(vec![
            Cell::text(p.id.as_str()),
            Cell::text(&p.name),
            Cell::text(&p.surname),
            Cell::text(&p.dni),
            Cell::text(p.phone.as_deref().unwrap_or_default()),
        ]);
        for card in &p.cards {
            let mut row = vec![Cell::text(p.id.as_str()), Cell::text(card.id.as_str())];
            row.extend(card.playable_numbers().map(|n| Cell::Number(f64::from(n))));
            cards.push_row(row);
        }
    }

    let mut workbook = Workbook::new();
    workbook.push(people);
    workbook.push(cards);
    workbook
}

pub fn from_workbook(workbook: &Workbook) -> Result<Vec<Participant>, ParseError> {
    from_workbook_with_rng(workbook, &mut rand::rng())
}

/// Rebuilds participants from a workbook.
///
/// Only a missing participants sheet is an error. Rows with gaps get
/// defaults; card rows that don't carry exactly 24 valid numbers, or that
/// name an unknown participant, are dropped.
pub fn from_workbook_with_rng<R: Rng + ?Sized>(
    workbook: &Workbook,
    rng: &mut R,
) -> Result<Vec<Participant>, ParseError> {
    let people = workbook
        .sheet(PARTICIPANTS_SHEET)
        .or_else(|| workbook.sheet_at(0))
        .ok_or_else(|| ParseError::MissingSheet(PARTICIPANTS_SHEET.to_string()))?;

    let mut participants: Vec<Participant> = Vec::new();
    for record in people.table().records() {
        let participant = read_participant(&record, rng);
        match participants.iter_mut().find(|p| p.id == participant.id) {
            Some(existing) => {
                log::warn!("Duplicate participant id {}, keeping the later row", participant.id);
                *existing = participant;
            }
            None => participants.push(participant),
        }
    }

    let Some(cards) = workbook.sheet(CARDS_SHEET).or_else(|| workbook.sheet_at(1)) else {
        log::debug!("No cards sheet; imported {} participant(s) without cards", participants.len());
        return Ok(participants);
    };

    let columns: Vec<String> = (0..PLAYABLE_CELLS).map(number_column).collect();
    let table = cards.table();
    let mut dropped = 0usize;
    for record in table.records() {
        let Some(owner) = record.string(CARD_OWNER) else {
            dropped += 1;
            continue;
        };
        let Some(participant) = participants.iter_mut().find(|p| p.id.as_str() == owner) else {
            log::warn!("Card row for unknown participant {} dropped", owner);
            dropped += 1;
            continue;
        };
        let card_id = record
            .string(CARD_ID)
            .unwrap_or_else(|| random_id("C", 4, rng));
        match read_numbers(&record, &columns) {
            Some(playable) => participant.cards.push(BingoCard::from_playable(card_id, playable)),
            None => {
                log::warn!("Card {} of {} has invalid numbers, dropped", card_id, owner);
                dropped += 1;
            }
        }
    }

    log::info!(
        "Imported {} participant(s), {} card(s), {} card row(s) dropped",
        participants.len(),
        participants.iter().map(|p| p.cards.len()).sum::<usize>(),
        dropped
    );
    Ok(participants)
}

fn read_participant<R: Rng + ?Sized>(record: &Record<'_>, rng: &mut R) -> Participant {
    let id = record
        .string("ID")
        .unwrap_or_else(|| random_id("P", 6, rng));
    let mut participant = Participant::new(
        ParticipantId::new(id),
        record.string("Nombre").unwrap_or_else(|| DEFAULT_NAME.to_string()),
        record.string("Apellidos").unwrap_or_default(),
        record.string("DNI").unwrap_or_default(),
    );
    participant.phone = record.string("Telefono");
    participant
}

/// All 24 numbers, each an integer ball value, or nothing.
fn read_numbers(record: &Record<'_>, columns: &[String]) -> Option<[u8; PLAYABLE_CELLS]> {
    let mut playable = [0u8; PLAYABLE_CELLS];
    for (slot, column) in playable.iter_mut().zip(columns) {
        let value = record.get(column).as_integer()?;
        let ball = u8::try_from(value).ok()?;
        if !(MIN_BALL..=MAX_BALL).contains(&ball) {
            return None;
        }
        *slot = ball;
    }
    Some(playable)
}

fn random_id<R: Rng + ?Sized>(prefix: &str, len: usize, rng: &mut R) -> String {
    let tail: String = (0..len)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", prefix, tail)
}
