//! Deterministic artifact names.

use bingo_types::{CardId, Participant};

pub const ARCHIVE_FILE_NAME: &str = "todos_cartones.zip";
pub const ARCHIVE_FOLDER: &str = "cartones_bingo";

/// Collapses every whitespace run to a single underscore.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

pub fn single_image(participant: &Participant, card_id: &CardId) -> String {
    format!("bingo_{}_{}.png", normalize(&participant.name), card_id)
}

pub fn archive_entry(participant: &Participant, card_id: &CardId) -> String {
    format!("{}_{}.png", normalize(&participant.name), card_id)
}

pub fn participant_pdf(participant: &Participant) -> String {
    format!("Cartones_Bingo_{}.pdf", normalize(&participant.name))
}

pub fn single_card_pdf(participant: &Participant, card_id: &CardId) -> String {
    format!("Bingo_{}_{}.pdf", normalize(&participant.name), card_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize("Ana  María\tJosé"), "Ana_María_José");
        assert_eq!(normalize(" Ana "), "_Ana_");
        assert_eq!(normalize("Luis"), "Luis");
    }

    #[test]
    fn test_names() {
        let p = Participant::new("P1", "Ana María", "Pérez", "1");
        let id = CardId::new("0007");
        assert_eq!(single_image(&p, &id), "bingo_Ana_María_0007.png");
        assert_eq!(archive_entry(&p, &id), "Ana_María_0007.png");
        assert_eq!(participant_pdf(&p), "Cartones_Bingo_Ana_María.pdf");
        assert_eq!(single_card_pdf(&p, &id), "Bingo_Ana_María_0007.pdf");
    }
}
