use crate::card::BingoCard;
use crate::ids::{CardId, ParticipantId};
use serde::{Deserialize, Serialize};

/// Trims a phone number; a blank one means no phone.
pub fn normalize_phone(phone: impl Into<String>) -> Option<String> {
    let phone = phone.into();
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == phone.len() {
        Some(phone)
    } else {
        Some(trimmed.to_string())
    }
}

/// A registered player. Owns its cards exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub surname: String,
    pub dni: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub cards: Vec<BingoCard>,
}

impl Participant {
    pub fn new(
        id: impl Into<ParticipantId>,
        name: impl Into<String>,
        surname: impl Into<String>,
        dni: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            dni: dni.into(),
            phone: None,
            cards: Vec::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = normalize_phone(phone);
        self
    }

    pub fn with_cards(mut self, cards: Vec<BingoCard>) -> Self {
        self.cards = cards;
        self
    }

    /// "Name Surname", the form winners and card artwork display.
    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }

    pub fn card(&self, id: &str) -> Option<&BingoCard> {
        self.cards.iter().find(|c| c.id.as_str() == id)
    }

    pub fn has_card(&self, id: &CardId) -> bool {
        self.cards.iter().any(|c| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_without_surname() {
        let p = Participant::new("P1", "Ana", "", "123");
        assert_eq!(p.full_name(), "Ana");
        let p = Participant::new("P1", "Ana", "Pérez", "123");
        assert_eq!(p.full_name(), "Ana Pérez");
    }

    #[test]
    fn test_blank_phone_is_no_phone() {
        assert_eq!(Participant::new("P1", "Ana", "", "1").with_phone("").phone, None);
        assert_eq!(Participant::new("P1", "Ana", "", "1").with_phone("  ").phone, None);
        let p = Participant::new("P1", "Ana", "", "1").with_phone(" 600 123 ");
        assert_eq!(p.phone.as_deref(), Some("600 123"));
    }

    #[test]
    fn test_card_lookup() {
        let card = BingoCard::new("0003", [0; 25]);
        let p = Participant::new("P1", "Ana", "Pérez", "123").with_cards(vec![card]);
        assert!(p.card("0003").is_some());
        assert!(p.card("0004").is_none());
        assert!(p.has_card(&CardId::new("0003")));
    }
}
