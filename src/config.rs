use crate::error::BingoError;
use bingo_engine::CARDS_PER_PARTICIPANT_LIMIT;
use bingo_export::ExportConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Event-wide settings, read from a JSON file with camelCase keys.
///
/// ```json
/// { "title": "BINGO SOLIDARIO", "subtitle": "Club Atlético", "cardsPerParticipant": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventConfig {
    pub title: String,
    pub subtitle: String,
    pub cards_per_participant: usize,
    pub export: ExportConfig,
    /// Extra TTF/OTF files for card text, for hosts without suitable fonts.
    pub fonts: Vec<PathBuf>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: "BINGO VIRTUAL".to_string(),
            subtitle: String::new(),
            cards_per_participant: CARDS_PER_PARTICIPANT_LIMIT,
            export: ExportConfig::default(),
            fonts: Vec::new(),
        }
    }
}

impl EventConfig {
    pub fn from_json(json: &str) -> Result<Self, BingoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads every configured font file.
    pub fn font_data(&self) -> Result<Vec<Vec<u8>>, BingoError> {
        self.fonts
            .iter()
            .map(|path| {
                log::debug!("Loading font {}", path.display());
                Ok(fs::read(path)?)
            })
            .collect()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BingoError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        log::debug!("Loaded event config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let json = r#"{ "subtitle": "Club", "export": { "pdfScale": 2.0 } }"#;
        let config = EventConfig::from_json(json).unwrap();
        assert_eq!(config.title, "BINGO VIRTUAL");
        assert_eq!(config.subtitle, "Club");
        assert_eq!(config.cards_per_participant, 10);
        assert_eq!(config.export.pdf_scale, 2.0);
        assert_eq!(config.export.single_scale, 2.5);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evento.json");
        fs::write(&path, r#"{ "title": "GRAN BINGO", "cardsPerParticipant": 3 }"#).unwrap();
        let config = EventConfig::from_file(&path).unwrap();
        assert_eq!(config.title, "GRAN BINGO");
        assert_eq!(config.cards_per_participant, 3);
    }

    #[test]
    fn test_font_files_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("card.ttf");
        fs::write(&font, b"font bytes").unwrap();
        let json = format!(r#"{{ "fonts": [{:?}] }}"#, font.to_str().unwrap());
        let config = EventConfig::from_json(&json).unwrap();
        assert_eq!(config.font_data().unwrap(), vec![b"font bytes".to_vec()]);

        let missing = EventConfig {
            fonts: vec![dir.path().join("nope.ttf")],
            ..EventConfig::default()
        };
        assert!(matches!(missing.font_data(), Err(BingoError::Io(_))));
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(EventConfig::from_json("{"), Err(BingoError::Config(_))));
    }
}
