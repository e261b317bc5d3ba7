use crate::error::BingoError;
use bingo_types::DrawState;
use std::fs;
use std::path::Path;

/// Reads the persisted draw state. A missing file is a fresh event.
pub fn load_draw_state(path: impl AsRef<Path>) -> Result<DrawState, BingoError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("{} does not exist yet, starting a fresh draw", path.display());
        return Ok(DrawState::new());
    }
    let state: DrawState = serde_json::from_str(&fs::read_to_string(path)?)?;
    log::debug!(
        "Resumed {} drawn ball(s), card sequence at {}",
        state.len(),
        state.last_card_sequence
    );
    Ok(state)
}

pub fn save_draw_state(path: impl AsRef<Path>, state: &DrawState) -> Result<(), BingoError> {
    fs::write(path, serde_json::to_string_pretty(state)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_fresh_draw() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_draw_state(dir.path().join("estado.json")).unwrap();
        assert_eq!(state, DrawState::new());
    }

    #[test]
    fn test_state_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estado.json");
        let mut state = DrawState::new();
        state.draw(7).unwrap();
        state.draw(75).unwrap();
        state.last_card_sequence = 12;

        save_draw_state(&path, &state).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"lastCardSequence\": 12"));
        assert_eq!(load_draw_state(&path).unwrap(), state);
    }

    #[test]
    fn test_older_files_without_sequence_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estado.json");
        fs::write(&path, r#"{ "drawn": [3], "history": ["Bolilla B-3"] }"#).unwrap();
        let state = load_draw_state(&path).unwrap();
        assert_eq!(state.drawn(), [3]);
        assert_eq!(state.last_card_sequence, 0);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estado.json");
        fs::write(&path, "[").unwrap();
        assert!(matches!(load_draw_state(&path), Err(BingoError::Config(_))));
    }
}
