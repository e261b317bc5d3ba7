use bingo_engine::{GameError, NotFoundError, RosterError};
use bingo_export::ExportError;
use bingo_render::RenderError;
use bingo_sheets::ParseError;
use thiserror::Error;

/// Every failure the bingo crates can surface, for callers that drive more
/// than one stage.
#[derive(Error, Debug)]
pub enum BingoError {
    #[error("Import failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Invalid settings or state file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
