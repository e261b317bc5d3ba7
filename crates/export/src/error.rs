use bingo_render::RenderError;
use bingo_types::{CardId, ParticipantId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Participant '{0}' has no cards to export")]
    NoCards(ParticipantId),

    #[error("Nothing was placed on the sheet")]
    EmptyDocument,

    #[error("Card '{0}' not found")]
    CardNotFound(CardId),
}
