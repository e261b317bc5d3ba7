//! Printable and shareable artifacts for bingo cards.
//!
//! - Single card: PNG at 2.5× (`bingo_{name}_{card}.png`)
//! - All cards: zip of PNGs at 1.5× under `cartones_bingo/` (`todos_cartones.zip`)
//! - Participant sheet: A4 PDF, 2×2 cards per page at 3.0×

mod archive;
mod error;
pub mod config;
pub mod naming;
pub mod pdf;
pub mod pipeline;

pub use archive::CardArchive;
pub use config::{ExportConfig, SheetLayout};
pub use error::ExportError;
pub use pdf::SheetPdfWriter;
pub use pipeline::{Artifact, ExportPipeline, ExportPipelineBuilder};
