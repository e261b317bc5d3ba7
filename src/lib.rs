//! A live bingo event engine.
//!
//! The workspace splits into:
//! - [`types`]: cards, participants, draw log, winners
//! - [`engine`]: card generation, the pattern catalog, win detection, roster and game session
//! - [`render`]: card artwork as a vector scene and its rasterization
//! - [`export`]: PNG, zip and paginated PDF artifacts
//! - [`sheets`]: the `Participantes`/`Cartones` spreadsheet interchange
//!
//! This crate re-exports them and adds [`EventConfig`], [`BingoError`] and
//! the draw state file.

mod config;
mod error;
mod state;

pub use bingo_engine as engine;
pub use bingo_export as export;
pub use bingo_render as render;
pub use bingo_sheets as sheets;
pub use bingo_types as types;

pub use bingo_engine::{CardGenerator, GameSession, Roster, WinDetector};
pub use bingo_export::{Artifact, ExportConfig, ExportPipeline, ExportPipelineBuilder};
pub use bingo_render::{CardRenderer, Rasterizer, SvgRasterizer};
pub use bingo_types::{BingoCard, Participant, PatternKey, Winner};
pub use config::EventConfig;
pub use error::BingoError;
pub use state::{load_draw_state, save_draw_state};
