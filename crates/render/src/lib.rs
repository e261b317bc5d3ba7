//! Card artwork for printing and sharing.
//!
//! [`CardRenderer`] lays out a participant's card as a [`CardScene`] in an
//! 800×1100 logical canvas. A [`Rasterizer`] turns the scene into a
//! [`Bitmap`]; [`SvgRasterizer`] is the software backend.

mod error;
pub mod card;
pub mod layout;
pub mod raster;
pub mod scene;

pub use card::{render_card, CardRenderer};
pub use error::RenderError;
pub use raster::{Bitmap, Rasterizer, SvgRasterizer};
pub use scene::{escape, Anchor, CardScene, Element, Stroke, TextRun, Transform};
