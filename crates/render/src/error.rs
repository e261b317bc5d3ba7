use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Scale must be a positive finite number, got {0}")]
    InvalidScale(f32),

    #[error("Could not allocate a {width}x{height} drawing surface")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("Failed to decode card artwork: {0}")]
    Decode(String),

    #[error("Failed to encode bitmap: {0}")]
    Encode(#[from] image::ImageError),
}
