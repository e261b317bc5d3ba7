use crate::error::RenderError;
use crate::scene::CardScene;
use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia;
use resvg::usvg;
use std::io::Cursor;
use std::sync::Arc;

/// An opaque RGBA raster produced from a [`CardScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// A bitmap filled with one opaque color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 0xff])))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    /// Packed 8-bit RGB samples, alpha dropped.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.image
            .pixels()
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect()
    }
}

/// Turns a vector scene into pixels at a uniform scale.
///
/// Implementations must return a bitmap of exactly
/// `round(width * scale)` × `round(height * scale)` pixels over an opaque
/// white background.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, scene: &CardScene, scale: f32) -> Result<Bitmap, RenderError>;

    fn name(&self) -> &'static str {
        "unnamed"
    }
}

pub(crate) fn check_scale(scene: &CardScene, scale: f32) -> Result<(u32, u32), RenderError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RenderError::InvalidScale(scale));
    }
    let (width, height) = scene.pixel_size(scale);
    if width == 0 || height == 0 {
        return Err(RenderError::SurfaceUnavailable { width, height });
    }
    Ok((width, height))
}

/// Families tried, in order, for the generic `sans-serif` the card asks for.
const SANS_SERIF_PREFERENCE: [&str; 7] = [
    "Inter",
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
    "FreeSans",
];

/// Points the generic `sans-serif` family at a face that is actually loaded.
/// fontdb maps it to Arial by default, which many hosts lack.
fn bind_sans_serif(db: &mut fontdb::Database) {
    let loaded = |name: &str| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    let family = SANS_SERIF_PREFERENCE
        .iter()
        .find(|name| loaded(name))
        .map(|name| name.to_string())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        });

    if let Some(family) = family {
        log::debug!("Card text uses '{}' for sans-serif", family);
        db.set_sans_serif_family(family);
    }
}

/// Software rasterizer backed by resvg.
#[derive(Debug, Clone)]
pub struct SvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl SvgRasterizer {
    /// A rasterizer with no fonts loaded. Scenes with text fail to rasterize
    /// until fonts are added.
    pub fn new() -> Self {
        Self::with_fonts(fontdb::Database::new())
    }

    pub fn with_fonts(mut fontdb: fontdb::Database) -> Self {
        bind_sans_serif(&mut fontdb);
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Loads the fonts installed on the host.
    pub fn with_system_fonts(mut self, enable: bool) -> Self {
        if enable {
            let db = Arc::make_mut(&mut self.fontdb);
            db.load_system_fonts();
            if db.len() == 0 {
                log::warn!("No system fonts found; add font files to draw card text");
            } else {
                log::debug!("Loaded {} system font faces", db.len());
            }
            bind_sans_serif(db);
        }
        self
    }

    /// Registers an in-memory font file (TTF/OTF).
    pub fn with_font_data(mut self, data: Vec<u8>) -> Self {
        log::debug!("Adding font data ({} bytes)", data.len());
        let db = Arc::make_mut(&mut self.fontdb);
        db.load_font_data(data);
        bind_sans_serif(db);
        self
    }

    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// The family card text resolves to, if any face can serve it.
    pub fn text_family(&self) -> Option<String> {
        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = self.fontdb.query(&query)?;
        self.fontdb
            .face(id)
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, scene: &CardScene, scale: f32) -> Result<Bitmap, RenderError> {
        let (width, height) = check_scale(scene, scale)?;

        // resvg drops text it has no face for without complaint.
        if !scene.texts().is_empty() && self.text_family().is_none() {
            return Err(RenderError::Decode(format!(
                "no font face can draw the card text ({} faces loaded)",
                self.font_count()
            )));
        }

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(&scene.to_svg(), &options)
            .map_err(|e| RenderError::Decode(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::SurfaceUnavailable { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // Opaque background, so premultiplied and straight alpha coincide.
        let image = RgbaImage::from_raw(width, height, pixmap.take())
            .ok_or(RenderError::SurfaceUnavailable { width, height })?;
        Ok(Bitmap::new(image))
    }

    fn name(&self) -> &'static str {
        "resvg"
    }
}
