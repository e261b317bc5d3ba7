#![allow(dead_code)]

pub mod fixtures;

use bingo::export::ExportConfig;
use bingo::render::{Bitmap, CardScene, RenderError};
use bingo::{ExportPipeline, ExportPipelineBuilder, Rasterizer};
use lopdf::{Document as LopdfDocument, Object, ObjectId};
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Drives an export future on a fresh runtime, the way a synchronous caller would.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
        .block_on(future)
}

/// Paints every scene plain white without touching fonts.
pub struct WhiteRasterizer;

impl Rasterizer for WhiteRasterizer {
    fn rasterize(&self, scene: &CardScene, scale: f32) -> Result<Bitmap, RenderError> {
        let (width, height) = scene.pixel_size(scale);
        Ok(Bitmap::filled(width, height, [255, 255, 255]))
    }

    fn name(&self) -> &'static str {
        "white"
    }
}

/// Succeeds `ok` times, then reports the surface as unavailable.
pub struct FailingRasterizer {
    ok: usize,
    calls: AtomicUsize,
}

impl FailingRasterizer {
    pub fn after(ok: usize) -> Self {
        Self {
            ok,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, scene: &CardScene, scale: f32) -> Result<Bitmap, RenderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let (width, height) = scene.pixel_size(scale);
        if call >= self.ok {
            return Err(RenderError::SurfaceUnavailable { width, height });
        }
        Ok(Bitmap::filled(width, height, [255, 255, 255]))
    }
}

/// Small scales keep the artifacts tiny.
pub fn tiny_config() -> ExportConfig {
    ExportConfig {
        single_scale: 0.1,
        archive_scale: 0.1,
        pdf_scale: 0.1,
        ..Default::default()
    }
}

pub fn white_pipeline() -> ExportPipeline<WhiteRasterizer> {
    ExportPipelineBuilder::new()
        .with_config(tiny_config())
        .build_with(WhiteRasterizer)
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    fn page_id(&self, page: u32) -> ObjectId {
        self.doc.get_pages()[&page]
    }

    /// Number of images referenced by a 1-based page.
    pub fn image_count(&self, page: u32) -> usize {
        self.doc
            .get_object(self.page_id(page))
            .and_then(Object::as_dict)
            .and_then(|d| d.get(b"Resources"))
            .and_then(Object::as_dict)
            .and_then(|r| r.get(b"XObject"))
            .and_then(Object::as_dict)
            .map(|x| x.len())
            .unwrap_or(0)
    }

    /// Operands of every `cm` on a page: where each card image was placed.
    pub fn placements(&self, page: u32) -> Vec<Vec<f32>> {
        let content = self
            .doc
            .get_and_decode_page_content(self.page_id(page))
            .expect("page content");
        content
            .operations
            .iter()
            .filter(|op| op.operator == "cm")
            .map(|op| op.operands.iter().filter_map(|o| o.as_float().ok()).collect())
            .collect()
    }
}

/// Names and contents of a generated zip.
pub struct GeneratedZip {
    archive: zip::ZipArchive<Cursor<Vec<u8>>>,
}

impl GeneratedZip {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            archive: zip::ZipArchive::new(Cursor::new(bytes))?,
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    pub fn read(&mut self, name: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let mut bytes = Vec::new();
        self.archive.by_name(name)?.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
