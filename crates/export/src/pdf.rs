//! Paginated card sheets written with lopdf.
//!
//! Each page is an image-only page: every placed card becomes an RGB image
//! XObject drawn into its box, followed by a thin gray guide rectangle for
//! cutting. Geometry comes in millimetres from the top-left corner and is
//! flipped into PDF user space here.

use crate::config::{SheetLayout, MM_TO_PT};
use crate::error::ExportError;
use bingo_render::Bitmap;
use bingo_types::{Rect, Size};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

const GUIDE_WIDTH_PT: f32 = 0.57;

struct PageInProgress {
    operations: Vec<Operation>,
    xobjects: Dictionary,
    image_count: usize,
}

impl PageInProgress {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            xobjects: Dictionary::new(),
            image_count: 0,
        }
    }
}

/// Builds a card sheet document page by page.
///
/// Nothing is serialized until [`SheetPdfWriter::finish`], so dropping the
/// writer part-way leaves no partial output behind.
pub struct SheetPdfWriter {
    doc: Document,
    layout: SheetLayout,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: Option<PageInProgress>,
}

impl SheetPdfWriter {
    pub fn new(layout: SheetLayout) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            layout,
            pages_id,
            page_ids: Vec::new(),
            current: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.current.is_some())
    }

    /// Closes the current page, if any, and opens a blank one.
    pub fn begin_page(&mut self) -> Result<(), ExportError> {
        self.flush_page()?;
        self.current = Some(PageInProgress::new());
        Ok(())
    }

    /// Draws `bitmap` fitted inside `cell` (aspect ratio kept, centered) with
    /// a guide rectangle around the placed image. Returns the placed box.
    pub fn place_card(&mut self, bitmap: &Bitmap, cell: Rect) -> Result<Rect, ExportError> {
        let placed = cell.fit_centered(Size::new(bitmap.width() as f32, bitmap.height() as f32));
        let image_id = self.add_image(bitmap)?;
        let (x, y, w, h) = self.to_user_space(placed);
        let [r, g, b] = self.layout.guide_color.to_unit_rgb();

        let page = self.current.get_or_insert_with(PageInProgress::new);
        page.image_count += 1;
        let name = format!("Im{}", page.image_count);
        page.xobjects.set(name.as_bytes().to_vec(), image_id);

        page.operations.extend([
            Operation::new("q", vec![]),
            Operation::new("cm", vec![w.into(), 0.into(), 0.into(), h.into(), x.into(), y.into()]),
            Operation::new("Do", vec![Object::Name(name.into_bytes())]),
            Operation::new("Q", vec![]),
            Operation::new("RG", vec![r.into(), g.into(), b.into()]),
            Operation::new("w", vec![GUIDE_WIDTH_PT.into()]),
            Operation::new("re", vec![x.into(), y.into(), w.into(), h.into()]),
            Operation::new("S", vec![]),
        ]);
        Ok(placed)
    }

    /// Serializes the document. Fails if no page was ever opened.
    pub fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        self.flush_page()?;
        if self.page_ids.is_empty() {
            return Err(ExportError::EmptyDocument);
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, pages_dict.into());

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        self.doc.save_to(&mut out)?;
        log::debug!("Wrote {} page(s), {} bytes", self.page_ids.len(), out.len());
        Ok(out)
    }

    fn add_image(&mut self, bitmap: &Bitmap) -> Result<ObjectId, ExportError> {
        let mut stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => bitmap.width() as i64,
                "Height" => bitmap.height() as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            bitmap.to_rgb_bytes(),
        );
        stream.compress()?;
        Ok(self.doc.add_object(stream))
    }

    fn flush_page(&mut self) -> Result<(), ExportError> {
        let Some(page) = self.current.take() else {
            return Ok(());
        };
        let content = Content { operations: page.operations };
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let size = self.layout.page_size_pt();
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => dictionary! { "XObject" => page.xobjects },
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Millimetres from the top-left to points from the bottom-left.
    fn to_user_space(&self, rect: Rect) -> (f32, f32, f32, f32) {
        let page_height = self.layout.page_height * MM_TO_PT;
        (
            rect.x * MM_TO_PT,
            page_height - (rect.y + rect.height) * MM_TO_PT,
            rect.width * MM_TO_PT,
            rect.height * MM_TO_PT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_types::Color;

    fn xobject_count(doc: &Document, page: ObjectId) -> usize {
        doc.get_object(page)
            .and_then(Object::as_dict)
            .and_then(|d| d.get(b"Resources"))
            .and_then(Object::as_dict)
            .and_then(|r| r.get(b"XObject"))
            .and_then(Object::as_dict)
            .map(|x| x.len())
            .unwrap()
    }

    fn card_bitmap() -> Bitmap {
        Bitmap::filled(16, 22, [255, 255, 255])
    }

    #[test]
    fn test_pages_and_images() {
        let layout = SheetLayout::default();
        let mut writer = SheetPdfWriter::new(layout);
        for i in 0..5 {
            if SheetLayout::starts_page(i) {
                writer.begin_page().unwrap();
            }
            writer.place_card(&card_bitmap(), layout.slot(i)).unwrap();
        }
        assert_eq!(writer.page_count(), 2);
        let bytes = writer.finish().unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);

        assert_eq!(xobject_count(&doc, pages[&1]), 4);
        assert_eq!(xobject_count(&doc, pages[&2]), 1);
    }

    #[test]
    fn test_card_is_fitted_and_guided() {
        let layout = SheetLayout {
            guide_color: Color::rgb(0xff, 0, 0x33),
            ..SheetLayout::default()
        };
        let mut writer = SheetPdfWriter::new(layout);
        let placed = writer.place_card(&card_bitmap(), layout.slot(0)).unwrap();
        // 16x22 has the card's 8:11 ratio, which is narrower than the cell.
        assert_eq!(placed.width, 90.0);
        assert!((placed.height - 123.75).abs() < 1e-3);
        assert!(layout.slot(0).contains_rect(&placed));

        let bytes = writer.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page = doc.get_pages()[&1];
        let content = Content::decode(&doc.get_page_content(page).unwrap()).unwrap();
        let ops: Vec<&str> = content.operations.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(ops, ["q", "cm", "Do", "Q", "RG", "w", "re", "S"]);

        let rgb: Vec<f32> = content.operations[4]
            .operands
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect();
        for (got, want) in rgb.iter().zip([1.0, 0.0, 0.2]) {
            assert!((got - want).abs() < 1e-3, "{:?}", rgb);
        }
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let writer = SheetPdfWriter::new(SheetLayout::default());
        assert!(writer.finish().is_err());
    }
}
