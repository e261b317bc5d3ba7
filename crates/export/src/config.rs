use bingo_types::{Color, Rect, Size};
use serde::{Deserialize, Serialize};

pub const MM_TO_PT: f32 = 72.0 / 25.4;
const CARDS_PER_ROW: usize = 2;
pub const CARDS_PER_PAGE: usize = CARDS_PER_ROW * CARDS_PER_ROW;

/// Resolution multipliers per artifact kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    pub single_scale: f32,
    pub archive_scale: f32,
    pub pdf_scale: f32,
    pub sheet: SheetLayout,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            single_scale: 2.5,
            archive_scale: 1.5,
            pdf_scale: 3.0,
            sheet: SheetLayout::default(),
        }
    }
}

/// Page geometry for printable sheets, in millimetres from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub gap: f32,
    /// Cutting guide drawn around each card, `#rrggbb` in config files.
    pub guide_color: Color,
}

impl Default for SheetLayout {
    fn default() -> Self {
        // A4 portrait
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 10.0,
            gap: 10.0,
            guide_color: Color::gray(220),
        }
    }
}

impl SheetLayout {
    pub fn page_size_pt(&self) -> Size {
        Size::new(self.page_width * MM_TO_PT, self.page_height * MM_TO_PT)
    }

    /// Size of one of the four grid cells.
    pub fn cell_size(&self) -> Size {
        let n = CARDS_PER_ROW as f32;
        Size::new(
            (self.page_width - 2.0 * self.margin - self.gap) / n,
            (self.page_height - 2.0 * self.margin - self.gap) / n,
        )
    }

    /// Grid cell for the `index`-th card on a page, filled row by row.
    pub fn slot(&self, index: usize) -> Rect {
        let cell = self.cell_size();
        let pos = index % CARDS_PER_PAGE;
        let (col, row) = ((pos % CARDS_PER_ROW) as f32, (pos / CARDS_PER_ROW) as f32);
        Rect::new(
            self.margin + col * (cell.width + self.gap),
            self.margin + row * (cell.height + self.gap),
            cell.width,
            cell.height,
        )
    }

    /// A cell-sized box centered on the page, used for single-card sheets.
    pub fn centered_slot(&self) -> Rect {
        let cell = self.cell_size();
        Rect::new(
            (self.page_width - cell.width) / 2.0,
            (self.page_height - cell.height) / 2.0,
            cell.width,
            cell.height,
        )
    }

    /// True when the `index`-th card must open a fresh page.
    pub fn starts_page(index: usize) -> bool {
        index > 0 && index % CARDS_PER_PAGE == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_slots() {
        let layout = SheetLayout::default();
        assert_eq!(layout.cell_size(), Size::new(90.0, 133.5));
        assert_eq!(layout.slot(0), Rect::new(10.0, 10.0, 90.0, 133.5));
        assert_eq!(layout.slot(1), Rect::new(110.0, 10.0, 90.0, 133.5));
        assert_eq!(layout.slot(2), Rect::new(10.0, 153.5, 90.0, 133.5));
        assert_eq!(layout.slot(3), Rect::new(110.0, 153.5, 90.0, 133.5));
        assert_eq!(layout.slot(4), layout.slot(0));
    }

    #[test]
    fn test_centered_slot() {
        let layout = SheetLayout::default();
        assert_eq!(layout.centered_slot(), Rect::new(60.0, 81.75, 90.0, 133.5));
    }

    #[test]
    fn test_page_breaks() {
        let breaks: Vec<usize> = (0..10).filter(|i| SheetLayout::starts_page(*i)).collect();
        assert_eq!(breaks, vec![4, 8]);
    }

    #[test]
    fn test_config_defaults_fill_missing_keys() {
        let config: ExportConfig = serde_json::from_str(r#"{"pdfScale": 2.0}"#).unwrap();
        assert_eq!(config.pdf_scale, 2.0);
        assert_eq!(config.single_scale, 2.5);
        assert_eq!(config.sheet, SheetLayout::default());
    }

    #[test]
    fn test_guide_color_reads_hex() {
        let layout: SheetLayout = serde_json::from_str(r##"{"guideColor": "#ccc"}"##).unwrap();
        assert_eq!(layout.guide_color, Color::gray(0xcc));
        assert_eq!(layout.margin, 10.0);

        let json = serde_json::to_string(&SheetLayout::default()).unwrap();
        assert!(json.contains(r##""guideColor":"#dcdcdc""##));
        assert!(serde_json::from_str::<SheetLayout>(r#"{"guideColor": "red"}"#).is_err());
    }
}
