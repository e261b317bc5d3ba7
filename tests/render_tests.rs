mod common;

use bingo::export::ExportError;
use bingo::render::layout::{cell_rect, CANVAS_HEIGHT, CANVAS_WIDTH};
use bingo::render::RenderError;
use bingo::types::{Rect, FREE_SPACE_INDEX};
use bingo::{ExportPipelineBuilder, SvgRasterizer};
use chrono::NaiveDate;
use common::fixtures::*;
use common::*;
use image::RgbaImage;

const SCALE: f32 = 2.5;

/// Pixels inside `rect` (canvas units, shrunk by `inset`) that satisfy `pred`.
fn count_in(image: &RgbaImage, rect: Rect, inset: f32, pred: impl Fn([u8; 3]) -> bool) -> usize {
    let x0 = ((rect.x + inset) * SCALE) as u32;
    let y0 = ((rect.y + inset) * SCALE) as u32;
    let x1 = ((rect.right() - inset) * SCALE) as u32;
    let y1 = ((rect.bottom() - inset) * SCALE) as u32;
    (y0..y1)
        .flat_map(|y| (x0..x1).map(move |x| (x, y)))
        .filter(|&(x, y)| {
            let p = image.get_pixel(x, y);
            pred([p[0], p[1], p[2]])
        })
        .count()
}

fn is_ink(rgb: [u8; 3]) -> bool {
    rgb.iter().all(|&c| c < 128)
}

/// Darker than the free space's pale fill, i.e. the star or its label.
fn is_free_mark(rgb: [u8; 3]) -> bool {
    rgb[0] < 200 && rgb[1] < 210
}

#[test]
fn test_scenario_card_is_drawn_with_real_fonts() -> TestResult {
    init_logger();
    let participant = participant_with_cards("P1", "Ana", 1, 1);
    let pipeline = ExportPipelineBuilder::new()
        .with_date(NaiveDate::from_ymd_opt(2024, 3, 9).ok_or("date")?)
        .build();

    if SvgRasterizer::new().with_system_fonts(true).text_family().is_none() {
        log::warn!("Host has no fonts; checking that export refuses to drop text");
        let err = block_on(pipeline.card_image(&participant, &participant.cards[0])).unwrap_err();
        assert!(matches!(err, ExportError::Render(RenderError::Decode(_))));
        return Ok(());
    }

    let artifact = block_on(pipeline.card_image(&participant, &participant.cards[0]))?;
    let image = image::load_from_memory(&artifact.bytes)?.to_rgba8();
    assert_eq!(
        (image.width(), image.height()),
        ((CANVAS_WIDTH * SCALE) as u32, (CANVAS_HEIGHT * SCALE) as u32)
    );

    // Cell 0 holds the number 1 in black on white.
    let first = cell_rect(0);
    assert!(count_in(&image, first, 10.0, is_ink) > 50);

    // The free space carries the star and the LIBRE label, no number.
    let free = cell_rect(FREE_SPACE_INDEX);
    assert_eq!(count_in(&image, free, 10.0, is_ink), 0);
    let star = Rect::new(free.x + 45.0, free.y + 45.0, 30.0, 30.0);
    assert!(count_in(&image, star, 0.0, is_free_mark) > 50);
    let label = Rect::new(free.x + 35.0, free.y + 85.0, 50.0, 12.0);
    assert!(count_in(&image, label, 0.0, is_free_mark) > 20);
    Ok(())
}

#[test]
fn test_pipeline_without_fonts_reports_decode_error() {
    init_logger();
    let participant = participant_with_cards("P1", "Ana", 1, 1);
    let pipeline = ExportPipelineBuilder::new().with_system_fonts(false).build();

    let err = block_on(pipeline.cards_pdf(&participant, None)).unwrap_err();
    assert!(matches!(err, ExportError::Render(RenderError::Decode(_))));
}
