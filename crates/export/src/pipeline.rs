use crate::archive::CardArchive;
use crate::config::{ExportConfig, SheetLayout};
use crate::error::ExportError;
use crate::naming;
use crate::pdf::SheetPdfWriter;
use bingo_render::{Bitmap, CardRenderer, Rasterizer, SvgRasterizer};
use bingo_types::{BingoCard, Participant};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// A finished, named export held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Writes the artifact into `dir` under its own file name.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// A builder for creating an [`ExportPipeline`].
#[derive(Debug, Clone)]
pub struct ExportPipelineBuilder {
    title: String,
    subtitle: String,
    date: Option<NaiveDate>,
    config: ExportConfig,
    system_fonts: bool,
    fonts: Vec<Vec<u8>>,
}

impl Default for ExportPipelineBuilder {
    fn default() -> Self {
        Self {
            title: "BINGO VIRTUAL".to_string(),
            subtitle: String::new(),
            date: None,
            config: ExportConfig::default(),
            system_fonts: true,
            fonts: Vec::new(),
        }
    }
}

impl ExportPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Pins the date printed on cards.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether the default resvg backend loads the host's fonts.
    pub fn with_system_fonts(mut self, system_fonts: bool) -> Self {
        self.system_fonts = system_fonts;
        self
    }

    /// Adds a TTF/OTF font for card text, on top of any system fonts.
    pub fn with_font_data(mut self, data: Vec<u8>) -> Self {
        self.fonts.push(data);
        self
    }

    /// Builds a pipeline over the resvg software rasterizer.
    pub fn build(mut self) -> ExportPipeline<SvgRasterizer> {
        let mut rasterizer = SvgRasterizer::new().with_system_fonts(self.system_fonts);
        for data in std::mem::take(&mut self.fonts) {
            rasterizer = rasterizer.with_font_data(data);
        }
        match rasterizer.text_family() {
            Some(family) => log::debug!(
                "{} font faces loaded, card text in '{}'",
                rasterizer.font_count(),
                family
            ),
            None => log::warn!("No usable font loaded; cards cannot be rasterized"),
        }
        self.build_with(rasterizer)
    }

    pub fn build_with<R: Rasterizer>(self, rasterizer: R) -> ExportPipeline<R> {
        let mut renderer = CardRenderer::new(self.title).with_subtitle(self.subtitle);
        if let Some(date) = self.date {
            renderer = renderer.with_date(date);
        }
        log::debug!("Export pipeline using the {} rasterizer", rasterizer.name());
        ExportPipeline {
            renderer,
            rasterizer,
            config: self.config,
        }
    }
}

/// Renders cards and packages them as PNG, zip or PDF artifacts.
///
/// Cards are rasterized strictly one at a time, yielding to the runtime
/// between cards. Any failure aborts the artifact in progress; nothing is
/// returned for it.
pub struct ExportPipeline<R: Rasterizer> {
    renderer: CardRenderer,
    rasterizer: R,
    config: ExportConfig,
}

impl<R: Rasterizer> ExportPipeline<R> {
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn renderer(&self) -> &CardRenderer {
        &self.renderer
    }

    async fn rasterize(
        &self,
        participant: &Participant,
        card: &BingoCard,
        scale: f32,
    ) -> Result<Bitmap, ExportError> {
        let scene = self.renderer.render(participant, card);
        let bitmap = self.rasterizer.rasterize(&scene, scale)?;
        tokio::task::yield_now().await;
        Ok(bitmap)
    }

    /// One card as a PNG, at the single-download scale.
    pub async fn card_image(
        &self,
        participant: &Participant,
        card: &BingoCard,
    ) -> Result<Artifact, ExportError> {
        let bitmap = self.rasterize(participant, card, self.config.single_scale).await?;
        Ok(Artifact {
            file_name: naming::single_image(participant, &card.id),
            bytes: bitmap.to_png()?,
        })
    }

    /// Every card of every participant, in roster order, as PNGs in one zip.
    pub async fn cards_archive(
        &self,
        participants: &[Participant],
    ) -> Result<Artifact, ExportError> {
        let total: usize = participants.iter().map(|p| p.cards.len()).sum();
        log::info!("Building archive of {} card(s)", total);

        let mut archive = CardArchive::new(naming::ARCHIVE_FOLDER)?;
        for participant in participants {
            for card in &participant.cards {
                let bitmap = self.rasterize(participant, card, self.config.archive_scale).await?;
                let name = naming::archive_entry(participant, &card.id);
                let entry = archive.add(&name, &bitmap.to_png()?)?;
                log::debug!("Archived {} ({}/{})", entry, archive.len(), total);
            }
        }

        Ok(Artifact {
            file_name: naming::ARCHIVE_FILE_NAME.to_string(),
            bytes: archive.finish()?,
        })
    }

    /// A participant's cards four to an A4 page, or one specific card
    /// centered on its own page.
    pub async fn cards_pdf(
        &self,
        participant: &Participant,
        card_id: Option<&str>,
    ) -> Result<Artifact, ExportError> {
        let (cards, file_name): (Vec<&BingoCard>, String) = match card_id {
            Some(id) => {
                let card = participant
                    .card(id)
                    .ok_or_else(|| ExportError::CardNotFound(id.into()))?;
                (vec![card], naming::single_card_pdf(participant, &card.id))
            }
            None => (participant.cards.iter().collect(), naming::participant_pdf(participant)),
        };
        if cards.is_empty() {
            return Err(ExportError::NoCards(participant.id.clone()));
        }
        log::info!("Building {} with {} card(s)", file_name, cards.len());

        let layout = self.config.sheet;
        let centered = card_id.is_some() && cards.len() == 1;
        let mut writer = SheetPdfWriter::new(layout);

        for (i, card) in cards.iter().enumerate() {
            if SheetLayout::starts_page(i) {
                writer.begin_page()?;
            }
            let bitmap = self.rasterize(participant, card, self.config.pdf_scale).await?;
            let cell = if centered { layout.centered_slot() } else { layout.slot(i) };
            writer.place_card(&bitmap, cell)?;
        }

        Ok(Artifact {
            file_name,
            bytes: writer.finish()?,
        })
    }
}
