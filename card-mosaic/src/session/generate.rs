use std::path::PathBuf;

use crate::assets::cards::{CardImage, DEFAULT_CARD_EXTENSION, load_cards};
use crate::encode::writer::write_canvas;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::rng::Rng64;
use crate::layout::placement::{MosaicLayout, plan_mosaic};
use crate::render::canvas::Canvas;
use crate::render::composite::composite;

/// Everything a generation run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicOpts {
    /// Directory scanned for card images.
    pub cards_dir: PathBuf,
    /// Destination image; its extension selects the encoder.
    pub output: PathBuf,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Height every card is resized to.
    pub card_height: u32,
    /// Horizontal gap between columns. May be negative as long as the pitch stays positive.
    pub column_gap: i32,
    /// Base vertical gap between cards; also the jitter bound.
    pub row_gap: i32,
    /// Layout seed. `None` draws one from process entropy.
    pub seed: Option<u64>,
    /// Card file extension, matched case-insensitively.
    pub extension: String,
}

impl Default for MosaicOpts {
    fn default() -> Self {
        Self {
            cards_dir: PathBuf::from("public/tarot"),
            output: PathBuf::from("public/tarot_background.png"),
            width: 2400,
            height: 3600,
            card_height: 540,
            column_gap: 24,
            row_gap: 12,
            seed: None,
            extension: DEFAULT_CARD_EXTENSION.to_string(),
        }
    }
}

impl MosaicOpts {
    /// Check options that do not depend on the loaded cards.
    pub fn validate(&self) -> MosaicResult<()> {
        CanvasSize::new(self.width, self.height)?;
        if self.card_height == 0 {
            return Err(MosaicError::validation("card height must be > 0"));
        }
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(MosaicError::validation("card extension must be non-empty"));
        }
        Ok(())
    }

    fn canvas(&self) -> MosaicResult<CanvasSize> {
        CanvasSize::new(self.width, self.height)
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicStats {
    /// Seed the layout was drawn from; pass it back to reproduce the run.
    pub seed: u64,
    /// Cards loaded.
    pub cards: usize,
    /// Columns in the grid.
    pub columns: usize,
    /// Cards composited.
    pub placements: usize,
    /// Slots dropped above the canvas.
    pub skipped: usize,
}

/// A composited canvas that has not been written yet.
#[derive(Clone, Debug)]
pub struct RenderedMosaic {
    /// Final canvas.
    pub canvas: Canvas,
    /// Layout it was painted from.
    pub layout: MosaicLayout,
    /// Run summary.
    pub stats: MosaicStats,
}

/// Validated generation run.
#[derive(Clone, Debug)]
pub struct MosaicSession {
    opts: MosaicOpts,
    seed: u64,
}

impl MosaicSession {
    /// Validate `opts` and fix the seed.
    pub fn new(opts: MosaicOpts) -> MosaicResult<Self> {
        opts.validate()?;
        let seed = opts.seed.unwrap_or_else(Rng64::entropy_seed);
        Ok(Self { opts, seed })
    }

    /// Options this session was built from.
    pub fn opts(&self) -> &MosaicOpts {
        &self.opts
    }

    /// Seed used for layout.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Load and normalize the cards.
    pub fn load(&self) -> MosaicResult<Vec<CardImage>> {
        load_cards(
            &self.opts.cards_dir,
            self.opts.card_height,
            self.opts.extension.trim_start_matches('.'),
        )
    }

    /// Plan placements for `cards` from a fresh generator seeded with [`Self::seed`].
    pub fn plan(&self, cards: &[CardImage]) -> MosaicResult<MosaicLayout> {
        let mut rng = Rng64::new(self.seed);
        plan_mosaic(
            cards,
            self.opts.canvas()?,
            self.opts.column_gap,
            self.opts.row_gap,
            &mut rng,
        )
    }

    /// Load, plan and composite without touching the output path.
    #[tracing::instrument(skip(self), fields(seed = self.seed))]
    pub fn render(&self) -> MosaicResult<RenderedMosaic> {
        let cards = self.load()?;
        let layout = self.plan(&cards)?;
        let canvas = composite(&layout, &cards)?;

        let stats = MosaicStats {
            seed: self.seed,
            cards: cards.len(),
            columns: layout.geometry.len(),
            placements: layout.placements.len(),
            skipped: layout.skipped,
        };
        tracing::debug!(?stats, "rendered mosaic");
        Ok(RenderedMosaic {
            canvas,
            layout,
            stats,
        })
    }

    /// Render and write to [`MosaicOpts::output`].
    pub fn run(&self) -> MosaicResult<MosaicStats> {
        let rendered = self.render()?;
        write_canvas(&rendered.canvas, &self.opts.output)?;
        Ok(rendered.stats)
    }
}

/// Run the whole pipeline for `opts`.
pub fn generate(opts: MosaicOpts) -> MosaicResult<MosaicStats> {
    MosaicSession::new(opts)?.run()
}
