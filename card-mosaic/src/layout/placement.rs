use crate::assets::cards::CardImage;
use crate::foundation::core::{CanvasSize, CardSize};
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::rng::Rng64;
use crate::layout::columns::ColumnGeometry;

/// One card drawn at a fixed canvas position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Column the placement belongs to.
    pub column: usize,
    /// Index into the loaded card list.
    pub card: usize,
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
}

/// Placements for one column, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnPlan {
    /// Slots whose top landed on the canvas.
    pub placements: Vec<Placement>,
    /// Slots drawn above the canvas and dropped.
    pub skipped: usize,
}

/// Full layout of a mosaic, in compositing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicLayout {
    /// Canvas the layout was planned for.
    pub canvas: CanvasSize,
    /// Column grid.
    pub geometry: ColumnGeometry,
    /// Column-major, top-to-bottom placements.
    pub placements: Vec<Placement>,
    /// Slots dropped because their top fell above the canvas.
    pub skipped: usize,
}

/// Plan a single column.
///
/// The column starts at `-rand(0..=card_height)` and keeps stacking cards until the running top
/// reaches `canvas_height`. Every slot draws a card index and then a jitter in
/// `[-|row_gap|, |row_gap|]`; slots whose top is above the canvas still consume both draws and
/// still advance, they are only left out of the plan.
pub fn plan_column(
    rng: &mut Rng64,
    column: usize,
    x: u32,
    card_count: usize,
    card_height: u32,
    canvas_height: u32,
    row_gap: i32,
) -> ColumnPlan {
    let mut plan = ColumnPlan::default();
    if card_count == 0 {
        return plan;
    }

    let card_height = i64::from(card_height);
    let row_gap = i64::from(row_gap);
    let jitter_span = row_gap.abs();
    let bottom = i64::from(canvas_height);

    let mut y = -rng.range_inclusive(0, card_height);
    while y < bottom {
        let card = rng.pick_index(card_count).unwrap_or(0);
        if y >= 0 {
            plan.placements.push(Placement {
                column,
                card,
                x,
                y: y as u32,
            });
        } else {
            plan.skipped += 1;
        }

        let jitter = rng.range_inclusive(-jitter_span, jitter_span);
        // Validated callers guarantee a positive step; the floor keeps direct callers finite.
        y += (card_height + row_gap + jitter).max(1);
    }
    plan
}

/// Reject row gaps that could stop a column from advancing.
pub(crate) fn validate_row_gap(card: CardSize, row_gap: i32) -> MosaicResult<()> {
    let min_step = i64::from(card.height) + i64::from(row_gap) - i64::from(row_gap).abs();
    if min_step <= 0 {
        return Err(MosaicError::validation(format!(
            "row gap {row_gap} lets rows overlap completely (card height {})",
            card.height
        )));
    }
    Ok(())
}

/// Plan every column of a mosaic over `cards`.
///
/// Geometry uses the first card as reference. Draws happen column by column, so the result is a
/// pure function of the inputs and the generator state.
#[tracing::instrument(skip(cards, rng), fields(cards = cards.len()))]
pub fn plan_mosaic(
    cards: &[CardImage],
    canvas: CanvasSize,
    column_gap: i32,
    row_gap: i32,
    rng: &mut Rng64,
) -> MosaicResult<MosaicLayout> {
    let sample = cards
        .first()
        .ok_or_else(|| MosaicError::not_found("no cards to lay out"))?;
    let card = sample.size();

    validate_row_gap(card, row_gap)?;
    if row_gap < 0 {
        tracing::warn!(row_gap, "negative row gap, rows will overlap");
    }

    let geometry = ColumnGeometry::new(canvas.width, card, column_gap)?;

    let mut placements = Vec::new();
    let mut skipped = 0usize;
    for (column, &x) in geometry.offsets.iter().enumerate() {
        let plan = plan_column(
            rng,
            column,
            x,
            cards.len(),
            card.height,
            canvas.height,
            row_gap,
        );
        tracing::debug!(
            column,
            x,
            placed = plan.placements.len(),
            skipped = plan.skipped,
            "planned column"
        );
        skipped += plan.skipped;
        placements.extend(plan.placements);
    }

    Ok(MosaicLayout {
        canvas,
        geometry,
        placements,
        skipped,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
