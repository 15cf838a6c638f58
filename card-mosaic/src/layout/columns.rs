use crate::foundation::core::CardSize;
use crate::foundation::error::{MosaicError, MosaicResult};

/// Horizontal column grid shared by every column of a mosaic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnGeometry {
    /// Reference card size (the first card after resizing).
    pub card: CardSize,
    /// Distance between the starts of adjacent columns, `card.width + column_gap`.
    pub pitch: i64,
    /// Clamped x-offset of each column, non-decreasing.
    pub offsets: Vec<u32>,
}

impl ColumnGeometry {
    /// Compute the grid for a canvas `canvas_width` pixels wide.
    pub fn new(canvas_width: u32, card: CardSize, column_gap: i32) -> MosaicResult<Self> {
        let pitch = i64::from(card.width) + i64::from(column_gap);
        if pitch <= 0 {
            return Err(MosaicError::validation(format!(
                "column pitch must be > 0 (card width {} + column gap {column_gap})",
                card.width
            )));
        }
        let offsets = column_offsets(canvas_width, card.width, pitch);
        Ok(Self {
            card,
            pitch,
            offsets,
        })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`; a grid has at least one column.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Column x-offsets for `ceil((canvas_width + gap) / pitch)` columns (at least one).
///
/// Column `i` starts at `i * pitch`, clamped into `[0, max(canvas_width - card_width, 0)]` so the
/// rightmost column stays on the canvas. `pitch` must be positive.
pub fn column_offsets(canvas_width: u32, card_width: u32, pitch: i64) -> Vec<u32> {
    debug_assert!(pitch > 0);
    let pitch = pitch.max(1);
    let gap = pitch - i64::from(card_width);
    let span = i64::from(canvas_width) + gap;
    let count = if span <= 0 {
        1
    } else {
        ((span + pitch - 1) / pitch).max(1)
    };

    let max_x = i64::from(canvas_width.saturating_sub(card_width));
    (0..count)
        .map(|col| (col * pitch).clamp(0, max_x) as u32)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/columns.rs"]
mod tests;
