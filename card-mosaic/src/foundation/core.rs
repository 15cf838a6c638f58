use crate::foundation::error::{MosaicError, MosaicResult};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Create a validated, non-empty canvas size.
    pub fn new(width: u32, height: u32) -> MosaicResult<Self> {
        if width == 0 || height == 0 {
            return Err(MosaicError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> MosaicResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| MosaicError::validation("canvas buffer size overflow"))
    }
}

/// Resized card dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CardSize {
    /// Scale `(src_width, src_height)` to `target_height`, keeping the aspect ratio.
    ///
    /// The scaled width is truncated toward zero and never drops below one pixel.
    pub fn scaled_to_height(
        src_width: u32,
        src_height: u32,
        target_height: u32,
    ) -> MosaicResult<Self> {
        if src_width == 0 || src_height == 0 {
            return Err(MosaicError::validation(format!(
                "card image must be non-empty, got {src_width}x{src_height}"
            )));
        }
        if target_height == 0 {
            return Err(MosaicError::validation("card height must be > 0"));
        }
        let scale = f64::from(target_height) / f64::from(src_height);
        let width = (f64::from(src_width) * scale) as u32;
        Ok(Self {
            width: width.max(1),
            height: target_height,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
