use crate::foundation::core::CanvasSize;
use crate::foundation::error::{MosaicError, MosaicResult};

/// Mosaic target as straight-alpha RGBA8, tightly packed, row-major.
///
/// A new canvas is fully transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: CanvasSize,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a transparent canvas.
    pub fn new(size: CanvasSize) -> MosaicResult<Self> {
        let len = size.rgba_len()?;
        Ok(Self {
            size,
            data: vec![0u8; len],
        })
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Pixel bytes, exactly as they are encoded.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y as usize) * (self.size.width as usize) + (x as usize)) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Hand the pixel buffer over as an [`image::RgbaImage`] without copying.
    pub fn into_rgba_image(self) -> MosaicResult<image::RgbaImage> {
        let Self { size, data } = self;
        image::RgbaImage::from_raw(size.width, size.height, data)
            .ok_or_else(|| MosaicError::validation("canvas buffer does not match its size"))
    }
}
