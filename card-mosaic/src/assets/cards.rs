use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::foundation::core::CardSize;
use crate::foundation::error::{MosaicError, MosaicResult};

/// File extension matched by default when scanning a card directory.
pub const DEFAULT_CARD_EXTENSION: &str = "png";

/// A card face normalized to the mosaic's card height.
///
/// Pixels are straight-alpha RGBA8, row-major and tightly packed. Cards are immutable once built.
#[derive(Clone, Debug)]
pub struct CardImage {
    name: String,
    source_width: u32,
    source_height: u32,
    size: CardSize,
    rgba8: Vec<u8>,
}

impl CardImage {
    /// Resize a straight-alpha RGBA image to `target_height`, preserving its aspect ratio.
    pub fn from_rgba(
        name: impl Into<String>,
        rgba: image::RgbaImage,
        target_height: u32,
    ) -> MosaicResult<Self> {
        let (source_width, source_height) = rgba.dimensions();
        let size = CardSize::scaled_to_height(source_width, source_height, target_height)?;

        let resized = if (source_width, source_height) == (size.width, size.height) {
            rgba
        } else {
            image::imageops::resize(&rgba, size.width, size.height, FilterType::Lanczos3)
        };

        Ok(Self {
            name: name.into(),
            source_width,
            source_height,
            size,
            rgba8: resized.into_raw(),
        })
    }

    /// Decode the image at `path` (any channel layout) and normalize it.
    pub fn open(path: &Path, target_height: u32) -> MosaicResult<Self> {
        let dyn_img = image::open(path)
            .map_err(|e| MosaicError::io(format!("decode card '{}'", path.display()), e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_rgba(name, dyn_img.to_rgba8(), target_height)
    }

    /// File name the card was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width after resizing.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height after resizing.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Resized dimensions.
    pub fn size(&self) -> CardSize {
        self.size
    }

    /// Dimensions of the decoded source image.
    pub fn source_size(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Straight-alpha RGBA8 pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.rgba8
    }
}

/// List files in `dir` whose extension matches `extension` (ASCII case-insensitive), sorted by
/// file name.
pub fn list_card_paths(dir: &Path, extension: &str) -> MosaicResult<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MosaicError::not_found(format!(
                "card directory '{}' does not exist",
                dir.display()
            )));
        }
        Err(e) => {
            return Err(MosaicError::io(
                format!("read card directory '{}'", dir.display()),
                e,
            ));
        }
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| MosaicError::io(format!("read card directory '{}'", dir.display()), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Load every matching card in `dir`, each resized to `target_height`.
///
/// Fails with [`MosaicError::NotFound`] when nothing matches. Decode failures abort the load.
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_cards(
    dir: &Path,
    target_height: u32,
    extension: &str,
) -> MosaicResult<Vec<CardImage>> {
    let paths = list_card_paths(dir, extension)?;
    if paths.is_empty() {
        return Err(MosaicError::not_found(format!(
            "no .{extension} cards found in '{}'",
            dir.display()
        )));
    }

    let mut cards = Vec::with_capacity(paths.len());
    for path in &paths {
        let card = CardImage::open(path, target_height)?;
        tracing::debug!(
            card = card.name(),
            source_w = card.source_width,
            source_h = card.source_height,
            w = card.width(),
            h = card.height(),
            "loaded card"
        );
        cards.push(card);
    }
    Ok(cards)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cards.rs"]
mod tests;
