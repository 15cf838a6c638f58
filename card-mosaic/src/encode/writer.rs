use std::path::Path;

use crate::foundation::error::{MosaicError, MosaicResult};
use crate::render::canvas::Canvas;

/// Write `canvas` to `path`, creating missing parent directories.
///
/// The encoder is picked from the extension of `path`. The canvas buffer is encoded in place.
#[tracing::instrument(skip(canvas), fields(out = %path.display()))]
pub fn write_canvas(canvas: &Canvas, path: &Path) -> MosaicResult<()> {
    let format = image::ImageFormat::from_path(path).map_err(|e| {
        MosaicError::io(
            format!("pick image format for '{}'", path.display()),
            e,
        )
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            MosaicError::io(format!("create output dir '{}'", parent.display()), e)
        })?;
    }

    image::save_buffer_with_format(
        path,
        canvas.pixels(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        format,
    )
    .map_err(|e| MosaicError::io(format!("write image '{}'", path.display()), e))?;

    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        ?format,
        "wrote canvas"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/writer.rs"]
mod tests;
