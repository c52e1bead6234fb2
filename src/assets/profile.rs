use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{StampError, StampResult};
use crate::raster::shapes::circle_mask;
use crate::raster::surface::{Fill, Surface, masked_fill};

/// Decode an image file into straight RGBA8, sniffing the format from content.
pub fn decode_image_file(path: &Path) -> StampResult<image::RgbaImage> {
    let decode = || -> anyhow::Result<image::RgbaImage> {
        let reader = image::ImageReader::open(path)
            .context("open image file")?
            .with_guessed_format()
            .context("detect image format")?;
        let img = reader.decode().context("decode image")?;
        Ok(img.to_rgba8())
    };
    decode().map_err(|e| StampError::image_load(path, e))
}

/// Load the profile picture as a `size`×`size` disc on a transparent canvas.
///
/// The image is stretched to the square without preserving aspect ratio, then clipped to the
/// inscribed circle.
#[tracing::instrument(skip_all, fields(path = %path.display(), size = size))]
pub fn load_profile_image(path: &Path, size: u32) -> StampResult<Surface> {
    if size == 0 {
        return Err(StampError::validation("profile size must be > 0"));
    }
    let rgba = decode_image_file(path)?;
    tracing::debug!(src_w = rgba.width(), src_h = rgba.height(), "decoded profile");

    let resized =
        image::imageops::resize(&rgba, size, size, image::imageops::FilterType::CatmullRom);
    let square = Surface::from_rgba_image(resized);
    masked_fill(Fill::Surface(&square), &circle_mask(size))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/profile.rs"]
mod tests;
