//! End-to-end stamp generation: profile disc, colored arc band, curved caption.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::font::TextLayoutEngine;
use crate::assets::profile::load_profile_image;
use crate::foundation::core::StampGeometry;
use crate::foundation::error::{StampError, StampResult};
use crate::paint::color::ColorSpec;
use crate::raster::gradient::shaded;
use crate::raster::shapes::{RingWedge, ring_wedge_mask};
use crate::raster::surface::{Fill, Surface, masked_fill};
use crate::text::curved::{CharCell, draw_curved_text};

/// Output written when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "img/stamp.png";
/// Font used when no font is given; the copy bundled with the package.
pub const DEFAULT_FONT_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/fonts/DejaVuSans-Bold.ttf");
pub const DEFAULT_FONT_SIZE: f32 = 28.0;

/// Everything needed to produce one stamped image.
///
/// Deserializes from JSON with every field optional except that rendering needs a profile
/// path; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StampConfig {
    /// Profile picture, any format the `image` crate decodes.
    pub profile_path: PathBuf,
    /// Caption as the user typed it; see [`prepare_stamp_text`].
    pub stamp_text: String,
    /// Destination; the encoder is picked from the extension.
    pub output_path: PathBuf,
    /// Band color. Defaults to `purple`.
    pub stamp_color: ColorSpec,
    /// Caption color. Defaults to `white`.
    pub text_color: ColorSpec,
    /// Fade the band toward both ends of the arc.
    pub gradient: bool,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub geometry: StampGeometry,
    pub char_cell: CharCell,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::new(),
            stamp_text: String::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            stamp_color: ColorSpec::named("purple"),
            text_color: ColorSpec::named("white"),
            gradient: false,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            geometry: StampGeometry::default(),
            char_cell: CharCell::default(),
        }
    }
}

impl StampConfig {
    /// Config with defaults for everything but the profile and caption.
    pub fn new(profile_path: impl Into<PathBuf>, stamp_text: impl Into<String>) -> Self {
        Self {
            profile_path: profile_path.into(),
            stamp_text: stamp_text.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(s: &str) -> StampResult<Self> {
        serde_json::from_str(s).map_err(|e| StampError::serde(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> StampResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            StampError::serde(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn with_output_path(mut self, p: impl Into<PathBuf>) -> Self {
        self.output_path = p.into();
        self
    }

    pub fn with_stamp_color(mut self, c: impl Into<ColorSpec>) -> Self {
        self.stamp_color = c.into();
        self
    }

    pub fn with_text_color(mut self, c: impl Into<ColorSpec>) -> Self {
        self.text_color = c.into();
        self
    }

    pub fn with_gradient(mut self, on: bool) -> Self {
        self.gradient = on;
        self
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>, size: f32) -> Self {
        self.font_path = path.into();
        self.font_size = size;
        self
    }

    pub fn with_geometry(mut self, g: StampGeometry) -> Self {
        self.geometry = g;
        self
    }
}

/// Caption pre-processing: reverse the characters, then upper-case.
///
/// Characters are laid out with increasing angle, which runs right-to-left along the bottom of
/// the circle; reversing first makes the caption read left-to-right there.
pub fn prepare_stamp_text(text: &str) -> String {
    text.chars().rev().collect::<String>().to_uppercase()
}

/// Compose the stamped image in memory.
///
/// Fails fast on invalid colors, then on font or profile loading, before any pixels are drawn.
#[tracing::instrument(skip_all, fields(profile = %cfg.profile_path.display()))]
pub fn render_stamp(cfg: &StampConfig) -> StampResult<Surface> {
    cfg.geometry.validate()?;
    let stamp_color = cfg.stamp_color.resolve()?;
    let text_color = cfg.text_color.resolve()?;

    let mut engine = TextLayoutEngine::new();
    let font = engine.load_font(&cfg.font_path, cfg.font_size)?;

    let g = cfg.geometry;
    let size = g.img_size;
    let profile = load_profile_image(&cfg.profile_path, size)?;

    let wedge = RingWedge::from_geometry(&g);
    let mut mask = ring_wedge_mask(size, &wedge);
    if cfg.gradient {
        mask = shaded(mask, &wedge);
    }
    tracing::debug!(
        outer = g.outer_radius(),
        inner = g.inner_radius(),
        start = g.start_angle,
        end = g.end_angle,
        gradient = cfg.gradient,
        "stamp band"
    );

    let mut stamp = masked_fill(Fill::Solid(stamp_color), &mask)?;
    let caption = prepare_stamp_text(&cfg.stamp_text);
    draw_curved_text(
        &mut stamp,
        &mut engine,
        &font,
        g.center(),
        f64::from(g.text_radius()),
        &caption,
        text_color,
        g.start_angle,
        g.end_angle,
        &cfg.char_cell,
    )?;

    profile.over(&stamp)
}

/// Encode `surface` in the format implied by `path`'s extension and write it.
///
/// The image is encoded fully in memory first, so an encoder failure leaves no file behind.
pub fn write_output(surface: &Surface, path: &Path) -> StampResult<()> {
    let format =
        image::ImageFormat::from_path(path).map_err(|e| StampError::output_write(path, e))?;
    let rgba = surface.to_rgba_image()?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(|e| StampError::output_write(path, e))?;
    std::fs::write(path, &buf).map_err(|e| StampError::output_write(path, e))
}

/// Render the stamp described by `cfg` and write it to `cfg.output_path`.
///
/// Returns the path written.
#[tracing::instrument(skip_all, fields(out = %cfg.output_path.display()))]
pub fn generate_profile_stamp(cfg: &StampConfig) -> StampResult<PathBuf> {
    let image = render_stamp(cfg)?;
    write_output(&image, &cfg.output_path)?;
    tracing::info!(path = %cfg.output_path.display(), "stamp saved");
    Ok(cfg.output_path.clone())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
