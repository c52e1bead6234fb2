use std::path::{Path, PathBuf};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{StampError, StampResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A scalable font file registered with a [`TextLayoutEngine`], at a fixed size.
#[derive(Clone)]
pub struct LoadedFont {
    path: PathBuf,
    family_name: String,
    size_px: f32,
    data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("path", &self.path)
            .field("family_name", &self.family_name)
            .field("size_px", &self.size_px)
            .finish_non_exhaustive()
    }
}

impl LoadedFont {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Family name reported by the font's name table.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    pub(crate) fn data(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }
}

/// Stateful helper for registering fonts and building Parley layouts.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Read and register the font at `path` for use at `size_px`.
    ///
    /// Fails with [`StampError::FontLoad`] when the file cannot be read, contains no usable
    /// font family, or the size is not a positive finite number.
    pub fn load_font(&mut self, path: &Path, size_px: f32) -> StampResult<LoadedFont> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StampError::font_load(
                path,
                format!("font size must be finite and > 0, got {size_px}"),
            ));
        }
        let bytes = std::fs::read(path).map_err(|e| StampError::font_load(path, e))?;

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| StampError::font_load(path, "no font families found in file"))?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StampError::font_load(path, "registered font family has no name"))?
            .to_string();
        tracing::debug!(family = %family_name, size_px, "font registered");

        Ok(LoadedFont {
            path: path.to_path_buf(),
            family_name,
            size_px,
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        })
    }

    /// Shape a single unwrapped line of `text` in `font`.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &LoadedFont,
        brush: TextBrushRgba8,
    ) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
