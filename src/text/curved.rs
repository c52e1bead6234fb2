//! Text set along a circular arc, one glyph at a time.
//!
//! Every character is placed at its own angle on the circle and turned so its baseline is
//! tangent to it. Characters advance with increasing angle, which is clockwise on screen.

use crate::assets::font::{LoadedFont, TextBrushRgba8, TextLayoutEngine};
use crate::foundation::core::{Affine, Rgba8};
use crate::foundation::error::{StampError, StampResult};
use crate::foundation::math::polar;
use crate::raster::surface::Surface;

/// Extra spacing reserved across the arc, in character widths.
pub const SPACING_FACTOR: f64 = 0.5;

/// Scratch cell each character is drawn into before rotation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CharCell {
    /// Side of the square cell in pixels; the cell's center is the pivot.
    pub size: f64,
    /// Top-left of the glyph's line box inside the cell.
    pub origin: (f64, f64),
}

impl Default for CharCell {
    fn default() -> Self {
        Self {
            size: 100.0,
            origin: (20.0, 35.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharPlacement {
    pub ch: char,
    /// Position on the circle in degrees.
    pub angle_deg: f64,
    /// Where the cell center lands.
    pub x: f64,
    pub y: f64,
    /// Clockwise rotation applied to the cell, `angle_deg - 90`.
    pub rotation_deg: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurvedTextLayout {
    pub angle_range: f64,
    pub angle_per_char: f64,
    /// Lead-in before the first character that centers the run on the arc.
    pub angle_offset: f64,
    pub placements: Vec<CharPlacement>,
}

/// Compute where each character of `text` goes on the arc `[start_angle, end_angle]`.
///
/// A run of more than one character divides the arc into `len + 0.5` slots and is centered in
/// it; a single character gets the whole range and lands on the arc midpoint.
pub fn layout_curved_text(
    center: (f64, f64),
    radius: f64,
    text: &str,
    start_angle: f64,
    end_angle: f64,
) -> CurvedTextLayout {
    let angle_range = end_angle - start_angle;
    let len = text.chars().count();
    let angle_per_char = if len > 1 {
        angle_range / (len as f64 + SPACING_FACTOR)
    } else {
        angle_range
    };
    let total_text_angle = angle_per_char * len as f64;
    let angle_offset = (angle_range - total_text_angle) / 2.0;

    let placements = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            // Single characters sit on the middle of their slot.
            let angle_deg = if len == 1 {
                start_angle + angle_range / 2.0
            } else {
                start_angle + angle_offset + i as f64 * angle_per_char
            };
            let (x, y) = polar(center, radius, angle_deg);
            CharPlacement {
                ch,
                angle_deg,
                x,
                y,
                rotation_deg: angle_deg - 90.0,
            }
        })
        .collect();

    CurvedTextLayout {
        angle_range,
        angle_per_char,
        angle_offset,
        placements,
    }
}

/// Cell-to-canvas transform for one character: the cell is turned about its center and the
/// center moved to the placement point.
pub fn char_transform(p: &CharPlacement, cell: &CharCell) -> Affine {
    let half = cell.size / 2.0;
    Affine::translate((p.x, p.y))
        * Affine::rotate(p.rotation_deg.to_radians())
        * Affine::translate((-half, -half))
        * Affine::translate(cell.origin)
}

/// Render `text` along the arc and composite it over `target`.
#[allow(clippy::too_many_arguments)]
pub fn draw_curved_text(
    target: &mut Surface,
    engine: &mut TextLayoutEngine,
    font: &LoadedFont,
    center: (f64, f64),
    radius: f64,
    text: &str,
    fill: Rgba8,
    start_angle: f64,
    end_angle: f64,
    cell: &CharCell,
) -> StampResult<()> {
    let layout = layout_curved_text(center, radius, text, start_angle, end_angle);
    if layout.placements.is_empty() {
        return Ok(());
    }
    tracing::debug!(
        chars = layout.placements.len(),
        angle_per_char = layout.angle_per_char,
        angle_offset = layout.angle_offset,
        "curved text layout"
    );

    let (w, h) = (target.width(), target.height());
    let w16: u16 = w
        .try_into()
        .map_err(|_| StampError::validation("text layer width exceeds u16"))?;
    let h16: u16 = h
        .try_into()
        .map_err(|_| StampError::validation("text layer height exceeds u16"))?;

    let brush = TextBrushRgba8::from(fill);
    let mut ctx = vello_cpu::RenderContext::new(w16, h16);
    let mut buf = [0u8; 4];
    for p in &layout.placements {
        let glyph_layout = engine.layout_line(p.ch.encode_utf8(&mut buf), font, brush);
        ctx.set_transform(affine_to_cpu(char_transform(p, cell)));
        for line in glyph_layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let b = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(font.data())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
    ctx.render_to_pixmap(&mut pixmap);
    let text_layer = Surface::from_premul_bytes(w, h, pixmap.data_as_u8_slice().to_vec())?;
    target.over_in_place(&text_layer)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/text/curved.rs"]
mod tests;
