use crate::foundation::core::StampGeometry;
use crate::foundation::math::{angle_deg, angle_in_span};
use crate::raster::surface::Mask;

/// Annular sector: the band between two concentric circles, limited to an angular span.
///
/// Pixels are sampled at their integer coordinates relative to `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingWedge {
    pub center: (f64, f64),
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Degrees, image convention (clockwise on screen).
    pub start_angle: f64,
    pub end_angle: f64,
}

impl RingWedge {
    pub fn from_geometry(g: &StampGeometry) -> Self {
        Self {
            center: g.center(),
            outer_radius: f64::from(g.outer_radius()),
            inner_radius: f64::from(g.inner_radius()),
            start_angle: g.start_angle,
            end_angle: g.end_angle,
        }
    }

    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Distance from center and normalized angle of pixel `(x, y)`.
    pub fn polar_of(&self, x: u32, y: u32) -> (f64, f64) {
        let dx = f64::from(x) - self.center.0;
        let dy = f64::from(y) - self.center.1;
        (dx.hypot(dy), angle_deg(dx, dy))
    }

    /// Membership test. The outer circle is inclusive, the inner one is cut away including
    /// its boundary.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let (dist, angle) = self.polar_of(x, y);
        dist <= self.outer_radius
            && dist > self.inner_radius
            && angle_in_span(angle, self.start_angle, self.span())
    }
}

/// Mask of the circle inscribed in a `size`×`size` canvas: 255 inside (boundary included),
/// 0 outside.
pub fn circle_mask(size: u32) -> Mask {
    let c = f64::from(size) / 2.0;
    let r = c;
    Mask::from_fn(size, size, |x, y| {
        let dx = f64::from(x) - c;
        let dy = f64::from(y) - c;
        if dx.hypot(dy) <= r { 255 } else { 0 }
    })
}

/// Binary silhouette of the stamp band: 255 on the wedge, 0 elsewhere.
pub fn ring_wedge_mask(size: u32, wedge: &RingWedge) -> Mask {
    Mask::from_fn(size, size, |x, y| if wedge.contains(x, y) { 255 } else { 0 })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
