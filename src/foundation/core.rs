use crate::foundation::error::{StampError, StampResult};

pub use kurbo::{Affine, Point};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Premultiply color channels by alpha.
    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            crate::foundation::math::mul_div255_u8(u16::from(self.r), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.g), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(u8, u8, u8, u8)> for Rgba8 {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Canvas size and arc placement of a stamp.
///
/// All radii and the center are derived from `img_size` and `padding` with integer halving, so
/// a 512px canvas has its center at `(256, 256)`, an outer radius of 256 and, with the default
/// padding, an inner radius of 206.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StampGeometry {
    /// Side of the square output canvas in pixels.
    pub img_size: u32,
    /// Band thickness: `outer_radius - inner_radius`.
    pub padding: u32,
    /// Arc start in degrees (0 = +x, clockwise on screen).
    pub start_angle: f64,
    /// Arc end in degrees; must be greater than `start_angle`.
    pub end_angle: f64,
}

impl Default for StampGeometry {
    fn default() -> Self {
        Self {
            img_size: 512,
            padding: 50,
            start_angle: 90.0,
            end_angle: 190.0,
        }
    }
}

impl StampGeometry {
    /// Check that the geometry describes a drawable band.
    pub fn validate(&self) -> StampResult<()> {
        if self.img_size == 0 || self.img_size > u32::from(u16::MAX) {
            return Err(StampError::validation(format!(
                "img_size must be in 1..={}, got {}",
                u16::MAX,
                self.img_size
            )));
        }
        if self.padding == 0 || self.padding >= self.outer_radius() {
            return Err(StampError::validation(format!(
                "padding must be in 1..{} for img_size {}, got {}",
                self.outer_radius(),
                self.img_size,
                self.padding
            )));
        }
        if !self.start_angle.is_finite() || !self.end_angle.is_finite() {
            return Err(StampError::validation("arc angles must be finite"));
        }
        let span = self.span();
        if span <= 0.0 || span > 360.0 {
            return Err(StampError::validation(format!(
                "arc span must be in (0, 360] degrees, got {span}"
            )));
        }
        Ok(())
    }

    /// Canvas center.
    pub fn center(&self) -> (f64, f64) {
        let c = f64::from(self.img_size / 2);
        (c, c)
    }

    /// Outer band radius.
    pub fn outer_radius(&self) -> u32 {
        self.img_size / 2
    }

    /// Inner band radius.
    pub fn inner_radius(&self) -> u32 {
        self.outer_radius().saturating_sub(self.padding)
    }

    /// Radius of the text baseline circle, halfway through the band.
    pub fn text_radius(&self) -> u32 {
        (self.inner_radius() + self.outer_radius()) / 2
    }

    /// `end_angle - start_angle`.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle halfway along the arc.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.span() / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
