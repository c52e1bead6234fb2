use crate::foundation::math::angle_past;
use crate::raster::shapes::RingWedge;
use crate::raster::surface::Mask;

/// Opacity kept at both ends of the arc.
pub const MIN_FADE_OPACITY: f64 = 0.3;
/// Opacity added at the midpoint on top of [`MIN_FADE_OPACITY`].
pub const FADE_RANGE: f64 = 0.7;

/// Symmetric fade along the arc: 0 at both ends, 1 at the midpoint.
pub fn fade_factor(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    2.0 * t.min(1.0 - t)
}

/// Mask ceiling at normalized arc position `t`.
pub fn fade_alpha(t: f64) -> u8 {
    let f = fade_factor(t);
    (255.0 * (MIN_FADE_OPACITY + FADE_RANGE * f)) as u8
}

/// Fade the wedge's ends in place.
///
/// Pixels strictly inside the band and on the span are capped at [`fade_alpha`] of their arc
/// position; the cap only ever lowers a value. Everything else is untouched. Rows are shaded in
/// parallel.
pub fn apply_gradient(mask: &mut Mask, wedge: &RingWedge) {
    let span = wedge.span();
    if span <= 0.0 {
        return;
    }
    mask.update_rows(|x, y, v| {
        if v == 0 {
            return 0;
        }
        let (dist, angle) = wedge.polar_of(x, y);
        if dist <= wedge.inner_radius || dist >= wedge.outer_radius {
            return v;
        }
        let past = angle_past(angle, wedge.start_angle);
        if past > span {
            return v;
        }
        v.min(fade_alpha(past / span))
    });
}

/// Owned variant of [`apply_gradient`].
pub fn shaded(mut mask: Mask, wedge: &RingWedge) -> Mask {
    apply_gradient(&mut mask, wedge);
    mask
}

#[cfg(test)]
#[path = "../../tests/unit/raster/gradient.rs"]
mod tests;
