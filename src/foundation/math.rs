pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Angle of `(dx, dy)` in degrees, normalized to `[0, 360)`.
///
/// Image space has `y` growing downward, so increasing angles sweep clockwise on screen.
pub(crate) fn angle_deg(dx: f64, dy: f64) -> f64 {
    (dy.atan2(dx).to_degrees() + 360.0) % 360.0
}

/// Offset of `angle` past `start`, both in degrees, in `[0, 360)`.
///
/// Lets arc spans that wrap past 360 (e.g. `300..420`) be tested with a single comparison.
pub(crate) fn angle_past(angle: f64, start: f64) -> f64 {
    (angle - start).rem_euclid(360.0)
}

/// Return `true` when `angle` lies on the closed arc `[start, start + span]`.
pub(crate) fn angle_in_span(angle: f64, start: f64, span: f64) -> bool {
    if span >= 360.0 {
        return true;
    }
    angle_past(angle, start) <= span
}

/// Point at `radius` from `center` along `angle_deg`.
pub(crate) fn polar(center: (f64, f64), radius: f64, angle_deg: f64) -> (f64, f64) {
    let th = angle_deg.to_radians();
    (center.0 + radius * th.cos(), center.1 + radius * th.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
