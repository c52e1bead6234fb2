use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
    assert_eq!(mul_div255_u8(100, 128), 50);
}

#[test]
fn angle_deg_uses_y_down_convention() {
    assert!((angle_deg(1.0, 0.0) - 0.0).abs() < 1e-9);
    assert!((angle_deg(0.0, 1.0) - 90.0).abs() < 1e-9);
    assert!((angle_deg(-1.0, 0.0) - 180.0).abs() < 1e-9);
    assert!((angle_deg(0.0, -1.0) - 270.0).abs() < 1e-9);
}

#[test]
fn angle_in_span_handles_wraparound() {
    assert!(angle_in_span(90.0, 90.0, 100.0));
    assert!(angle_in_span(190.0, 90.0, 100.0));
    assert!(!angle_in_span(191.0, 90.0, 100.0));
    assert!(!angle_in_span(89.0, 90.0, 100.0));

    assert!(angle_in_span(350.0, 300.0, 120.0));
    assert!(angle_in_span(10.0, 300.0, 120.0));
    assert!(!angle_in_span(70.0, 300.0, 120.0));
    assert!(angle_in_span(123.0, 0.0, 360.0));
}

#[test]
fn polar_matches_unit_circle() {
    let (x, y) = polar((10.0, 20.0), 5.0, 90.0);
    assert!((x - 10.0).abs() < 1e-9);
    assert!((y - 25.0).abs() < 1e-9);
}
