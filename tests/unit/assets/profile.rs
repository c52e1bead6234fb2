use std::path::PathBuf;

use super::*;

fn fixture_dir() -> PathBuf {
    let dir = PathBuf::from("target").join("unit_profile");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_solid(name: &str, w: u32, h: u32, px: [u8; 4], fmt: image::ImageFormat) -> PathBuf {
    let p = fixture_dir().join(name);
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let img = if fmt == image::ImageFormat::Jpeg {
        image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(img).to_rgb8())
    } else {
        image::DynamicImage::ImageRgba8(img)
    };
    img.save_with_format(&p, fmt).unwrap();
    p
}

#[test]
fn profile_is_square_disc_with_clear_corners() {
    let p = write_solid("wide.png", 40, 20, [10, 200, 30, 255], image::ImageFormat::Png);
    let s = load_profile_image(&p, 64).unwrap();
    assert_eq!((s.width(), s.height()), (64, 64));
    let center = s.pixel(32, 32);
    for (got, want) in center.iter().zip([10u8, 200, 30, 255]) {
        assert!((i16::from(*got) - i16::from(want)).abs() <= 1, "{center:?}");
    }
    for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
        assert_eq!(s.pixel(x, y), [0, 0, 0, 0], "corner ({x},{y})");
    }
}

#[test]
fn profile_accepts_jpeg() {
    let p = write_solid("square.jpg", 32, 32, [200, 200, 200, 255], image::ImageFormat::Jpeg);
    let s = load_profile_image(&p, 48).unwrap();
    assert_eq!(s.pixel(24, 24)[3], 255);
    assert_eq!(s.pixel(0, 0)[3], 0);
}

#[test]
fn missing_file_is_image_load_error() {
    let err = load_profile_image(Path::new("target/does/not/exist.png"), 64).unwrap_err();
    assert!(matches!(err, StampError::ImageLoad { .. }), "{err:?}");
}

#[test]
fn undecodable_file_is_image_load_error() {
    let p = fixture_dir().join("garbage.png");
    std::fs::write(&p, b"definitely not an image").unwrap();
    let err = load_profile_image(&p, 64).unwrap_err();
    assert!(matches!(err, StampError::ImageLoad { .. }), "{err:?}");
}
