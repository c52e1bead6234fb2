use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn stamp_text_is_reversed_then_uppercased() {
    assert_eq!(prepare_stamp_text("ab"), "BA");
    assert_eq!(prepare_stamp_text("Open to work"), "KROW OT NEPO");
    assert_eq!(prepare_stamp_text(""), "");
    assert_eq!(prepare_stamp_text("straße"), "ESSARTS");
}

#[test]
fn defaults_match_documented_values() {
    let cfg = StampConfig::new("me.jpg", "hi");
    assert_eq!(cfg.output_path, PathBuf::from("img/stamp.png"));
    assert_eq!(cfg.stamp_color, ColorSpec::named("purple"));
    assert_eq!(cfg.text_color, ColorSpec::named("white"));
    assert!(!cfg.gradient);
    assert_eq!(cfg.font_path, PathBuf::from(DEFAULT_FONT_PATH));
    assert!(cfg.font_path.is_absolute());
    assert!(cfg.font_path.ends_with("fonts/DejaVuSans-Bold.ttf"));
    assert!(cfg.font_path.is_file());
    assert_eq!(cfg.font_size, 28.0);
    assert_eq!(cfg.geometry, StampGeometry::default());
}

#[test]
fn config_parses_partial_json() {
    let cfg = StampConfig::from_json_str(
        r#"{
            "profile_path": "me.jpg",
            "stamp_text": "hiring",
            "stamp_color": "green",
            "text_color": [255, 255, 0, 255],
            "gradient": true,
            "geometry": { "padding": 40 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.profile_path, PathBuf::from("me.jpg"));
    assert_eq!(cfg.stamp_color, ColorSpec::named("green"));
    assert_eq!(cfg.text_color, ColorSpec::Rgba(Rgba8::new(255, 255, 0, 255)));
    assert!(cfg.gradient);
    assert_eq!(cfg.geometry.padding, 40);
    assert_eq!(cfg.geometry.img_size, 512);
    assert_eq!(cfg.font_size, 28.0);
}

#[test]
fn config_rejects_unknown_fields() {
    let err = StampConfig::from_json_str(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(matches!(err, StampError::Serde(_)), "{err:?}");
}

#[test]
fn invalid_color_fails_before_loading_anything() {
    let cfg = StampConfig::new("target/does/not/exist.jpg", "x")
        .with_stamp_color("turquoise")
        .with_font("fonts/missing.ttf", 28.0);
    let err = render_stamp(&cfg).unwrap_err();
    assert!(matches!(err, StampError::InvalidColorName { .. }), "{err:?}");

    let cfg = StampConfig::new("target/does/not/exist.jpg", "x").with_text_color("nope");
    let err = render_stamp(&cfg).unwrap_err();
    assert!(matches!(err, StampError::InvalidColorName { .. }), "{err:?}");
}

#[test]
fn write_output_rejects_unknown_extension() {
    let s = Surface::new(4, 4);
    let p = Path::new("target/unit_pipeline/out.unknownext");
    let err = write_output(&s, p).unwrap_err();
    assert!(matches!(err, StampError::OutputWrite { .. }), "{err:?}");
    assert!(!p.exists());
}

#[test]
fn builder_colors_accept_hex_and_tuples() {
    let cfg = StampConfig::new("me.jpg", "hi")
        .with_stamp_color("0,102,204")
        .with_text_color("#ffffff");
    assert_eq!(
        cfg.stamp_color.resolve().unwrap(),
        Rgba8::new(0, 102, 204, 255)
    );
    assert_eq!(
        cfg.text_color.resolve().unwrap(),
        Rgba8::new(255, 255, 255, 255)
    );
}
