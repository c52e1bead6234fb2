use serde_json::json;

use super::*;

#[test]
fn every_named_color_resolves_to_its_tuple() {
    let expected: [(&str, (u8, u8, u8, u8)); 12] = [
        ("purple", (75, 0, 130, 255)),
        ("blue", (0, 102, 204, 255)),
        ("light_blue", (0, 191, 255, 255)),
        ("green", (0, 128, 0, 255)),
        ("light_green", (0, 200, 100, 255)),
        ("red", (200, 0, 0, 255)),
        ("orange", (255, 140, 0, 255)),
        ("yellow", (255, 215, 0, 255)),
        ("pink", (255, 105, 180, 255)),
        ("gray", (100, 100, 100, 255)),
        ("black", (0, 0, 0, 255)),
        ("white", (255, 255, 255, 255)),
    ];
    assert_eq!(NAMED_COLORS.len(), expected.len());
    for (name, tuple) in expected {
        assert_eq!(
            resolve_color(&ColorSpec::named(name)).unwrap(),
            Rgba8::from(tuple),
            "{name}"
        );
    }
}

#[test]
fn names_are_case_insensitive() {
    assert_eq!(
        resolve_color(&ColorSpec::named("Light_Blue")).unwrap(),
        Rgba8::new(0, 191, 255, 255)
    );
    assert_eq!(
        resolve_color(&ColorSpec::named("WHITE")).unwrap(),
        Rgba8::new(255, 255, 255, 255)
    );
}

#[test]
fn unknown_names_fail_with_name_and_choices() {
    for bad in ["turquoise", "", "lightblue", "purple "] {
        let spec = ColorSpec::named(bad);
        if bad.trim() == "purple" {
            assert!(resolve_color(&spec).is_ok());
            continue;
        }
        let err = resolve_color(&spec).unwrap_err();
        let StampError::InvalidColorName { name, valid } = &err else {
            panic!("expected InvalidColorName, got {err:?}");
        };
        assert_eq!(name, bad);
        assert_eq!(valid.len(), NAMED_COLORS.len());
        assert!(valid.iter().any(|v| v == "light_green"));
    }
}

#[test]
fn tuples_pass_through() {
    let c = Rgba8::new(1, 2, 3, 4);
    assert_eq!(resolve_color(&ColorSpec::from(c)).unwrap(), c);
    assert_eq!(resolve_color(&ColorSpec::from([9, 8, 7, 6])).unwrap(), Rgba8::new(9, 8, 7, 6));
}

#[test]
fn parses_cli_forms() {
    assert_eq!(
        "#ff000080".parse::<ColorSpec>().unwrap(),
        ColorSpec::Rgba(Rgba8::new(255, 0, 0, 128))
    );
    assert_eq!(
        "10, 20, 30".parse::<ColorSpec>().unwrap(),
        ColorSpec::Rgba(Rgba8::new(10, 20, 30, 255))
    );
    assert_eq!(
        "pink".parse::<ColorSpec>().unwrap(),
        ColorSpec::named("pink")
    );
    assert!("#12345".parse::<ColorSpec>().is_err());
    assert!("1,2,300".parse::<ColorSpec>().is_err());
    assert!("1,2".parse::<ColorSpec>().is_err());
}

#[test]
fn deserializes_name_array_object_and_hex() {
    let c: ColorSpec = serde_json::from_value(json!("orange")).unwrap();
    assert_eq!(c, ColorSpec::named("orange"));

    let c: ColorSpec = serde_json::from_value(json!([0, 102, 204])).unwrap();
    assert_eq!(c, ColorSpec::Rgba(Rgba8::new(0, 102, 204, 255)));

    let c: ColorSpec = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3, "a": 4})).unwrap();
    assert_eq!(c, ColorSpec::Rgba(Rgba8::new(1, 2, 3, 4)));

    let c: ColorSpec = serde_json::from_value(json!("#0066cc")).unwrap();
    assert_eq!(c, ColorSpec::Rgba(Rgba8::new(0, 102, 204, 255)));

    assert!(serde_json::from_value::<ColorSpec>(json!([1, 2])).is_err());
}

#[test]
fn from_str_slice_accepts_hex_and_tuples() {
    assert_eq!(
        ColorSpec::from("#ffffff"),
        ColorSpec::Rgba(Rgba8::new(255, 255, 255, 255))
    );
    assert_eq!(
        ColorSpec::from("1,2,3"),
        ColorSpec::Rgba(Rgba8::new(1, 2, 3, 255))
    );
    assert_eq!(ColorSpec::from("green"), ColorSpec::named("green"));

    // Malformed forms stay names and fail on resolution with the choices listed.
    let bad = ColorSpec::from("#12");
    assert_eq!(bad, ColorSpec::named("#12"));
    assert!(matches!(
        bad.resolve(),
        Err(StampError::InvalidColorName { .. })
    ));
}
