use super::*;

#[test]
fn default_settings_give_4px_strips() {
    let s = Settings::default();
    assert_eq!(s.lines_per_unit, 75.0);
    assert_eq!(s.base_resolution, 300.0);
    assert_eq!(s.orientation, Orientation::Vertical);
    assert_eq!(s.strip_width_px().unwrap(), 4);
}

#[test]
fn strip_width_rounds_up() {
    let s = Settings {
        lines_per_unit: 70.0,
        ..Settings::default()
    };
    // 300 / 70 = 4.29
    assert_eq!(s.strip_width_px().unwrap(), 5);

    let s = Settings {
        lines_per_unit: 300.0,
        ..Settings::default()
    };
    assert_eq!(s.strip_width_px().unwrap(), 1);
}

#[test]
fn strip_width_is_never_zero() {
    let s = Settings {
        lines_per_unit: 1000.0,
        base_resolution: 10.0,
        ..Settings::default()
    };
    assert_eq!(s.strip_width_px().unwrap(), 1);
}

#[test]
fn strip_width_rejects_nonpositive_and_nonfinite_inputs() {
    for (lpi, dpi) in [
        (0.0, 300.0),
        (-75.0, 300.0),
        (75.0, 0.0),
        (75.0, -1.0),
        (f64::NAN, 300.0),
        (75.0, f64::INFINITY),
    ] {
        let s = Settings {
            lines_per_unit: lpi,
            base_resolution: dpi,
            ..Settings::default()
        };
        assert!(
            matches!(s.strip_width_px(), Err(LenticularError::InvalidParameter(_))),
            "lpi={lpi} dpi={dpi}"
        );
    }
}

#[test]
fn settings_json_defaults_omitted_fields() {
    let s = Settings::from_json_str(r#"{ "lines_per_unit": 60.0 }"#).unwrap();
    assert_eq!(s.lines_per_unit, 60.0);
    assert_eq!(s.base_resolution, 300.0);
    assert_eq!(s.orientation, Orientation::Vertical);
}

#[test]
fn settings_json_roundtrip() {
    let s = Settings {
        lines_per_unit: 40.0,
        base_resolution: 240.0,
        orientation: Orientation::Horizontal,
    };
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(Settings::from_json_str(&json).unwrap(), s);
}

#[test]
fn settings_json_rejects_garbage() {
    assert!(matches!(
        Settings::from_json_str("not json"),
        Err(LenticularError::InvalidParameter(_))
    ));
}

#[test]
fn source_image_validates_buffer_shape() {
    assert!(matches!(
        SourceImage::from_rgba8(0, 4, vec![]),
        Err(LenticularError::EmptyGeometry(_))
    ));
    assert!(matches!(
        SourceImage::from_rgba8(2, 2, vec![0; 15]),
        Err(LenticularError::InvalidParameter(_))
    ));

    let img = SourceImage::from_rgba8(2, 2, vec![0; 16]).unwrap();
    assert_eq!((img.width, img.height), (2, 2));
}
