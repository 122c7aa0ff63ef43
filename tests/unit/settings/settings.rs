use super::*;

#[test]
fn defaults_match_initial_controls() {
    let s = OverlaySettings::default();
    assert_eq!(s.font_size, 20);
    assert_eq!(s.anchor_right_percent, 10);
    assert_eq!(s.anchor_bottom_percent, 10);
    assert_eq!(s.text, TextSource::Auto);
    s.validate().unwrap();

    let opts = PreviewOpts::default();
    assert_eq!(opts.cache_capacity, 20);
    assert_eq!(opts.debounce(), Duration::from_millis(150));
}

#[test]
fn partial_json_fills_defaults() {
    let s: OverlaySettings =
        serde_json::from_str(r#"{ "font_size": 32, "text": { "custom": "© studio" } }"#).unwrap();
    assert_eq!(s.font_size, 32);
    assert_eq!(s.anchor_right_percent, 10);
    assert_eq!(s.text, TextSource::Custom("© studio".to_string()));

    let s: OverlaySettings = serde_json::from_str(r#"{ "text": "auto" }"#).unwrap();
    assert_eq!(s.text, TextSource::Auto);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<OverlaySettings>(r#"{ "fontSize": 32 }"#).is_err());
}

#[test]
fn validate_rejects_out_of_range() {
    let s = OverlaySettings {
        font_size: 0,
        ..OverlaySettings::default()
    };
    assert!(matches!(s.validate(), Err(OverlayError::Validation(_))));

    let s = OverlaySettings {
        anchor_bottom_percent: 101,
        ..OverlaySettings::default()
    };
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("anchor_bottom_percent"));
}

#[test]
fn text_for_follows_source() {
    let image = ImageEntry::from_path("/shots/IMG_0042.jpg");
    let auto = OverlaySettings::default();
    assert_eq!(auto.text_for(&image), "IMG_0042");

    let custom = OverlaySettings {
        text: TextSource::Custom("\u{200B}studio".to_string()),
        ..OverlaySettings::default()
    };
    assert_eq!(custom.text_for(&image), "studio");
}

#[test]
fn from_path_reports_missing_file() {
    let err = OverlaySettings::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, OverlayError::Io(_)));
}
