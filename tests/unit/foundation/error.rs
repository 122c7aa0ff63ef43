use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OverlayError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        OverlayError::dimensions("x")
            .to_string()
            .contains("dimensions error:")
    );
    assert!(OverlayError::render("x").to_string().contains("render error:"));
    assert!(OverlayError::io("x").to_string().contains("io error:"));
    assert!(
        OverlayError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OverlayError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
