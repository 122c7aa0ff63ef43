use super::*;

use crate::settings::TextSource;

#[test]
fn unreadable_images_use_default_dimensions() {
    let images = [ImageEntry::from_path("/nonexistent/overlay-plan/photo.jpg")];
    let plan = plan_overlays(&images, &OverlaySettings::default());

    assert_eq!(plan.len(), 1);
    assert!(plan[0].dimensions_fallback);
    assert_eq!(plan[0].dimensions, ImageDimensions::DEFAULT);
    assert_eq!(plan[0].text, "photo");
    assert_eq!(plan[0].layout.font_size_px, 20);
}

#[test]
fn empty_custom_text_plans_with_empty_text_but_reports_stem() {
    let settings = OverlaySettings {
        text: TextSource::Custom(String::new()),
        ..OverlaySettings::default()
    };
    let images = [ImageEntry::from_path("/nonexistent/overlay-plan/beach.png")];
    let plan = plan_overlays(&images, &settings);

    assert_eq!(plan[0].text, "beach");
    // Layout measured the empty string, so only the minimum width is reserved.
    assert_eq!(plan[0].layout.x, 350);
    assert_eq!(plan[0].layout.y, 250);
}

#[test]
fn invalid_settings_are_rejected_before_discovery() {
    let settings = OverlaySettings {
        font_size: 0,
        ..OverlaySettings::default()
    };
    assert!(plan_folder(Path::new("/nonexistent/overlay-plan"), &settings).is_err());
}
