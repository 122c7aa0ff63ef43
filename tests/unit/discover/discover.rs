use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "overlay_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn entry_from_path_derives_names() {
    let e = ImageEntry::from_path("/shots/Beach Day.final.JPG");
    assert_eq!(e.name, "Beach Day.final.JPG");
    assert_eq!(e.stem, "Beach Day.final");
    assert!(e.selected);
    assert!(e.text.is_empty());
    assert_eq!(e.individual_text(), "Beach Day.final");
    assert_eq!(e.render_text(""), "Beach Day.final");
    assert_eq!(e.render_text("custom"), "custom");
}

#[test]
fn set_text_normalizes() {
    let mut e = ImageEntry::from_path("a.png");
    e.set_text("\u{1112}\u{1161}\u{11AB}\u{200B}");
    assert_eq!(e.text, "한");
    assert_eq!(e.individual_text(), "한");
}

#[test]
fn discover_filters_and_sorts() {
    let dir = temp_dir("discover_filters");
    std::fs::create_dir_all(dir.join("nested.png")).unwrap();
    for name in ["b.PNG", "a.jpg", "c.webp", "notes.txt", "noext"] {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    let found = discover_images(&dir).unwrap();
    let names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a.jpg", "b.PNG", "c.webp"]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn discover_missing_folder_is_io_error() {
    let err = discover_images(Path::new("/definitely/not/a/folder")).unwrap_err();
    assert!(matches!(err, OverlayError::Io(_)));
}

#[test]
fn probe_reads_png_header() {
    let dir = temp_dir("probe_png");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("frame.png");
    image::RgbaImage::new(64, 48).save(&path).unwrap();

    assert_eq!(
        probe_dimensions(&path).unwrap(),
        ImageDimensions {
            width: 64,
            height: 48
        }
    );

    let bogus = dir.join("bogus.jpg");
    std::fs::write(&bogus, b"not a jpeg").unwrap();
    assert!(matches!(
        probe_dimensions(&bogus),
        Err(OverlayError::Dimensions(_))
    ));

    std::fs::remove_dir_all(&dir).ok();
}
