use mandala_maker::{MandalaApp, MandalaError, Point, Segment};

#[test]
fn test_export_round_trips_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.png");

    let mut app = MandalaApp::default();
    app.apply_segment(Segment::new(Point::new(300.0, 250.0), Point::new(310.0, 250.0)));
    app.export(&path).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (500, 500));
    assert_eq!(saved.as_raw(), app.canvas().image().as_raw());
    // Untouched pixels stay transparent in the file
    assert_eq!(saved.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert!(app.error_message().is_none());
}

#[test]
fn test_export_writes_png_whatever_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.jpg");

    let mut app = MandalaApp::default();
    app.export(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_export_failure_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("drawing.png");

    let mut app = MandalaApp::default();
    let result = app.export(&path);
    match result {
        Err(MandalaError::ExportFailure { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected export failure, got {other:?}"),
    }
    assert!(app.error_message().is_some());

    // The app keeps working after the error is dismissed
    app.dismiss_error();
    app.apply_segment(Segment::dot(Point::new(250.0, 250.0)));
    assert_eq!(app.canvas().pixel(250, 250).map(|p| p[3]), Some(255));
}

#[test]
fn test_save_dialog_exports_to_typed_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("from_dialog.png");

    let mut app = MandalaApp::default();
    app.open_save_dialog();
    if let Some(dialog) = app.save_dialog_mut() {
        dialog.path = path.display().to_string();
    }
    app.confirm_save_dialog();

    assert!(app.save_dialog().is_none());
    assert!(path.exists());

    // Reopening suggests the last successful path
    app.open_save_dialog();
    assert_eq!(app.save_dialog().map(|d| d.path.clone()), Some(path.display().to_string()));
}
