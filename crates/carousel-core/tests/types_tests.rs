use carousel_core::*;

#[test]
fn test_canvas_size_presets() {
    assert_eq!(CanvasSize::PORTRAIT, CanvasSize::new(1080, 1350));
    assert_eq!(CanvasSize::SQUARE, CanvasSize::new(1080, 1080));
    assert_eq!(CanvasSize::default(), CanvasSize::PORTRAIT);
}

#[test]
fn test_canvas_size_resolve() {
    assert_eq!(
        CanvasSize::resolve(false, None, None).unwrap(),
        CanvasSize::PORTRAIT
    );
    assert_eq!(
        CanvasSize::resolve(true, None, None).unwrap(),
        CanvasSize::SQUARE
    );
    // Explicit size overrides --square
    assert_eq!(
        CanvasSize::resolve(true, Some(800), Some(600)).unwrap(),
        CanvasSize::new(800, 600)
    );
}

#[test]
fn test_canvas_size_requires_both_dimensions() {
    for (w, h) in [(Some(500), None), (None, Some(500))] {
        match CanvasSize::resolve(false, w, h) {
            Err(CarouselError::Config(msg)) => assert!(msg.contains("must set both")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}

#[test]
fn test_fit_mode_parsing() {
    assert_eq!("contain".parse::<FitMode>().unwrap(), FitMode::Contain);
    assert_eq!("COVER".parse::<FitMode>().unwrap(), FitMode::Cover);
    assert_eq!(FitMode::default(), FitMode::Contain);

    match "stretch".parse::<FitMode>() {
        Err(CarouselError::InvalidFitMode(s)) => assert_eq!(s, "stretch"),
        other => panic!("Expected InvalidFitMode, got {:?}", other),
    }
}

#[test]
fn test_display_forms() {
    assert_eq!(CanvasSize::new(1080, 1350).to_string(), "1080x1350");
    assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    assert_eq!(FitMode::Cover.to_string(), "cover");
}

#[test]
fn test_slide_file_names() {
    assert_eq!(slide_file_name(1), "slide_01.jpg");
    assert_eq!(slide_file_name(9), "slide_09.jpg");
    assert_eq!(slide_file_name(10), "slide_10.jpg");
    assert_eq!(slide_file_name(100), "slide_100.jpg");
}
