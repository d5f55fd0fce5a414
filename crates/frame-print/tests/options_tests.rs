use frame_print::{FitMode, FramePrintError, FramePrintOptions, Orientation, PageMargins, PaperSize};

#[test]
fn default_options() {
    let options = FramePrintOptions::default();
    assert_eq!(options.frame_width_in, 8.0);
    assert_eq!(options.frame_height_in, 10.0);
    assert_eq!(options.dpi, 300);
    assert_eq!(options.fit_mode, FitMode::Stretch);
    assert!(!options.rotate);
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.margins, PageMargins::uniform(5.0));
    options.validate().unwrap();
}

#[test]
fn from_request_applies_defaults_for_bad_input() {
    let options = FramePrintOptions::from_request(None, None, None, false, false, false);
    assert_eq!(options.frame_width_in, 8.0);
    assert_eq!(options.frame_height_in, 10.0);
    assert_eq!(options.dpi, 300);

    let options =
        FramePrintOptions::from_request(Some(-3.0), Some(0.0), Some(0), false, false, false);
    assert_eq!(options.frame_width_in, 8.0);
    assert_eq!(options.frame_height_in, 10.0);
    assert_eq!(options.dpi, 300);

    let options =
        FramePrintOptions::from_request(Some(f32::NAN), Some(5.0), Some(150), false, false, false);
    assert_eq!(options.frame_width_in, 8.0);
    assert_eq!(options.frame_height_in, 5.0);
    assert_eq!(options.dpi, 150);
}

#[test]
fn from_request_folds_flags_into_fit_mode() {
    let crop = FramePrintOptions::from_request(None, None, None, false, true, true);
    assert_eq!(crop.fit_mode, FitMode::Crop);

    let fit = FramePrintOptions::from_request(None, None, None, false, false, true);
    assert_eq!(fit.fit_mode, FitMode::Fit);

    let stretch = FramePrintOptions::from_request(None, None, None, true, false, false);
    assert_eq!(stretch.fit_mode, FitMode::Stretch);
    assert!(stretch.rotate);
}

#[test]
fn target_pixels_truncate() {
    let options = FramePrintOptions::default();
    assert_eq!(options.target_pixels(), (2400, 3000));
    assert!((options.frame_width_mm() - 203.2).abs() < 1e-3);
    assert!((options.frame_height_mm() - 254.0).abs() < 1e-3);
}

#[test]
fn validate_rejects_bad_values() {
    let mut options = FramePrintOptions::default();
    options.frame_width_in = 0.0;
    assert!(matches!(
        options.validate(),
        Err(FramePrintError::Config(_))
    ));

    let mut options = FramePrintOptions::default();
    options.dpi = 0;
    assert!(matches!(
        options.validate(),
        Err(FramePrintError::Config(_))
    ));

    let mut options = FramePrintOptions::default();
    options.margins = PageMargins::uniform(-1.0);
    assert!(matches!(
        options.validate(),
        Err(FramePrintError::Config(_))
    ));

    // frame so small it collapses to zero pixels at the configured dpi
    let mut options = FramePrintOptions::default();
    options.frame_width_in = 0.001;
    options.dpi = 100;
    assert!(matches!(
        options.validate(),
        Err(FramePrintError::Config(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn options_json_round_trip() {
    let options = FramePrintOptions {
        frame_width_in: 6.0,
        frame_height_in: 4.0,
        dpi: 240,
        fit_mode: FitMode::Crop,
        rotate: true,
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
        margins: PageMargins::uniform(7.5),
    };

    let json = serde_json::to_string(&options).unwrap();
    let parsed: FramePrintOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, options);
}

#[cfg(feature = "serde")]
#[test]
fn custom_paper_size_round_trip() {
    let options = FramePrintOptions {
        paper_size: PaperSize::Custom {
            width_mm: 200.0,
            height_mm: 300.0,
        },
        ..Default::default()
    };

    let json = serde_json::to_string(&options).unwrap();
    let parsed: FramePrintOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.paper_size, options.paper_size);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn options_file_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("options.json");

    let options = FramePrintOptions {
        fit_mode: FitMode::Fit,
        dpi: 150,
        ..Default::default()
    };
    options.save(&path).await.unwrap();

    let loaded = FramePrintOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}
