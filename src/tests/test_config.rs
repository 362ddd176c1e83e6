use std::io::Write;

use crate::config::PlotConfig;
use crate::error::PlotError;

#[test]
fn test_defaults() {
    let config = PlotConfig::default();
    assert_eq!(config.skip, 0);
    assert_eq!(config.validation_prefix, "val_");
    assert_eq!(config.x_label, "Epochs");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = PlotConfig::from_json_str(r#"{ "skip": 3, "width": 1024 }"#).unwrap();
    assert_eq!(config.skip, 3);
    assert_eq!(config.width, 1024);
    assert_eq!(config.height, 600);
    assert_eq!(config.validation_prefix, "val_");
}

#[test]
fn test_empty_prefix_rejected() {
    let err = PlotConfig::from_json_str(r#"{ "validation_prefix": "" }"#).unwrap_err();
    assert!(matches!(err, PlotError::InvalidParameter { .. }));
}

#[test]
fn test_zero_size_rejected() {
    let config = PlotConfig::default().with_size(0, 600);
    assert!(config.validate().is_err());
}

#[test]
fn test_malformed_json() {
    let err = PlotConfig::from_json_str("{ skip: }").unwrap_err();
    assert!(matches!(err, PlotError::SerializationError(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "skip": 2, "x_label": "Epoch" }}"#).unwrap();

    let config = PlotConfig::from_file(file.path()).unwrap();
    assert_eq!(config.skip, 2);
    assert_eq!(config.x_label, "Epoch");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlotConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PlotError::IoError(_)));
}

#[test]
fn test_text_grid_minimums() {
    let mut config = PlotConfig::default();
    config.text_width = 9;
    assert!(matches!(config.validate(), Err(PlotError::InvalidParameter { .. })));

    config.text_width = 10;
    config.text_height = 4;
    assert!(matches!(config.validate(), Err(PlotError::InvalidParameter { .. })));

    config.text_height = 5;
    assert!(config.validate().is_ok());
}

#[test]
fn test_small_text_grid_fails_before_plotting() {
    use crate::plot::HistoryPlotter;
    use crate::render::TerminalPresenter;

    let config = PlotConfig::from_json_str(r#"{ "text_width": 8 }"#);
    assert!(matches!(config, Err(PlotError::InvalidParameter { .. })));

    let mut config = PlotConfig::default();
    config.text_height = 3;
    let presenter = TerminalPresenter::with_config(Vec::new(), &config);
    let mut plotter = HistoryPlotter::new(config, presenter);

    let record = history! { "loss" => [0.9, 0.7] };
    assert!(plotter.plot(&record).is_err());
    assert!(plotter.into_presenter().into_inner().is_empty());
}
