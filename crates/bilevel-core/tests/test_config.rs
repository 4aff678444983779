use bilevel_core::binarize::Threshold;
use bilevel_core::config::SessionConfig;
use bilevel_core::error::BilevelError;
use bilevel_core::view::ViewParams;

#[test]
fn test_default_config() {
    let config = SessionConfig::default();
    assert_eq!(config.threshold.value(), 127);
    assert_eq!(config.display, ViewParams { margin: 20, max_upscale: 1.0 });
    assert_eq!(config.selection, ViewParams { margin: 40, max_upscale: 2.0 });
    assert_eq!(config.min_crop_size, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config: SessionConfig = toml::from_str("").unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_partial_toml() {
    let config: SessionConfig = toml::from_str(
        r#"
threshold = 90

[selection]
margin = 10
max_upscale = 4.0
"#,
    )
    .unwrap();
    assert_eq!(config.threshold, Threshold::from(90));
    assert_eq!(config.selection.max_upscale, 4.0);
    assert_eq!(config.display, ViewParams::display());
}

#[test]
fn test_toml_round_trip() {
    let config = SessionConfig {
        threshold: Threshold::from(33),
        min_crop_size: 4,
        ..SessionConfig::default()
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let back: SessionConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_threshold_out_of_range_in_toml() {
    let result: Result<SessionConfig, _> = toml::from_str("threshold = 300");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero_crop = SessionConfig {
        min_crop_size: 0,
        ..SessionConfig::default()
    };
    assert!(matches!(zero_crop.validate(), Err(BilevelError::InvalidConfig(_))));

    let mut bad_upscale = SessionConfig::default();
    bad_upscale.display.max_upscale = 0.0;
    assert!(matches!(bad_upscale.validate(), Err(BilevelError::InvalidConfig(_))));

    let mut nan_upscale = SessionConfig::default();
    nan_upscale.selection.max_upscale = f64::NAN;
    assert!(nan_upscale.validate().is_err());
}
