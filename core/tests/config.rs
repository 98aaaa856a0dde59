use mdug_core::config::{LogConfig, ViewerConfig, WindowConfig};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ViewerConfig::load(&ViewerConfig::path(dir.path())).unwrap();

    assert_eq!(config, ViewerConfig::default());
    assert_eq!(config.window.width, 900);
    assert_eq!(config.window.height, 700);
    assert!(config.validate().is_empty());
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = ViewerConfig::path(dir.path());
    std::fs::write(&path, "[window]\nwidth = 1200\n").unwrap();

    let config = ViewerConfig::load(&path).unwrap();
    assert_eq!(config.window.width, 1200);
    assert_eq!(config.window.height, 700);
    assert_eq!(config.log, LogConfig::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = ViewerConfig::path(dir.path());
    std::fs::write(&path, "[window\nwidth = ").unwrap();

    assert!(ViewerConfig::load(&path).is_err());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = ViewerConfig::path(dir.path());
    let config = ViewerConfig {
        window: WindowConfig {
            width: 1024,
            height: 768,
        },
        log: LogConfig {
            filter: "mdug_core=debug".to_string(),
        },
    };

    config.save(&path).unwrap();
    assert_eq!(ViewerConfig::load(&path).unwrap(), config);
}

#[test]
fn invalid_values_are_reported_and_replaced() {
    let config = ViewerConfig {
        window: WindowConfig {
            width: 10,
            height: 20,
        },
        log: LogConfig {
            filter: "  ".to_string(),
        },
    };

    assert_eq!(config.validate().len(), 3);

    let fixed = config.with_defaults_for_invalid();
    assert_eq!(fixed, ViewerConfig::default());
    assert!(fixed.validate().is_empty());
}

#[test]
fn valid_values_are_kept() {
    let config = ViewerConfig {
        window: WindowConfig {
            width: 400,
            height: 300,
        },
        log: LogConfig::default(),
    };

    assert!(config.validate().is_empty());
    assert_eq!(config.with_defaults_for_invalid(), config);
}
