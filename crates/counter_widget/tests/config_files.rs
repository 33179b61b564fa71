//! Tests for loading widget configuration from disk.

use std::fs;

use counter_widget::{CounterWidget, Error, Model, TestHook, WidgetConfig};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

mod loading {
    use super::*;

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "widget.toml",
            "initial_counter = 4\nincrement_label = \"More\"\n",
        );

        let config = WidgetConfig::load(&path).unwrap();
        assert_eq!(config.initial_counter, 4);
        assert_eq!(config.increment_label, "More");
        assert_eq!(config.decrement_label, "Decrement counter");
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "widget.json",
            r#"{"initial_error": true, "log_level": "trace"}"#,
        );

        let config = WidgetConfig::load(&path).unwrap();
        assert!(config.initial_error);
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = WidgetConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "widget.yaml", "initial_counter: 1");
        let err = WidgetConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedConfigFormat { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "widget.toml", "initial_counter = ");
        let err = WidgetConfig::load(&path).unwrap_err();
        match err {
            Error::ConfigParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}

mod mounting {
    use super::*;

    #[test]
    fn test_widget_from_config() {
        let config = WidgetConfig {
            initial_counter: 9,
            decrement_label: "Less".into(),
            ..WidgetConfig::default()
        };
        let widget = CounterWidget::from_config(&config).unwrap();
        assert_eq!(widget.counter(), 9);

        let view = widget.view();
        let button = view.find_by_test_attr(TestHook::DecrementButton)[0];
        assert_eq!(button.text_content(), "Less");
    }

    #[test]
    fn test_widget_from_invalid_config() {
        let config = WidgetConfig {
            initial_counter: 1,
            initial_error: true,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            CounterWidget::from_config(&config),
            Err(Error::InvalidState { counter: 1 })
        ));
    }
}
