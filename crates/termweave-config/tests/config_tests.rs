use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use termweave_config::test_utils::env_lock;
use termweave_config::AppConfig;
use termweave_tui::style::{Color, ColorDepth, Modifier};
use termweave_tui::theme::keys;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/config")
        .join(name)
}

#[test]
fn test_load_valid_basic_config() {
    let config = AppConfig::load_from_file(&fixture("valid_basic.toml")).unwrap();

    assert_eq!(config.render.width, Some(60));
    assert_eq!(config.render.color_depth().unwrap(), Some(ColorDepth::Ansi256));
    assert_eq!(config.theme.preset, "light");
    assert_eq!(config.progress.spacing, 1);
    assert!(!config.progress.align_columns);
    assert_eq!(config.progress.text_fps, 5);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_theme_from_basic_config() {
    let config = AppConfig::load_from_file(&fixture("valid_basic.toml")).unwrap();
    let theme = config.theme.build_theme().unwrap();

    let header = theme.style(keys::TABLE_HEADER).unwrap();
    assert_eq!(header.fg, Some(Color::Rgb(255, 136, 0)));
    assert!(header.add_modifier.contains(Modifier::BOLD));
    assert_eq!(theme.style(keys::PANEL_BORDER).and_then(|s| s.fg), Some(Color::GRAY));
    assert_eq!(theme.dimension(keys::PANEL_TITLE_PADDING, 1), 0);
    assert_eq!(theme.string(keys::PROGRESSBAR_COMPLETE, "━"), "#");
    // Untouched keys keep the preset's value
    assert!(theme.style(keys::SPINNER).is_some());
}

#[test]
fn test_invalid_configs_fail_validation() {
    for name in ["invalid_color_depth.toml", "invalid_style.toml", "negative_fps.toml"] {
        let config = AppConfig::load_from_file(&fixture(name)).unwrap();
        assert!(config.validate().is_err(), "{} should be invalid", name);
    }
}

#[test]
fn test_defaults_fill_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[logging]\nlevel = \"warn\"\n").unwrap();

    let config = AppConfig::load_from_file(&config_path).unwrap();
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.render.color_depth, "auto");
    assert_eq!(config.theme.preset, "dark");
    assert_eq!(config.progress.animation_fps, 30);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("termweave.toml");

    let config = AppConfig::load_from_file(&config_path).unwrap();
    assert!(config_path.exists());
    assert_eq!(config, AppConfig::embedded().unwrap());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[render\nwidth = ").unwrap();

    let err = AppConfig::load_from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
#[serial]
fn test_env_override_precedence() {
    let _guard = env_lock().lock().unwrap();
    let vars = [
        ("TERMWEAVE_WIDTH", "42"),
        ("TERMWEAVE_COLOR_DEPTH", "none"),
        ("TERMWEAVE_INTERFACE", "stub"),
        ("TERMWEAVE_LOG_LEVEL", "trace"),
        ("TERMWEAVE_THEME", "light"),
    ];
    for (name, value) in vars {
        env::set_var(name, value);
    }

    let mut config = AppConfig::load_from_file(&fixture("valid_basic.toml")).unwrap();
    config.apply_env_overrides();

    for (name, _) in vars {
        env::remove_var(name);
    }

    assert_eq!(config.render.width, Some(42));
    assert_eq!(config.render.color_depth().unwrap(), Some(ColorDepth::NoColor));
    assert!(config.render.interface().unwrap().is_some());
    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.theme.preset, "light");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_unparsable_width_override_is_ignored() {
    let _guard = env_lock().lock().unwrap();
    env::set_var("TERMWEAVE_WIDTH", "wide");
    let mut config = AppConfig::default();
    config.apply_env_overrides();
    env::remove_var("TERMWEAVE_WIDTH");

    assert_eq!(config.render.width, None);
}
