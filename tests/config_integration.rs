use std::io::Write;
use tempfile::NamedTempFile;
use treeview::config::Config;
use treeview::i18n::Locale;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[tree]
root_label = "Корень"
seed_demo = false

[tui]
locale = "ru"
status_timeout_ms = 2500
tick_rate_ms = 50
indent_width = 4
show_order_panel = false
mouse = false
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.tree.root_label, "Корень");
    assert!(!config.tree.seed_demo);
    assert_eq!(config.tui.locale, Locale::Ru);
    assert_eq!(config.tui.status_timeout_ms, 2500);
    assert_eq!(config.tui.indent_width, 4);
    assert!(!config.tui.show_order_panel);
    assert!(!config.tui.mouse);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[tui]
tick_rate_ms = 250
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert_eq!(config.tui.tick_rate_ms, 250);
    // Default values
    assert_eq!(config.tui.status_timeout_ms, 1600);
    assert_eq!(config.tree.root_label, "Root");
    assert!(config.tree.seed_demo);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"this is not valid toml [[[").unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn unknown_locale_returns_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[tui]\nlocale = \"fr\"\n").unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn indent_out_of_range_returns_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[tui]\nindent_width = 12\n").unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("indent_width"));
}

#[test]
fn missing_file_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(Some(&dir.path().join("absent.toml")));
    assert!(result.is_err());
}
