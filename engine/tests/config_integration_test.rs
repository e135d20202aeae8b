//! Integration tests for configuration management
//!
//! These tests verify that configuration files are loaded from disk,
//! validated, and applied to the toolkit.

use gbind::config::Config;
use gbind::toolkit::Toolkit;
use sdk::errors::BindError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[core]
log_level = "warn"

[modules.gtk]
candidates = ["/opt/gtk/lib/libgtk-4.so.1"]

[modules.girepository]
required = false
"#,
    )
    .unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.core.log_level, "warn");
    assert_eq!(config.modules.len(), 2);
    assert!(!config.modules["girepository"].required);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(BindError::Config(msg)) if msg.contains("read")));
}

#[test]
fn test_load_invalid_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[modules.glib]\ncandidates = []\n").unwrap();

    assert!(matches!(
        Config::load_from_path(&path),
        Err(BindError::Config(_))
    ));
}

#[test]
fn test_config_applies_to_toolkit() {
    let config = Config::from_toml_str(
        r#"
[modules.gtk]
candidates = ["/opt/gtk/lib/libgtk-4.so.1"]

[modules.girepository]
required = false
"#,
    )
    .unwrap();

    let toolkit = Toolkit::from_config(&config).unwrap();

    let gtk = toolkit.module("gtk").unwrap();
    assert_eq!(gtk.candidates(), &["/opt/gtk/lib/libgtk-4.so.1"]);
    assert!(gtk.is_required());

    let gir = toolkit.module("girepository").unwrap();
    assert!(!gir.is_required());
    assert_eq!(
        gir.candidates(),
        &["libgirepository-1.0.so.1", "libgirepository-1.0.so"]
    );

    // GDK keeps its built-in candidates even though GTK was overridden
    let gdk = toolkit.module("gdk").unwrap();
    assert_eq!(gdk.candidates(), &["libgtk-4.so.1", "libgtk-4.so"]);
}

#[test]
fn test_default_config_serializes_and_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let text = toml::to_string_pretty(&Config::default()).unwrap();
    fs::write(&path, text).unwrap();

    assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
}
