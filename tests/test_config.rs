//! Integration tests for configuration loading.

mod common;

use std::path::PathBuf;
use std::time::Duration;

use common::*;
use folio::Config;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.window.width, 1100.0);
    assert_eq!(config.window.height, 800.0);
    assert_eq!(config.reveal.anticipate_px, 0.0);
    assert_eq!(config.reveal.transition(), Duration::from_millis(500));
    assert_eq!(config.content.catalog, None);
    assert_eq!(config.content.assets_dir, PathBuf::from("assets"));
    assert_eq!(config.contact.acknowledgment, "Message sent! (Demo)");
}

#[test]
fn test_empty_file_is_default() -> anyhow::Result<()> {
    assert_eq!(Config::from_toml_str("")?, Config::default());
    Ok(())
}

#[test]
fn test_partial_config() -> anyhow::Result<()> {
    let config = Config::from_toml_str(
        r#"
[reveal]
transition_ms = 0

[contact]
acknowledgment = "Got it"
"#,
    )?;

    assert_eq!(config.reveal.transition(), Duration::ZERO);
    assert_eq!(config.reveal.anticipate_px, 0.0);
    assert_eq!(config.contact.acknowledgment, "Got it");
    assert_eq!(config.window.width, 1100.0);
    Ok(())
}

#[test]
fn test_unknown_key_is_rejected() {
    assert!(Config::from_toml_str("[window]\ndepth = 3\n").is_err());
    assert!(Config::from_toml_str("[theme]\nname = \"light\"\n").is_err());
}

#[test]
fn test_relative_paths_follow_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("folio.toml");
    std::fs::write(
        &path,
        "[content]\ncatalog = \"content/catalog.toml\"\nassets_dir = \"media\"\n",
    )?;

    let config = Config::load(Some(&path))?;

    assert_eq!(
        config.content.catalog,
        Some(dir.path().join("content/catalog.toml"))
    );
    assert_eq!(config.content.assets_dir, dir.path().join("media"));
    Ok(())
}

#[test]
fn test_absolute_paths_are_kept() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let media = dir.path().join("elsewhere");
    let path = dir.path().join("folio.toml");
    std::fs::write(
        &path,
        format!("[content]\nassets_dir = {:?}\n", media.display().to_string()),
    )?;

    let config = Config::load_from_path(&path)?;

    assert_eq!(config.content.assets_dir, media);
    Ok(())
}

#[test]
fn test_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
}

#[test]
fn test_catalog_from_config() -> anyhow::Result<()> {
    let file = write_temp_file(".toml", MINIMAL_CATALOG);
    let mut config = Config::default();

    // 1. Built-in when nothing is configured
    assert!(!config.catalog()?.items(Category::Skills).is_empty());

    // 2. The configured file otherwise
    config.content.catalog = Some(file.path().to_path_buf());
    let catalog = config.catalog()?;
    assert_eq!(catalog.profile().first_name, "Ada");
    Ok(())
}
