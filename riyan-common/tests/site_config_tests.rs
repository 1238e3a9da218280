//! Integration tests for loading and resolving the site configuration
//!
//! Each setting resolves CLI/env override → TOML file → compiled default.

use std::fs;

use riyan_common::config::{load_toml_config, ConfigOverrides, SiteConfig};
use tempfile::TempDir;

const FULL_CONFIG: &str = r#"
site_url = "https://www.riyan.com.mv/"
bind = "0.0.0.0:8080"

[database]
host = "db.internal"
user = "site"
password = "secret"
name = "riyan_cms"
port = 3307
max_connections = 4

[content]
career_post_types = ["vacancy"]
career_parent_slug = "careers"
hero_slider_alias = "home-slider"
"#;

#[test]
fn test_file_values_used_when_no_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, FULL_CONFIG).unwrap();

    let file = load_toml_config(Some(&path)).unwrap();
    let config = SiteConfig::resolve(ConfigOverrides::default(), file).unwrap();

    assert_eq!(config.site_url, "https://www.riyan.com.mv");
    assert_eq!(config.bind, "0.0.0.0:8080");
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.port, 3307);
    assert_eq!(config.database.max_connections, 4);
    assert_eq!(config.content.career_post_types, vec!["vacancy"]);
    assert_eq!(config.content.career_parent_slug, "careers");
    assert_eq!(config.content.hero_slider_alias, "home-slider");
    // Keys absent from the file keep their defaults
    assert_eq!(config.content.project_post_type, "project");
}

#[test]
fn test_overrides_beat_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, FULL_CONFIG).unwrap();

    let overrides = ConfigOverrides {
        db_host: Some("127.0.0.1".into()),
        db_port: Some(3306),
        career_post_types: Some("career, job_listing".into()),
        ..Default::default()
    };
    let file = load_toml_config(Some(&path)).unwrap();
    let config = SiteConfig::resolve(overrides, file).unwrap();

    assert_eq!(config.database.host, "127.0.0.1");
    assert_eq!(config.database.port, 3306);
    assert_eq!(config.database.user, "site");
    assert_eq!(config.content.career_post_types, vec!["career", "job_listing"]);
}

#[test]
fn test_invalid_file_value_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "site_url = \"ftp://riyan\"\n").unwrap();

    let file = load_toml_config(Some(&path)).unwrap();
    let err = SiteConfig::resolve(ConfigOverrides::default(), file).unwrap_err();
    assert!(err.to_string().contains("Site URL must start with http"));
}
