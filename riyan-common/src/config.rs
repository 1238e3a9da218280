//! Configuration loading and resolution
//!
//! Every setting resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Tiers 1 and 2 are collected by the binary (clap reads both) and handed
//! over as [`ConfigOverrides`]; this module merges them with the TOML file.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Content types treated as job postings when nothing overrides them
pub const DEFAULT_CAREER_POST_TYPES: &[&str] = &["career", "careers"];

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    /// Schema name
    pub name: String,
    pub port: u16,
    /// Upper bound on concurrent pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            name: "riyan_nextjs".to_string(),
            port: 3306,
            max_connections: 10,
        }
    }
}

/// CMS identifiers for the kinds of content the site renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypes {
    pub project_post_type: String,
    pub project_category_taxonomy: String,
    pub project_service_taxonomy: String,
    pub news_post_type: String,
    pub news_category_taxonomy: String,
    pub news_tag_taxonomy: String,
    /// Post types treated as job postings
    pub career_post_types: Vec<String>,
    /// Pages parented to the page with this slug are job postings too
    pub career_parent_slug: String,
    pub hero_slider_alias: String,
    /// Image attachments whose URL contains this fragment are client logos
    pub client_logo_fragment: String,
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self {
            project_post_type: "project".to_string(),
            project_category_taxonomy: "project_category".to_string(),
            project_service_taxonomy: "project_service".to_string(),
            news_post_type: "post".to_string(),
            news_category_taxonomy: "category".to_string(),
            news_tag_taxonomy: "post_tag".to_string(),
            career_post_types: DEFAULT_CAREER_POST_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            career_parent_slug: "career".to_string(),
            hero_slider_alias: "slider-1".to_string(),
            client_logo_fragment: "client".to_string(),
        }
    }
}

/// Fully resolved site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub database: DatabaseConfig,
    /// Public base URL used to build shareable links (no trailing slash)
    pub site_url: String,
    /// HTTP listen address
    pub bind: String,
    pub content: ContentTypes,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            site_url: "http://localhost:3000".to_string(),
            bind: "127.0.0.1:3000".to_string(),
            content: ContentTypes::default(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_host: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_name: Option<String>,
    pub db_port: Option<u16>,
    pub db_max_connections: Option<u32>,
    pub site_url: Option<String>,
    /// Comma-separated list of post types
    pub career_post_types: Option<String>,
    pub bind: Option<String>,
}

/// `[database]` table of the TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlDatabase {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub port: Option<u16>,
    pub max_connections: Option<u32>,
}

/// `[content]` table of the TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlContent {
    pub project_post_type: Option<String>,
    pub project_category_taxonomy: Option<String>,
    pub project_service_taxonomy: Option<String>,
    pub news_post_type: Option<String>,
    pub news_category_taxonomy: Option<String>,
    pub news_tag_taxonomy: Option<String>,
    pub career_post_types: Option<Vec<String>>,
    pub career_parent_slug: Option<String>,
    pub hero_slider_alias: Option<String>,
    pub client_logo_fragment: Option<String>,
}

/// On-disk configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub site_url: Option<String>,
    pub bind: Option<String>,
    pub database: TomlDatabase,
    pub content: TomlContent,
}

/// Default config file location: `<config_dir>/riyan/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("riyan").join("config.toml"))
}

/// Load the TOML config file
///
/// An explicitly requested file must exist. When no path is given the
/// platform default is tried and a missing file falls back to an empty
/// config with a warning.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                warn!("No config file found, using environment and compiled defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)?;
    let config = parse_toml_config(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    info!("Loaded config file {}", path.display());
    Ok(config)
}

/// Parse TOML config text
pub fn parse_toml_config(content: &str) -> std::result::Result<TomlConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Split a comma-separated post type list, dropping blanks
pub fn parse_type_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn pick<T>(cli_or_env: Option<T>, file: Option<T>, default: T) -> T {
    cli_or_env.or(file).unwrap_or(default)
}

impl SiteConfig {
    /// Merge CLI/env overrides, the TOML file, and compiled defaults
    pub fn resolve(overrides: ConfigOverrides, file: TomlConfig) -> Result<Self> {
        let defaults = SiteConfig::default();
        let TomlConfig {
            site_url,
            bind,
            database: db,
            content,
        } = file;

        let database = DatabaseConfig {
            host: pick(overrides.db_host, db.host, defaults.database.host),
            user: pick(overrides.db_user, db.user, defaults.database.user),
            password: pick(overrides.db_password, db.password, defaults.database.password),
            name: pick(overrides.db_name, db.name, defaults.database.name),
            port: pick(overrides.db_port, db.port, defaults.database.port),
            max_connections: pick(
                overrides.db_max_connections,
                db.max_connections,
                defaults.database.max_connections,
            ),
        };

        if database.port == 0 {
            return Err(Error::Config("Database port must be non-zero".to_string()));
        }
        if database.max_connections == 0 {
            return Err(Error::Config(
                "Database max_connections must be at least 1".to_string(),
            ));
        }

        let site_url = pick(overrides.site_url, site_url, defaults.site_url);
        let site_url = normalize_site_url(&site_url)?;

        let dc = defaults.content;

        // An override list that is blank after trimming means "use the default"
        let career_post_types = overrides
            .career_post_types
            .as_deref()
            .map(parse_type_list)
            .filter(|types| !types.is_empty())
            .or_else(|| content.career_post_types.clone().filter(|t| !t.is_empty()))
            .unwrap_or_else(|| dc.career_post_types.clone());

        let content = ContentTypes {
            project_post_type: pick(None, content.project_post_type, dc.project_post_type),
            project_category_taxonomy: pick(
                None,
                content.project_category_taxonomy,
                dc.project_category_taxonomy,
            ),
            project_service_taxonomy: pick(
                None,
                content.project_service_taxonomy,
                dc.project_service_taxonomy,
            ),
            news_post_type: pick(None, content.news_post_type, dc.news_post_type),
            news_category_taxonomy: pick(
                None,
                content.news_category_taxonomy,
                dc.news_category_taxonomy,
            ),
            news_tag_taxonomy: pick(None, content.news_tag_taxonomy, dc.news_tag_taxonomy),
            career_post_types,
            career_parent_slug: pick(None, content.career_parent_slug, dc.career_parent_slug),
            hero_slider_alias: pick(None, content.hero_slider_alias, dc.hero_slider_alias),
            client_logo_fragment: pick(
                None,
                content.client_logo_fragment,
                dc.client_logo_fragment,
            ),
        };

        Ok(SiteConfig {
            database,
            site_url,
            bind: pick(overrides.bind, bind, defaults.bind),
            content,
        })
    }
}

/// Validate the public base URL and strip trailing slashes
fn normalize_site_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Config(format!(
            "Site URL must start with http:// or https://, got '{}'",
            raw
        )));
    }
    Ok(trimmed.to_string())
}
