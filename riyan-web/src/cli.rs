//! Command-line arguments
//!
//! Each flag can also come from its environment variable (clap `env`).
//! Unset flags fall through to the TOML config file and then to the
//! compiled defaults; see [`riyan_common::config`].

use std::path::PathBuf;

use clap::Parser;
use riyan_common::config::ConfigOverrides;

/// Command-line arguments for riyan-web
#[derive(Parser, Debug)]
#[command(name = "riyan-web")]
#[command(about = "Riyan public website")]
#[command(version)]
pub struct Args {
    /// TOML config file (default: <config_dir>/riyan/config.toml)
    #[arg(long, env = "RIYAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "RIYAN_BIND")]
    pub bind: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST")]
    pub db_host: Option<String>,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database schema name
    #[arg(long, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// Database port
    #[arg(long, env = "DB_PORT")]
    pub db_port: Option<u16>,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS")]
    pub db_max_connections: Option<u32>,

    /// Public base URL used in share links
    #[arg(long, env = "NEXT_PUBLIC_SITE_URL")]
    pub site_url: Option<String>,

    /// Comma-separated post types treated as job postings
    #[arg(long, env = "CAREER_POST_TYPES")]
    pub career_post_types: Option<String>,
}

impl Args {
    /// Settings given on the command line or in the environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            db_host: self.db_host.clone(),
            db_user: self.db_user.clone(),
            db_password: self.db_password.clone(),
            db_name: self.db_name.clone(),
            db_port: self.db_port,
            db_max_connections: self.db_max_connections,
            site_url: self.site_url.clone(),
            career_post_types: self.career_post_types.clone(),
            bind: self.bind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_flags_map_to_overrides() {
        let args = Args::try_parse_from([
            "riyan-web",
            "--db-host",
            "db.internal",
            "--db-port",
            "3307",
            "--career-post-types",
            "vacancy,job",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.db_host.as_deref(), Some("db.internal"));
        assert_eq!(overrides.db_port, Some(3307));
        assert_eq!(overrides.career_post_types.as_deref(), Some("vacancy,job"));
    }

    #[test]
    #[serial]
    fn test_env_fills_unset_flags() {
        std::env::set_var("DB_NAME", "riyan_staging");
        let args = Args::try_parse_from(["riyan-web", "--db-name", "from_cli"]).unwrap();
        assert_eq!(args.db_name.as_deref(), Some("from_cli"));

        let args = Args::try_parse_from(["riyan-web"]).unwrap();
        assert_eq!(args.db_name.as_deref(), Some("riyan_staging"));
        std::env::remove_var("DB_NAME");
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        let result = Args::try_parse_from(["riyan-web", "--db-port", "not-a-port"]);
        assert!(result.is_err());
    }
}
