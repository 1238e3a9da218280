//! Error type shared by the config loader, queries and content parsers
//!
//! Page handlers only care about two outcomes: the content is missing (404)
//! or the database call failed (500). [`Error::is_not_found`] draws that line.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Query against the CMS database failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Reading the config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad value in CLI/env, the TOML file, or a missing explicit config path
    #[error("Configuration error: {0}")]
    Config(String),

    /// No published post, page or term matched the slug
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True when the error means "no matching row" rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::Database(sqlx::Error::RowNotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants() {
        assert!(Error::NotFound("project".into()).is_not_found());
        assert!(Error::Database(sqlx::Error::RowNotFound).is_not_found());
        assert!(!Error::Config("bad port".into()).is_not_found());
        assert!(!Error::Database(sqlx::Error::PoolTimedOut).is_not_found());
    }

    #[test]
    fn test_display_messages() {
        let err = Error::Config("DB_PORT must be a number".into());
        assert_eq!(err.to_string(), "Configuration error: DB_PORT must be a number");

        let err = Error::NotFound("career 'site-engineer'".into());
        assert_eq!(err.to_string(), "Not found: career 'site-engineer'");
    }
}
