//! # Riyan Common Library
//!
//! Shared code for the Riyan site:
//! - Configuration loading (CLI/env overrides, TOML file, defaults)
//! - Database pool and read-only content queries
//! - Content extraction (career sections, internship page, hero slides,
//!   client logos) and text helpers

pub mod config;
pub mod content;
pub mod db;
pub mod error;

pub use error::{Error, Result};
