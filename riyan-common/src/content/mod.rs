//! Extraction and normalization of CMS content
//!
//! Everything here is pure: inputs are strings from the database, outputs are
//! typed values or cleaned markup. Parsers never fail; unparseable input
//! yields empty results.

pub mod career_sections;
pub mod hero;
pub mod internship;
pub mod logos;
pub mod php_array;
pub mod text;

pub use career_sections::{parse_career_sections, CareerSections, Section};
pub use internship::{parse_internship_content, InternshipContent};
pub use logos::{categorize_logos, LogoCategory, LogoGroup};
