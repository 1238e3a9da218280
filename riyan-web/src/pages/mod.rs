//! HTML page handlers

use serde::Deserialize;

use crate::error::PageError;

pub mod careers;
pub mod firm;
pub mod home;
pub mod news;
pub mod projects;

/// Query string of the listing pages
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub service: Option<String>,
    pub q: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

/// Fallback for unknown routes
pub async fn not_found() -> PageError {
    PageError::NotFound("Page not found.".to_string())
}

/// Firm section pages, as (path under /firm, label)
pub(crate) const FIRM_PAGES: [(&str, &str); 4] = [
    ("about", "About"),
    ("career", "Career"),
    ("career/internships", "Internships"),
    ("contact", "Contact"),
];

/// Links to the other firm pages
pub(crate) fn firm_links(current: &str) -> String {
    let links: String = FIRM_PAGES
        .iter()
        .filter(|(path, _)| *path != current)
        .map(|(path, label)| format!(r#"<a class="pill" href="/firm/{path}">{label}</a> "#))
        .collect();
    format!(r#"<nav class="firm-links">{}</nav>"#, links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firm_links_skip_current() {
        let html = firm_links("contact");
        assert!(html.contains(r#"href="/firm/about""#));
        assert!(html.contains(r#"href="/firm/career/internships""#));
        assert!(!html.contains(r#"href="/firm/contact""#));
    }
}
