//! Client logo categories for the About page

use serde::Serialize;

use crate::db::models::ClientLogo;

/// Client category tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogoCategory {
    Government,
    Local,
    International,
    Bilateral,
}

impl LogoCategory {
    /// Tab order
    pub const TABS: [LogoCategory; 4] = [
        LogoCategory::Government,
        LogoCategory::Local,
        LogoCategory::International,
        LogoCategory::Bilateral,
    ];

    /// Matching order; the first category with a keyword hit wins
    const CHECK_ORDER: [LogoCategory; 4] = [
        LogoCategory::Government,
        LogoCategory::Bilateral,
        LogoCategory::Local,
        LogoCategory::International,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LogoCategory::Government => "Government of Maldives",
            LogoCategory::Local => "Local Brands",
            LogoCategory::International => "International Brands",
            LogoCategory::Bilateral => "Bilateral & Multilateral Agencies",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            // Composite image of the ministry logos
            LogoCategory::Government => &["asset-1"],
            LogoCategory::Local => &[
                "adk-hospital", "aima", "asandha", "bandos", "bank-of-maldives", "bml",
                "dhiraagu", "fsm", "gan-international-airport", "ensis", "hbl-maldives",
                "hdfc", "housing-development-corporation", "hdc", "indira-gandhi", "igmh",
                "island-aviation", "maldives-airports", "maldives-islamic-bank",
                "maldives-monitary-authority", "maldives-ports", "momentum", "mpao",
                "mtcc", "mtdc", "mwsc", "ooredoo", "rdc", "stelco", "sto",
                "sunland", "universal-enterprises", "villa", "berthold", "gaar",
            ],
            LogoCategory::International => &[
                "afcons", "amari", "anantara", "ares", "banyan", "brookfield", "cbre",
                "clubmed", "damak", "dubai-holding", "dusit", "four-seasons",
                "gleeds", "grt", "hyatt", "jumeirah", "meinhardt", "mthojgaard",
                "omnium", "oneonly", "reethi-rah", "onyx", "panchshil", "reethi-beach",
                "renaatus", "ithaa", "rlb", "hooloomann", "robinson", "samana",
                "sanken", "soneva", "starwood", "tata", "tui", "vx", "w-maldives",
                "494642433",
            ],
            LogoCategory::Bilateral => &[
                "abu-dhabi-fund", "adfd", "asian-development", "adb",
                "global-environment-facility", "gef", "green-climate-fund",
                "ifrc", "international-fund", "agricultural", "islamic-development-bank",
                "jica", "saudi-fund", "sfd", "opec-fund", "ofid", "world-bank",
                "undp", "unicef", "usaid", "world-health-organization", "who",
            ],
        }
    }

    /// Category for a logo, if any keyword matches its name or URL
    pub fn classify(logo: &ClientLogo) -> Option<LogoCategory> {
        let haystack = format!("{} {}", logo.name, logo.url).to_lowercase();
        Self::CHECK_ORDER
            .into_iter()
            .find(|category| category.keywords().iter().any(|kw| haystack.contains(kw)))
    }
}

/// Logos grouped under one tab
#[derive(Debug, Clone, Serialize)]
pub struct LogoGroup {
    pub category: LogoCategory,
    pub label: &'static str,
    pub logos: Vec<ClientLogo>,
}

/// Group logos into the four tabs, in tab order
///
/// Every tab is present even when empty; logos matching no category are
/// dropped.
pub fn categorize_logos(logos: &[ClientLogo]) -> Vec<LogoGroup> {
    let mut groups: Vec<LogoGroup> = LogoCategory::TABS
        .into_iter()
        .map(|category| LogoGroup {
            category,
            label: category.label(),
            logos: Vec::new(),
        })
        .collect();

    for logo in logos {
        if let Some(category) = LogoCategory::classify(logo) {
            if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
                group.logos.push(logo.clone());
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo(name: &str, url: &str) -> ClientLogo {
        ClientLogo {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_categorize_in_tab_order() {
        let logos = vec![
            logo("World Bank", "https://example.com/uploads/client/world-bank.png"),
            logo("Asset 1", "https://example.com/uploads/client/asset-1.png"),
            logo("Dhiraagu", "https://example.com/uploads/client/dhiraagu.png"),
            logo("Soneva", "https://example.com/uploads/client/soneva-fushi.png"),
            logo("Unknown", "https://example.com/uploads/client/zzz.png"),
        ];

        let groups = categorize_logos(&logos);
        let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
        assert_eq!(
            labels,
            vec![
                "Government of Maldives",
                "Local Brands",
                "International Brands",
                "Bilateral & Multilateral Agencies"
            ]
        );

        assert_eq!(groups[0].logos[0].name, "Asset 1");
        assert_eq!(groups[1].logos[0].name, "Dhiraagu");
        assert_eq!(groups[2].logos[0].name, "Soneva");
        assert_eq!(groups[3].logos[0].name, "World Bank");

        let total: usize = groups.iter().map(|g| g.logos.len()).sum();
        assert_eq!(total, 4, "uncategorized logos are dropped");
    }

    #[test]
    fn test_bilateral_checked_before_local() {
        // Matches both "who" and "maldives-ports"
        let l = logo("who-maldives-ports", "x.png");
        assert_eq!(LogoCategory::classify(&l), Some(LogoCategory::Bilateral));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let l = logo("BML", "HTTPS://EXAMPLE.COM/BML.PNG");
        assert_eq!(LogoCategory::classify(&l), Some(LogoCategory::Local));
    }

    #[test]
    fn test_empty_groups_present() {
        let groups = categorize_logos(&[]);
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.logos.is_empty()));
    }
}
