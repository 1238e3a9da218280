//! Social share links for detail pages

use url::Url;

use super::layout::text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub label: &'static str,
    pub href: String,
}

/// Public URL of an item: `<site_url>/<section>/<slug>`
pub fn share_url(site_url: &str, section: &str, slug: &str) -> String {
    format!("{}/{}/{}", site_url.trim_end_matches('/'), section, slug)
}

fn intent(base: &str, params: &[(&str, &str)]) -> Option<String> {
    Url::parse_with_params(base, params).ok().map(String::from)
}

/// X, Facebook, Pinterest and LinkedIn share intents for `url`
pub fn share_links(url: &str, title: &str) -> Vec<ShareLink> {
    let targets: [(&'static str, &str, Vec<(&str, &str)>); 4] = [
        (
            "X",
            "https://twitter.com/intent/tweet",
            vec![("url", url), ("text", title)],
        ),
        (
            "Facebook",
            "https://www.facebook.com/sharer/sharer.php",
            vec![("u", url)],
        ),
        (
            "Pinterest",
            "https://pinterest.com/pin/create/button/",
            vec![("url", url), ("description", title)],
        ),
        (
            "LinkedIn",
            "https://www.linkedin.com/shareArticle",
            vec![("mini", "true"), ("url", url), ("title", title)],
        ),
    ];

    targets
        .into_iter()
        .filter_map(|(label, base, params)| {
            intent(base, &params).map(|href| ShareLink { label, href })
        })
        .collect()
}

/// "Share" block for a detail page
pub fn render_share_links(url: &str, title: &str) -> String {
    let links: String = share_links(url, title)
        .into_iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noreferrer">{}</a> "#,
                text(&link.href),
                link.label
            )
        })
        .collect();
    format!(r#"<div class="share"><span>Share:</span> {}</div>"#, links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url() {
        assert_eq!(
            share_url("https://riyan.com.mv/", "projects", "velana-terminal"),
            "https://riyan.com.mv/projects/velana-terminal"
        );
    }

    #[test]
    fn test_share_links_encode_parameters() {
        let links = share_links(
            "http://localhost:3000/news/a-b",
            "Roads & Bridges: 2024?",
        );
        let labels: Vec<&str> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["X", "Facebook", "Pinterest", "LinkedIn"]);

        assert_eq!(
            links[0].href,
            "https://twitter.com/intent/tweet?url=http%3A%2F%2Flocalhost%3A3000%2Fnews%2Fa-b&text=Roads+%26+Bridges%3A+2024%3F"
        );
        assert_eq!(
            links[1].href,
            "https://www.facebook.com/sharer/sharer.php?u=http%3A%2F%2Flocalhost%3A3000%2Fnews%2Fa-b"
        );
        assert!(links[2].href.contains("&description=Roads+%26+Bridges"));
        assert!(links[3]
            .href
            .starts_with("https://www.linkedin.com/shareArticle?mini=true&url="));
    }

    #[test]
    fn test_rendered_links_escape_ampersands() {
        let html = render_share_links("http://x.test/a", "T");
        assert!(html.contains("&amp;text=T"));
        assert!(!html.contains("&text="));
    }
}
