//! Listing pages: page-size resolution, filter bar, cards, gallery and
//! previous/next navigation

use riyan_common::content::text::{summary, SUMMARY_CHARS};
use riyan_common::db::{Adjacent, ImageAttachment, TaxonomyTerm};

use super::layout::text;

/// Page sizes offered on the projects listing
pub const PROJECT_PAGE_SIZES: [u32; 4] = [20, 40, 60, 100];
pub const PROJECT_DEFAULT_PAGE_SIZE: u32 = 24;

/// Page sizes offered on the news listing
pub const NEWS_PAGE_SIZES: [u32; 4] = [12, 24, 36, 48];
pub const NEWS_DEFAULT_PAGE_SIZE: u32 = 12;

/// Page size from the `perPage` query value
///
/// Anything other than one of the offered sizes yields the default.
pub fn resolve_per_page(raw: Option<&str>, allowed: &[u32], default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| allowed.contains(n))
        .unwrap_or(default)
}

/// One `<select>` of the filter bar
pub struct SelectFilter<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub terms: &'a [TaxonomyTerm],
    pub selected: &'a str,
}

/// GET form with term selects, a search box and the page-size select
pub fn filter_bar(
    action: &str,
    selects: &[SelectFilter<'_>],
    search: &str,
    sizes: &[u32],
    per_page: u32,
) -> String {
    let mut html = format!(r#"<form class="filters" method="get" action="{}">"#, text(action));

    for select in selects {
        html.push_str(&format!(
            r#"<label>{label} <select name="{name}"><option value="">All</option>"#,
            label = text(select.label),
            name = text(select.name),
        ));
        for term in select.terms {
            let selected = if term.slug == select.selected { " selected" } else { "" };
            html.push_str(&format!(
                r#"<option value="{}"{}>{} ({})</option>"#,
                text(&term.slug),
                selected,
                text(&term.name),
                term.count
            ));
        }
        html.push_str("</select></label> ");
    }

    html.push_str(&format!(
        r#"<label>Search <input type="search" name="q" value="{}"></label> "#,
        text(search)
    ));

    html.push_str(r#"<label>Show <select name="perPage">"#);
    for size in sizes {
        let selected = if *size == per_page { " selected" } else { "" };
        html.push_str(&format!(r#"<option value="{size}"{selected}>{size}</option>"#));
    }
    html.push_str(r#"</select></label> <button type="submit">Apply</button></form>"#);

    html
}

/// Card for a listing grid
pub struct Card<'a> {
    pub href: String,
    pub title: &'a str,
    pub excerpt: &'a str,
    pub content: &'a str,
    pub image_url: &'a str,
    pub meta: String,
}

pub fn render_card(card: &Card<'_>) -> String {
    format!(
        r#"<article class="card">
  <a href="{href}"><img src="{image}" alt="{title}" loading="lazy"></a>
  <p class="meta">{meta}</p>
  <h3><a href="{href}">{title}</a></h3>
  <p>{summary}</p>
</article>"#,
        href = text(&card.href),
        image = text(card.image_url),
        title = text(card.title),
        meta = text(&card.meta),
        summary = text(&summary(card.excerpt, card.content, SUMMARY_CHARS)),
    )
}

/// Grid of cards, or a message when there are none
pub fn render_cards(cards: &[Card<'_>], empty_message: &str) -> String {
    if cards.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, text(empty_message));
    }
    let items: String = cards.iter().map(render_card).collect();
    format!(r#"<div class="cards">{}</div>"#, items)
}

/// Image gallery; empty when there are no images
pub fn render_gallery(images: &[ImageAttachment], alt: &str) -> String {
    if images.is_empty() {
        return String::new();
    }
    let items: String = images
        .iter()
        .map(|image| {
            format!(
                r#"<img src="{}" alt="{}" loading="lazy">"#,
                text(&image.url),
                text(if image.title.is_empty() { alt } else { image.title.as_str() })
            )
        })
        .collect();
    format!(r#"<section class="gallery"><h2>Gallery</h2>{}</section>"#, items)
}

/// Previous/next links under `/<section>/<slug>`
pub fn render_adjacent(section: &str, adjacent: &Adjacent) -> String {
    let link = |rel: &str, label: &str, target: &Option<riyan_common::db::AdjacentLink>| {
        target
            .as_ref()
            .map(|t| {
                format!(
                    r#"<a rel="{rel}" href="/{section}/{slug}">{label}: {title}</a>"#,
                    slug = text(&t.slug),
                    title = text(&t.title),
                )
            })
            .unwrap_or_default()
    };

    format!(
        r#"<nav class="adjacent">{} {}</nav>"#,
        link("prev", "Previous", &adjacent.previous),
        link("next", "Next", &adjacent.next)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use riyan_common::db::AdjacentLink;

    #[test]
    fn test_resolve_per_page_projects() {
        assert_eq!(resolve_per_page(Some("40"), &PROJECT_PAGE_SIZES, 24), 40);
        assert_eq!(resolve_per_page(Some("24"), &PROJECT_PAGE_SIZES, 24), 24);
        assert_eq!(resolve_per_page(Some("25"), &PROJECT_PAGE_SIZES, 24), 24);
        assert_eq!(resolve_per_page(Some("abc"), &PROJECT_PAGE_SIZES, 24), 24);
        assert_eq!(resolve_per_page(None, &PROJECT_PAGE_SIZES, 24), 24);
    }

    #[test]
    fn test_resolve_per_page_news() {
        assert_eq!(resolve_per_page(Some("36"), &NEWS_PAGE_SIZES, 12), 36);
        assert_eq!(resolve_per_page(Some("100"), &NEWS_PAGE_SIZES, 12), 12);
        assert_eq!(resolve_per_page(Some("-12"), &NEWS_PAGE_SIZES, 12), 12);
    }

    #[test]
    fn test_filter_bar_marks_selection() {
        let terms = vec![
            TaxonomyTerm { name: "Resorts".into(), slug: "resorts".into(), count: 12 },
            TaxonomyTerm { name: "Roads & Ports".into(), slug: "roads".into(), count: 3 },
        ];
        let html = filter_bar(
            "/projects",
            &[SelectFilter { name: "category", label: "Sector", terms: &terms, selected: "roads" }],
            "\"villa\"",
            &PROJECT_PAGE_SIZES,
            60,
        );

        assert!(html.contains(r#"<option value="roads" selected>Roads &amp; Ports (3)</option>"#));
        assert!(html.contains(r#"<option value="resorts">Resorts (12)</option>"#));
        assert!(html.contains(r#"value="&quot;villa&quot;""#));
        assert!(html.contains(r#"<option value="60" selected>60</option>"#));
    }

    #[test]
    fn test_card_summary_falls_back_to_content() {
        let card = Card {
            href: "/news/launch".into(),
            title: "Launch",
            excerpt: "",
            content: "<p>Body <b>text</b></p>",
            image_url: "a.jpg",
            meta: "Mar 5, 2024".into(),
        };
        let html = render_card(&card);
        assert!(html.contains("<p>Body text</p>"));
        assert!(html.contains(r#"href="/news/launch""#));
    }

    #[test]
    fn test_empty_cards_message() {
        assert_eq!(
            render_cards(&[], "No projects found."),
            r#"<p class="empty">No projects found.</p>"#
        );
    }

    #[test]
    fn test_adjacent_links() {
        let adjacent = Adjacent {
            previous: Some(AdjacentLink { slug: "older".into(), title: "Older".into() }),
            next: None,
        };
        let html = render_adjacent("news", &adjacent);
        assert!(html.contains(r#"<a rel="prev" href="/news/older">Previous: Older</a>"#));
        assert!(!html.contains("Next:"));
    }
}
