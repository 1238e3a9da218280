//! News listing and article pages

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use riyan_common::content::text::{format_naive_date, strip_html};
use riyan_common::db::{
    news::{get_adjacent_news, get_news_by_slug, get_news_categories, get_news_posts},
    ListingFilter, NewsDetail,
};
use tracing::debug;

use super::home::NEWS_FALLBACK_IMAGE;
use super::ListingQuery;
use crate::error::{PageError, PageResult};
use crate::render::layout::{self, cms_html, joined_or, text};
use crate::render::listing::{
    filter_bar, render_adjacent, render_cards, render_gallery, resolve_per_page, Card,
    SelectFilter, NEWS_DEFAULT_PAGE_SIZE, NEWS_PAGE_SIZES,
};
use crate::render::share::{render_share_links, share_url};
use crate::AppState;

/// GET /news
pub async fn news_list(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> PageResult<Html<String>> {
    let types = &state.config.content;
    let per_page = resolve_per_page(
        query.per_page.as_deref(),
        &NEWS_PAGE_SIZES,
        NEWS_DEFAULT_PAGE_SIZE,
    );
    let filter = ListingFilter {
        category: query.category.clone(),
        service: None,
        search: query.q.clone(),
        limit: per_page,
    };

    let (categories, posts) = tokio::try_join!(
        get_news_categories(&state.db, types),
        get_news_posts(&state.db, types, &filter),
    )?;

    debug!(
        total = posts.len(),
        sample = ?posts.iter().take(3).map(|p| (p.id, p.slug.as_str())).collect::<Vec<_>>(),
        "News listing"
    );

    let bar = filter_bar(
        "/news",
        &[SelectFilter {
            name: "category",
            label: "Category",
            terms: &categories,
            selected: query.category.as_deref().unwrap_or_default(),
        }],
        query.q.as_deref().unwrap_or_default(),
        &NEWS_PAGE_SIZES,
        per_page,
    );

    let cards: Vec<Card<'_>> = posts
        .iter()
        .map(|post| Card {
            href: format!("/news/{}", post.slug),
            title: &post.title,
            excerpt: &post.excerpt,
            content: &post.content,
            image_url: post.thumbnail_url.as_deref().unwrap_or(NEWS_FALLBACK_IMAGE),
            meta: format_naive_date(post.date.date()),
        })
        .collect();

    let body = format!(
        r#"<h1>News</h1>
{bar}
{cards}"#,
        bar = bar,
        cards = render_cards(&cards, "No articles match these filters."),
    );

    Ok(Html(layout::page("News", &body)))
}

fn render_article(article: &NewsDetail, share: &str, adjacent: &str) -> String {
    let lead = strip_html(&article.excerpt);
    let lead = if lead.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="lead">{}</p>"#, text(&lead))
    };

    let tags = if article.tags.is_empty() {
        String::new()
    } else {
        let items: String = article
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="badge">{}</span> "#, text(tag)))
            .collect();
        format!(r#"<p class="tags">{}</p>"#, items)
    };

    format!(
        r#"{hero}
<article class="news">
  <dl class="stats">
    <dt>Published</dt><dd>{published}</dd>
    <dt>Categories</dt><dd>{categories}</dd>
  </dl>
  {lead}
  <div class="content">{content}</div>
  {tags}
  {gallery}
  {share}
</article>
{adjacent}"#,
        hero = layout::hero(
            "News",
            &article.title,
            "",
            article.thumbnail_url.as_deref().unwrap_or(NEWS_FALLBACK_IMAGE)
        ),
        published = text(&format_naive_date(article.date.date())),
        categories = joined_or(&article.categories, "Not specified"),
        lead = lead,
        content = cms_html(&article.content),
        tags = tags,
        gallery = render_gallery(&article.gallery, &article.title),
        share = share,
        adjacent = adjacent,
    )
}

/// GET /news/:slug
pub async fn news_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> PageResult<Html<String>> {
    let types = &state.config.content;
    let (article, adjacent) = tokio::try_join!(
        get_news_by_slug(&state.db, types, &slug),
        get_adjacent_news(&state.db, types, &slug),
    )?;

    let Some(article) = article else {
        return Err(PageError::NotFound("Article not found.".to_string()));
    };

    debug!(
        id = article.id,
        slug = %article.slug,
        categories = ?article.categories,
        tags = ?article.tags,
        "News detail"
    );

    let url = share_url(&state.config.site_url, "news", &slug);
    let body = render_article(
        &article,
        &render_share_links(&url, &article.title),
        &render_adjacent("news", &adjacent),
    );

    Ok(Html(layout::page(&article.title, &body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_article() {
        let article = NewsDetail {
            id: 11,
            slug: "award".into(),
            title: "Riyan wins award".into(),
            excerpt: String::new(),
            content: "<p>We won.</p>".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            thumbnail_url: Some("https://example.com/award.jpg".into()),
            categories: vec![],
            tags: vec!["Awards".into(), "R&D".into()],
            gallery: vec![],
        };

        let html = render_article(&article, "<nav class=\"share\"></nav>", "");
        assert!(html.contains("<dd>Mar 5, 2024</dd>"));
        assert!(html.contains("<dt>Categories</dt><dd>Not specified</dd>"));
        assert!(html.contains(r#"<span class="badge">R&amp;D</span>"#));
        assert!(html.contains("https://example.com/award.jpg"));
        assert!(!html.contains(r#"class="lead""#));
        assert!(!html.contains("Gallery"));
    }
}
