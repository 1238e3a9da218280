//! News listing and article queries

use sqlx::mysql::MySql;
use sqlx::{MySqlPool, QueryBuilder, Row};
use tracing::debug;

use super::helpers::{
    adjacent, gallery, terms_for_post, terms_for_posts, ContentKind, ListingFilter, POST_COLUMNS,
    THUMBNAIL_JOIN,
};
use super::models::{Adjacent, NewsDetail, NewsSummary, TaxonomyTerm};
use super::projects::{push_search, push_term_filter};
use super::taxonomy::get_terms;
use crate::config::ContentTypes;
use crate::Result;

/// Published news posts matching the filter, newest first
pub async fn get_news_posts(
    pool: &MySqlPool,
    types: &ContentTypes,
    filter: &ListingFilter,
) -> Result<Vec<NewsSummary>> {
    let mut qb = QueryBuilder::<MySql>::new(format!(
        "SELECT {POST_COLUMNS} FROM wp_posts p {THUMBNAIL_JOIN} WHERE "
    ));
    ContentKind::PostType(&types.news_post_type).push_predicate(&mut qb, "p");

    if let Some(category) = filter.category() {
        push_term_filter(&mut qb, &types.news_category_taxonomy, category);
    }
    if let Some(search) = filter.search() {
        push_search(&mut qb, search);
    }

    qb.push(" ORDER BY p.post_date DESC, p.ID DESC LIMIT ");
    qb.push_bind(filter.limit);

    let rows = qb.build().fetch_all(pool).await?;
    let mut posts: Vec<NewsSummary> = rows
        .iter()
        .map(|row| NewsSummary {
            id: row.get("id"),
            slug: row.get("slug"),
            title: row.get("title"),
            excerpt: row.get("excerpt"),
            content: row.get("content"),
            date: row.get("date"),
            thumbnail_url: row.get("thumbnail_url"),
            categories: Vec::new(),
        })
        .collect();

    let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
    let mut categories = terms_for_posts(pool, &ids, &types.news_category_taxonomy).await?;
    for post in &mut posts {
        post.categories = categories.remove(&post.id).unwrap_or_default();
    }

    debug!(
        count = posts.len(),
        category = ?filter.category(),
        search = ?filter.search(),
        "Loaded news posts"
    );

    Ok(posts)
}

/// Published article with this slug, with categories, tags and gallery
pub async fn get_news_by_slug(
    pool: &MySqlPool,
    types: &ContentTypes,
    slug: &str,
) -> Result<Option<NewsDetail>> {
    let mut qb = QueryBuilder::<MySql>::new(format!(
        "SELECT {POST_COLUMNS} FROM wp_posts p {THUMBNAIL_JOIN} WHERE p.post_name = "
    ));
    qb.push_bind(slug);
    qb.push(" AND ");
    ContentKind::PostType(&types.news_post_type).push_predicate(&mut qb, "p");
    qb.push(" LIMIT 1");

    let Some(row) = qb.build().fetch_optional(pool).await? else {
        return Ok(None);
    };
    let id: u64 = row.get("id");

    let (categories, tags, gallery) = tokio::try_join!(
        terms_for_post(pool, id, &types.news_category_taxonomy),
        terms_for_post(pool, id, &types.news_tag_taxonomy),
        gallery(pool, id),
    )?;

    Ok(Some(NewsDetail {
        id,
        slug: row.get("slug"),
        title: row.get("title"),
        excerpt: row.get("excerpt"),
        content: row.get("content"),
        date: row.get("date"),
        thumbnail_url: row.get("thumbnail_url"),
        categories,
        tags,
        gallery,
    }))
}

/// Older and newer articles around `slug`
pub async fn get_adjacent_news(
    pool: &MySqlPool,
    types: &ContentTypes,
    slug: &str,
) -> Result<Adjacent> {
    adjacent(pool, ContentKind::PostType(&types.news_post_type), slug).await
}

pub async fn get_news_categories(
    pool: &MySqlPool,
    types: &ContentTypes,
) -> Result<Vec<TaxonomyTerm>> {
    get_terms(pool, &types.news_category_taxonomy).await
}
