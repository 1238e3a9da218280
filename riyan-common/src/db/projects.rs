//! Project listing and detail queries

use sqlx::mysql::{MySql, MySqlRow};
use sqlx::{MySqlPool, QueryBuilder, Row};
use tracing::debug;

use super::helpers::{
    adjacent, gallery, like_pattern, post_meta, terms_for_post, terms_for_posts, ContentKind,
    ListingFilter, POST_COLUMNS, THUMBNAIL_JOIN,
};
use super::models::{Adjacent, ProjectDetail, ProjectMeta, ProjectSummary, TaxonomyTerm};
use super::taxonomy::get_terms;
use crate::config::ContentTypes;
use crate::content::php_array::decode_string_list;
use crate::Result;

const META_KEYS: [&str; 4] = ["client", "year", "location", "services"];

/// Push an `EXISTS` clause requiring a term slug in a taxonomy
pub(crate) fn push_term_filter<'a>(
    qb: &mut QueryBuilder<'a, MySql>,
    taxonomy: &'a str,
    slug: &'a str,
) {
    qb.push(
        " AND EXISTS (SELECT 1 FROM wp_term_relationships ftr \
           JOIN wp_term_taxonomy ftt ON ftt.term_taxonomy_id = ftr.term_taxonomy_id \
           JOIN wp_terms ft ON ft.term_id = ftt.term_id \
           WHERE ftr.object_id = p.ID AND ftt.taxonomy = ",
    );
    qb.push_bind(taxonomy);
    qb.push(" AND ft.slug = ");
    qb.push_bind(slug);
    qb.push(")");
}

/// Push a title/body `LIKE` clause
pub(crate) fn push_search<'a>(qb: &mut QueryBuilder<'a, MySql>, term: &str) {
    let pattern = like_pattern(term);
    qb.push(" AND (p.post_title LIKE ");
    qb.push_bind(pattern.clone());
    qb.push(" OR p.post_content LIKE ");
    qb.push_bind(pattern);
    qb.push(")");
}

fn summary_from_row(row: &MySqlRow) -> ProjectSummary {
    ProjectSummary {
        id: row.get("id"),
        slug: row.get("slug"),
        title: row.get("title"),
        excerpt: row.get("excerpt"),
        content: row.get("content"),
        date: row.get("date"),
        thumbnail_url: row.get("thumbnail_url"),
        categories: Vec::new(),
        services: Vec::new(),
    }
}

/// Published projects matching the filter, newest first
pub async fn get_projects(
    pool: &MySqlPool,
    types: &ContentTypes,
    filter: &ListingFilter,
) -> Result<Vec<ProjectSummary>> {
    let mut qb = QueryBuilder::<MySql>::new(format!(
        "SELECT {POST_COLUMNS} FROM wp_posts p {THUMBNAIL_JOIN} WHERE "
    ));
    ContentKind::PostType(&types.project_post_type).push_predicate(&mut qb, "p");

    if let Some(category) = filter.category() {
        push_term_filter(&mut qb, &types.project_category_taxonomy, category);
    }
    if let Some(service) = filter.service() {
        push_term_filter(&mut qb, &types.project_service_taxonomy, service);
    }
    if let Some(search) = filter.search() {
        push_search(&mut qb, search);
    }

    qb.push(" ORDER BY p.post_date DESC, p.ID DESC LIMIT ");
    qb.push_bind(filter.limit);

    let rows = qb.build().fetch_all(pool).await?;
    let mut projects: Vec<ProjectSummary> = rows.iter().map(summary_from_row).collect();

    let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
    let (mut categories, mut services) = tokio::try_join!(
        terms_for_posts(pool, &ids, &types.project_category_taxonomy),
        terms_for_posts(pool, &ids, &types.project_service_taxonomy),
    )?;

    for project in &mut projects {
        project.categories = categories.remove(&project.id).unwrap_or_default();
        project.services = services.remove(&project.id).unwrap_or_default();
    }

    debug!(
        count = projects.len(),
        category = ?filter.category(),
        service = ?filter.service(),
        search = ?filter.search(),
        "Loaded projects"
    );

    Ok(projects)
}

/// Published project with this slug, with terms, custom fields and gallery
pub async fn get_project_by_slug(
    pool: &MySqlPool,
    types: &ContentTypes,
    slug: &str,
) -> Result<Option<ProjectDetail>> {
    let mut qb = QueryBuilder::<MySql>::new(format!(
        "SELECT {POST_COLUMNS} FROM wp_posts p {THUMBNAIL_JOIN} WHERE p.post_name = "
    ));
    qb.push_bind(slug);
    qb.push(" AND ");
    ContentKind::PostType(&types.project_post_type).push_predicate(&mut qb, "p");
    qb.push(" LIMIT 1");

    let Some(row) = qb.build().fetch_optional(pool).await? else {
        return Ok(None);
    };
    let summary = summary_from_row(&row);

    let (categories, services, meta, gallery) = tokio::try_join!(
        terms_for_post(pool, summary.id, &types.project_category_taxonomy),
        terms_for_post(pool, summary.id, &types.project_service_taxonomy),
        post_meta(pool, summary.id, &META_KEYS),
        gallery(pool, summary.id),
    )?;

    let meta = ProjectMeta {
        client: meta.get("client").cloned(),
        year: meta.get("year").cloned(),
        location: meta.get("location").cloned(),
        services: meta
            .get("services")
            .map(|raw| decode_string_list(raw))
            .unwrap_or_default(),
    };

    Ok(Some(ProjectDetail {
        id: summary.id,
        slug: summary.slug,
        title: summary.title,
        excerpt: summary.excerpt,
        content: summary.content,
        date: summary.date,
        thumbnail_url: summary.thumbnail_url,
        categories,
        services,
        meta,
        gallery,
    }))
}

/// Older and newer projects around `slug`
pub async fn get_adjacent_projects(
    pool: &MySqlPool,
    types: &ContentTypes,
    slug: &str,
) -> Result<Adjacent> {
    adjacent(pool, ContentKind::PostType(&types.project_post_type), slug).await
}

pub async fn get_project_categories(
    pool: &MySqlPool,
    types: &ContentTypes,
) -> Result<Vec<TaxonomyTerm>> {
    get_terms(pool, &types.project_category_taxonomy).await
}

pub async fn get_project_services(
    pool: &MySqlPool,
    types: &ContentTypes,
) -> Result<Vec<TaxonomyTerm>> {
    get_terms(pool, &types.project_service_taxonomy).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_listing_sql() {
        let mut qb = QueryBuilder::<MySql>::new("SELECT p.ID FROM wp_posts p WHERE ");
        ContentKind::PostType("project").push_predicate(&mut qb, "p");
        push_term_filter(&mut qb, "project_category", "resorts");
        push_search(&mut qb, "villa");

        let sql = qb.sql();
        assert!(sql.contains("ftt.taxonomy = ? AND ft.slug = ?"));
        assert!(sql.contains("(p.post_title LIKE ? OR p.post_content LIKE ?)"));
    }
}
