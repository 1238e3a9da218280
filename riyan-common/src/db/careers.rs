//! Career posting queries
//!
//! A career posting is a published post of one of the configured career
//! types, or a published page whose parent page is the careers page.

use sqlx::mysql::MySql;
use sqlx::{MySqlPool, QueryBuilder, Row};

use super::helpers::{adjacent, post_meta, ContentKind};
use super::models::{Adjacent, CareerDetail, CareerSummary};
use crate::config::ContentTypes;
use crate::Result;

/// Meta keys holding explicitly entered posting fields
pub const CAREER_META_KEYS: [&str; 9] = [
    "location",
    "employment_type",
    "department",
    "closing_date",
    "job_description",
    "responsibilities",
    "requirements",
    "qualifications",
    "benefits",
];

const CAREER_COLUMNS: &str = "p.ID AS id, p.post_name AS slug, p.post_title AS title, \
     p.post_excerpt AS excerpt, p.post_content AS content, p.post_date AS date";

/// Open postings, newest first
pub async fn get_career_posts(
    pool: &MySqlPool,
    types: &ContentTypes,
    limit: u32,
) -> Result<Vec<CareerSummary>> {
    let mut qb = QueryBuilder::<MySql>::new(format!(
        "SELECT {CAREER_COLUMNS}, closing.meta_value AS closing_date \
         FROM wp_posts p \
         LEFT JOIN wp_postmeta closing \
                ON closing.post_id = p.ID AND closing.meta_key = 'closing_date' \
         WHERE "
    ));
    ContentKind::careers(types).push_predicate(&mut qb, "p");
    qb.push(" ORDER BY p.post_date DESC, p.ID DESC LIMIT ");
    qb.push_bind(limit);

    let rows = qb.build().fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let closing: Option<String> = row.get("closing_date");
            CareerSummary {
                id: row.get("id"),
                slug: row.get("slug"),
                title: row.get("title"),
                excerpt: row.get("excerpt"),
                content: row.get("content"),
                date: row.get("date"),
                closing_date: closing.filter(|v| !v.trim().is_empty()),
            }
        })
        .collect())
}

/// Posting with this slug and its explicitly entered fields
pub async fn get_career_by_slug(
    pool: &MySqlPool,
    types: &ContentTypes,
    slug: &str,
) -> Result<Option<CareerDetail>> {
    let mut qb = QueryBuilder::<MySql>::new(format!(
        "SELECT {CAREER_COLUMNS} FROM wp_posts p WHERE p.post_name = "
    ));
    qb.push_bind(slug);
    qb.push(" AND ");
    ContentKind::careers(types).push_predicate(&mut qb, "p");
    qb.push(" LIMIT 1");

    let Some(row) = qb.build().fetch_optional(pool).await? else {
        return Ok(None);
    };
    let id: u64 = row.get("id");
    let mut meta = post_meta(pool, id, &CAREER_META_KEYS).await?;

    Ok(Some(CareerDetail {
        id,
        slug: row.get("slug"),
        title: row.get("title"),
        excerpt: row.get("excerpt"),
        content: row.get("content"),
        date: row.get("date"),
        location: meta.remove("location"),
        employment_type: meta.remove("employment_type"),
        department: meta.remove("department"),
        closing_date: meta.remove("closing_date"),
        job_description: meta.remove("job_description"),
        responsibilities: meta.remove("responsibilities"),
        requirements: meta.remove("requirements"),
        qualifications: meta.remove("qualifications"),
        benefits: meta.remove("benefits"),
    }))
}

/// Older and newer postings around `slug`
pub async fn get_adjacent_careers(
    pool: &MySqlPool,
    types: &ContentTypes,
    slug: &str,
) -> Result<Adjacent> {
    adjacent(pool, ContentKind::careers(types), slug).await
}
