//! Query building blocks shared by the content queries

use std::collections::HashMap;

use sqlx::mysql::{MySql, MySqlPool};
use sqlx::{QueryBuilder, Row};

use super::models::{Adjacent, AdjacentLink, ImageAttachment};
use crate::config::ContentTypes;
use crate::Result;

/// Listing filters taken from the query string
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Category term slug
    pub category: Option<String>,
    /// Service term slug (projects only)
    pub service: Option<String>,
    /// Free-text search over title and body
    pub search: Option<String>,
    pub limit: u32,
}

impl ListingFilter {
    pub(crate) fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    pub(crate) fn service(&self) -> Option<&str> {
        non_blank(self.service.as_deref())
    }

    pub(crate) fn search(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Which published items count as a given kind of content
#[derive(Debug, Clone, Copy)]
pub(crate) enum ContentKind<'a> {
    PostType(&'a str),
    /// Posts of any career type, or pages under the careers parent page
    Careers {
        post_types: &'a [String],
        parent_slug: &'a str,
    },
}

impl<'a> ContentKind<'a> {
    pub(crate) fn careers(types: &'a ContentTypes) -> Self {
        ContentKind::Careers {
            post_types: &types.career_post_types,
            parent_slug: &types.career_parent_slug,
        }
    }

    /// Push `(<kind predicate>) AND <alias>.post_status = 'publish'`
    pub(crate) fn push_predicate(&self, qb: &mut QueryBuilder<'a, MySql>, alias: &str) {
        qb.push("(");
        match *self {
            ContentKind::PostType(post_type) => {
                qb.push(format!("{alias}.post_type = "));
                qb.push_bind(post_type);
            }
            ContentKind::Careers {
                post_types,
                parent_slug,
            } => {
                if !post_types.is_empty() {
                    qb.push(format!("{alias}.post_type IN ("));
                    let mut separated = qb.separated(", ");
                    for post_type in post_types {
                        separated.push_bind(post_type.as_str());
                    }
                    separated.push_unseparated(") OR ");
                }
                qb.push(format!(
                    "({alias}.post_type = 'page' AND {alias}.post_parent IN \
                     (SELECT parent.ID FROM wp_posts parent \
                      WHERE parent.post_type = 'page' AND parent.post_name = "
                ));
                qb.push_bind(parent_slug);
                qb.push("))");
            }
        }
        qb.push(format!(") AND {alias}.post_status = 'publish'"));
    }
}

/// Columns selected for any post-like row, with the featured image URL
pub(crate) const POST_COLUMNS: &str = "p.ID AS id, p.post_name AS slug, p.post_title AS title, \
     p.post_excerpt AS excerpt, p.post_content AS content, p.post_date AS date, \
     thumb.guid AS thumbnail_url";

/// Joins resolving `_thumbnail_id` meta to the attachment row
pub(crate) const THUMBNAIL_JOIN: &str = " LEFT JOIN wp_postmeta thumb_meta \
       ON thumb_meta.post_id = p.ID AND thumb_meta.meta_key = '_thumbnail_id' \
     LEFT JOIN wp_posts thumb ON thumb.ID = thumb_meta.meta_value ";

/// `LIKE` pattern matching `term` anywhere, with wildcards in `term` escaped
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Term names per post for one taxonomy
pub(crate) async fn terms_for_posts(
    pool: &MySqlPool,
    post_ids: &[u64],
    taxonomy: &str,
) -> Result<HashMap<u64, Vec<String>>> {
    let mut by_post: HashMap<u64, Vec<String>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(by_post);
    }

    let mut qb = QueryBuilder::<MySql>::new(
        "SELECT tr.object_id AS post_id, t.name AS name \
         FROM wp_term_relationships tr \
         JOIN wp_term_taxonomy tt ON tt.term_taxonomy_id = tr.term_taxonomy_id \
         JOIN wp_terms t ON t.term_id = tt.term_id \
         WHERE tt.taxonomy = ",
    );
    qb.push_bind(taxonomy);
    qb.push(" AND tr.object_id IN (");
    let mut separated = qb.separated(", ");
    for id in post_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY t.name");

    let rows = qb.build().fetch_all(pool).await?;
    for row in rows {
        let post_id: u64 = row.get("post_id");
        let name: String = row.get("name");
        by_post.entry(post_id).or_default().push(name);
    }

    Ok(by_post)
}

/// Term names attached to a single post
pub(crate) async fn terms_for_post(
    pool: &MySqlPool,
    post_id: u64,
    taxonomy: &str,
) -> Result<Vec<String>> {
    let mut terms = terms_for_posts(pool, &[post_id], taxonomy).await?;
    Ok(terms.remove(&post_id).unwrap_or_default())
}

/// Selected meta values of a post, keyed by meta key
///
/// Blank values are left out so callers can treat absence uniformly.
pub(crate) async fn post_meta(
    pool: &MySqlPool,
    post_id: u64,
    keys: &[&str],
) -> Result<HashMap<String, String>> {
    let mut qb = QueryBuilder::<MySql>::new(
        "SELECT meta_key, meta_value FROM wp_postmeta WHERE post_id = ",
    );
    qb.push_bind(post_id);
    qb.push(" AND meta_key IN (");
    let mut separated = qb.separated(", ");
    for key in keys {
        separated.push_bind(*key);
    }
    separated.push_unseparated(") ORDER BY meta_id");

    let rows = qb.build().fetch_all(pool).await?;
    let mut meta = HashMap::new();
    for row in rows {
        let key: String = row.get("meta_key");
        let value: Option<String> = row.get("meta_value");
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            meta.insert(key, value);
        }
    }

    Ok(meta)
}

/// Image attachments of an item, in gallery order
pub(crate) async fn gallery(pool: &MySqlPool, parent_id: u64) -> Result<Vec<ImageAttachment>> {
    let rows = sqlx::query(
        r#"
        SELECT ID AS id, post_title AS title, post_name AS slug, guid AS url
        FROM wp_posts
        WHERE post_type = 'attachment'
          AND post_parent = ?
          AND post_mime_type LIKE 'image/%'
        ORDER BY menu_order, ID
        "#,
    )
    .bind(parent_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ImageAttachment {
            id: row.get("id"),
            title: row.get("title"),
            slug: row.get("slug"),
            url: row.get("url"),
        })
        .collect())
}

/// Older and newer neighbours of the item with `slug`, by publish date
///
/// Items sharing a publish date are ordered by ID.
pub(crate) async fn adjacent(
    pool: &MySqlPool,
    kind: ContentKind<'_>,
    slug: &str,
) -> Result<Adjacent> {
    let mut qb = QueryBuilder::<MySql>::new(
        "SELECT p.ID AS id, p.post_date AS date FROM wp_posts p WHERE p.post_name = ",
    );
    qb.push_bind(slug);
    qb.push(" AND ");
    kind.push_predicate(&mut qb, "p");
    qb.push(" LIMIT 1");

    let Some(current) = qb.build().fetch_optional(pool).await? else {
        return Ok(Adjacent::default());
    };
    let id: u64 = current.get("id");
    let date: chrono::NaiveDateTime = current.get("date");

    let previous = neighbour(pool, kind, id, date, Direction::Older).await?;
    let next = neighbour(pool, kind, id, date, Direction::Newer).await?;

    Ok(Adjacent { previous, next })
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Older,
    Newer,
}

async fn neighbour(
    pool: &MySqlPool,
    kind: ContentKind<'_>,
    id: u64,
    date: chrono::NaiveDateTime,
    direction: Direction,
) -> Result<Option<AdjacentLink>> {
    let (cmp, order) = match direction {
        Direction::Older => ("<", "DESC"),
        Direction::Newer => (">", "ASC"),
    };

    let mut qb = QueryBuilder::<MySql>::new(
        "SELECT p.post_name AS slug, p.post_title AS title FROM wp_posts p WHERE ",
    );
    kind.push_predicate(&mut qb, "p");
    qb.push(format!(" AND (p.post_date {cmp} "));
    qb.push_bind(date);
    qb.push(" OR (p.post_date = ");
    qb.push_bind(date);
    qb.push(format!(" AND p.ID {cmp} "));
    qb.push_bind(id);
    qb.push(format!(")) ORDER BY p.post_date {order}, p.ID {order} LIMIT 1"));

    let row = qb.build().fetch_optional(pool).await?;
    Ok(row.map(|row| AdjacentLink {
        slug: row.get("slug"),
        title: row.get("title"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("resort"), "%resort%");
        assert_eq!(like_pattern("100%_done"), r"%100\%\_done%");
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn test_listing_filter_ignores_blank_values() {
        let filter = ListingFilter {
            category: Some("  ".into()),
            service: Some(" hospitality ".into()),
            search: None,
            limit: 24,
        };
        assert_eq!(filter.category(), None);
        assert_eq!(filter.service(), Some("hospitality"));
        assert_eq!(filter.search(), None);
    }

    #[test]
    fn test_career_predicate_sql() {
        let types = ContentTypes::default();
        let mut qb = QueryBuilder::<MySql>::new("SELECT 1 FROM wp_posts p WHERE ");
        ContentKind::careers(&types).push_predicate(&mut qb, "p");

        let sql = qb.sql();
        assert!(sql.contains("p.post_type IN (?, ?) OR "));
        assert!(sql.contains("parent.post_name = ?"));
        assert!(sql.ends_with("AND p.post_status = 'publish'"));
    }

    #[test]
    fn test_post_type_predicate_sql() {
        let mut qb = QueryBuilder::<MySql>::new("WHERE ");
        ContentKind::PostType("project").push_predicate(&mut qb, "x");
        assert_eq!(
            qb.sql(),
            "WHERE (x.post_type = ?) AND x.post_status = 'publish'"
        );
    }
}
