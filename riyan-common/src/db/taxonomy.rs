//! Taxonomy terms used by the listing filters

use sqlx::{MySqlPool, Row};

use super::models::TaxonomyTerm;
use crate::Result;

/// Terms of `taxonomy` that have at least one published item, by name
pub async fn get_terms(pool: &MySqlPool, taxonomy: &str) -> Result<Vec<TaxonomyTerm>> {
    let rows = sqlx::query(
        r#"
        SELECT t.name AS name, t.slug AS slug, CAST(tt.count AS SIGNED) AS count
        FROM wp_terms t
        JOIN wp_term_taxonomy tt ON tt.term_id = t.term_id
        WHERE tt.taxonomy = ?
          AND tt.count > 0
        ORDER BY t.name
        "#,
    )
    .bind(taxonomy)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| TaxonomyTerm {
            name: row.get("name"),
            slug: row.get("slug"),
            count: row.get("count"),
        })
        .collect())
}
