//! Client logo attachments

use sqlx::{MySqlPool, Row};

use super::helpers::like_pattern;
use super::models::ClientLogo;
use crate::Result;

/// Image attachments whose URL contains `fragment`, ordered by title
pub async fn get_client_logos(pool: &MySqlPool, fragment: &str) -> Result<Vec<ClientLogo>> {
    let rows = sqlx::query(
        r#"
        SELECT post_title AS name, guid AS url
        FROM wp_posts
        WHERE post_type = 'attachment'
          AND post_mime_type LIKE 'image/%'
          AND guid LIKE ?
        ORDER BY post_title, ID
        "#,
    )
    .bind(like_pattern(fragment))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ClientLogo {
            name: row.get("name"),
            url: row.get("url"),
        })
        .collect())
}
