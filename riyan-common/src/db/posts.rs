//! Generic posts, pages and attachments

use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use super::models::{ImageAttachment, Page, Post};
use crate::Result;

fn post_from_row(row: &MySqlRow) -> Post {
    Post {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        content: row.get("content"),
        excerpt: row.get("excerpt"),
        date: row.get("date"),
        post_type: row.get("post_type"),
        status: row.get("status"),
    }
}

/// Latest published posts of `post_type`
pub async fn get_posts(pool: &MySqlPool, post_type: &str, limit: u32) -> Result<Vec<Post>> {
    let rows = sqlx::query(
        r#"
        SELECT ID AS id, post_title AS title, post_name AS slug, post_content AS content,
               post_excerpt AS excerpt, post_date AS date, post_type, post_status AS status
        FROM wp_posts
        WHERE post_type = ?
          AND post_status = 'publish'
        ORDER BY post_date DESC
        LIMIT ?
        "#,
    )
    .bind(post_type)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(post_from_row).collect())
}

/// Published item of any type with this slug
pub async fn get_post_by_slug(pool: &MySqlPool, slug: &str) -> Result<Option<Post>> {
    let row = sqlx::query(
        r#"
        SELECT ID AS id, post_title AS title, post_name AS slug, post_content AS content,
               post_excerpt AS excerpt, post_date AS date, post_type, post_status AS status
        FROM wp_posts
        WHERE post_name = ?
          AND post_status = 'publish'
        LIMIT 1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(post_from_row))
}

/// Published page with this slug, with its featured image
pub async fn get_page_by_slug(pool: &MySqlPool, slug: &str) -> Result<Option<Page>> {
    let row = sqlx::query(
        r#"
        SELECT p.ID AS id, p.post_title AS title, p.post_name AS slug,
               p.post_content AS content, p.post_excerpt AS excerpt,
               thumb.guid AS thumbnail_url
        FROM wp_posts p
        LEFT JOIN wp_postmeta thumb_meta
               ON thumb_meta.post_id = p.ID AND thumb_meta.meta_key = '_thumbnail_id'
        LEFT JOIN wp_posts thumb ON thumb.ID = thumb_meta.meta_value
        WHERE p.post_name = ?
          AND p.post_type = 'page'
          AND p.post_status = 'publish'
        LIMIT 1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Page {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        content: row.get("content"),
        excerpt: row.get("excerpt"),
        thumbnail_url: row.get("thumbnail_url"),
    }))
}

/// Random sample of image attachments
pub async fn get_random_images(pool: &MySqlPool, limit: u32) -> Result<Vec<ImageAttachment>> {
    let rows = sqlx::query(
        r#"
        SELECT ID AS id, post_title AS title, post_name AS slug, guid AS url
        FROM wp_posts
        WHERE post_type = 'attachment'
          AND post_mime_type LIKE 'image/%'
          AND guid IS NOT NULL
          AND guid != ''
        ORDER BY RAND()
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let title: String = row.get("title");
            ImageAttachment {
                id: row.get("id"),
                title: if title.trim().is_empty() {
                    "Untitled Image".to_string()
                } else {
                    title
                },
                slug: row.get("slug"),
                url: row.get("url"),
            }
        })
        .collect())
}
