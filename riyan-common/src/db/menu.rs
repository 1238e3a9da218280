//! Navigation menu items

use sqlx::{MySqlPool, Row};

use super::models::MenuItem;
use crate::Result;

/// Published nav menu items in menu order
///
/// URL and parent are stored as post meta and pivoted into columns.
pub async fn get_menu_items(pool: &MySqlPool) -> Result<Vec<MenuItem>> {
    let rows = sqlx::query(
        r#"
        SELECT
            p.ID AS id,
            p.post_title AS title,
            MAX(CASE WHEN pm.meta_key = '_menu_item_url' THEN pm.meta_value END) AS url,
            MAX(CASE WHEN pm.meta_key = '_menu_item_menu_item_parent' THEN pm.meta_value END) AS parent_id
        FROM wp_posts p
        LEFT JOIN wp_postmeta pm ON p.ID = pm.post_id
        WHERE p.post_type = 'nav_menu_item'
          AND p.post_status = 'publish'
        GROUP BY p.ID, p.post_title, p.menu_order
        ORDER BY p.menu_order
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let parent: Option<String> = row.get("parent_id");
            MenuItem {
                id: row.get("id"),
                title: row.get("title"),
                url: row.get("url"),
                parent_id: parse_parent_id(parent.as_deref()),
            }
        })
        .collect())
}

/// Top-level items store parent "0"
fn parse_parent_id(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parent_id() {
        assert_eq!(parse_parent_id(Some("42")), Some(42));
        assert_eq!(parse_parent_id(Some("0")), None);
        assert_eq!(parse_parent_id(Some("")), None);
        assert_eq!(parse_parent_id(None), None);
    }
}
