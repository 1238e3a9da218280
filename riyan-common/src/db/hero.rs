//! Hero slider rows

use sqlx::{MySqlPool, Row};
use tracing::debug;

use super::models::HeroSlide;
use crate::content::hero::parse_slide;
use crate::Result;

/// Usable slides of the slider with `alias`, in slide order
///
/// An unknown alias yields no slides.
pub async fn get_hero_slides(pool: &MySqlPool, alias: &str) -> Result<Vec<HeroSlide>> {
    let slider_id: Option<i64> = sqlx::query_scalar(
        "SELECT CAST(id AS SIGNED) FROM wp_revslider_sliders WHERE alias = ? LIMIT 1",
    )
    .bind(alias)
    .fetch_optional(pool)
    .await?;

    let Some(slider_id) = slider_id else {
        debug!(alias, "No slider with this alias");
        return Ok(Vec::new());
    };

    let rows = sqlx::query(
        r#"
        SELECT CAST(id AS SIGNED) AS id,
               CAST(slide_order AS SIGNED) AS slide_order,
               params,
               layers
        FROM wp_revslider_slides
        WHERE slider_id = ?
        ORDER BY slide_order
        "#,
    )
    .bind(slider_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let id: i64 = row.get("id");
            let order: Option<i64> = row.get("slide_order");
            let params: Option<String> = row.get("params");
            let layers: Option<String> = row.get("layers");
            parse_slide(id, order.unwrap_or(0), params.as_deref(), layers.as_deref())
        })
        .collect())
}
