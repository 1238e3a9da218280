//! Database diagnostic endpoints
//!
//! These keep the response shapes the site's maintainers already script
//! against, so failures are reported in each endpoint's own JSON form rather
//! than the generic [`ApiError`](crate::error::ApiError) body.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use riyan_common::db::{
    diagnostics::career_field_report,
    menu::get_menu_items,
    posts::{get_posts, get_random_images},
    ImageAttachment,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

const TEST_DB_PAGE_COUNT: u32 = 5;
const DEFAULT_IMAGE_SAMPLE: u32 = 20;
const MAX_IMAGE_SAMPLE: u32 = 100;

/// GET /api/check-career-fields
///
/// Shows where the first career posting keeps its job fields.
pub async fn check_career_fields(State(state): State<AppState>) -> Response {
    match career_field_report(&state.db, &state.config.content).await {
        Ok(Some(report)) => Json(report).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No career posts found" })),
        )
            .into_response(),
        Err(e) => {
            error!("Career field check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string(), "details": "Database query failed" })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Serialize)]
struct PagePreview {
    id: u64,
    title: String,
    excerpt: String,
}

/// GET /api/test-db
///
/// Menu items and the first pages, to confirm the connection works.
pub async fn test_db(State(state): State<AppState>) -> Response {
    let result = tokio::try_join!(
        get_menu_items(&state.db),
        get_posts(&state.db, "page", TEST_DB_PAGE_COUNT),
    );

    match result {
        Ok((menu_items, pages)) => {
            let posts: Vec<PagePreview> = pages
                .into_iter()
                .map(|p| PagePreview {
                    id: p.id,
                    title: p.title,
                    excerpt: p.excerpt,
                })
                .collect();
            Json(json!({
                "success": true,
                "menuItems": menu_items,
                "posts": posts,
            }))
            .into_response()
        }
        Err(e) => {
            error!("Database check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageSampleQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ImageSample {
    pub count: usize,
    pub images: Vec<ImageAttachment>,
}

fn sample_size(requested: Option<u32>) -> ApiResult<u32> {
    match requested {
        None => Ok(DEFAULT_IMAGE_SAMPLE),
        Some(n) if (1..=MAX_IMAGE_SAMPLE).contains(&n) => Ok(n),
        Some(n) => Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {MAX_IMAGE_SAMPLE}, got {n}"
        ))),
    }
}

/// GET /api/test-images
///
/// Random image attachments, to check that upload URLs resolve.
pub async fn test_images(
    State(state): State<AppState>,
    Query(query): Query<ImageSampleQuery>,
) -> ApiResult<Json<ImageSample>> {
    let limit = sample_size(query.limit)?;
    let images = get_random_images(&state.db, limit).await?;
    Ok(Json(ImageSample {
        count: images.len(),
        images,
    }))
}
