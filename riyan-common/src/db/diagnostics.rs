//! Diagnostic reports over the content database

use serde::Serialize;
use sqlx::mysql::MySql;
use sqlx::{MySqlPool, QueryBuilder, Row};

use super::helpers::ContentKind;
use crate::config::ContentTypes;
use crate::content::career_sections::{parse_career_sections, CareerSections};
use crate::Result;

/// Meta keys that would hold job fields if entered explicitly
const JOB_META_KEYS: [&str; 8] = [
    "responsibilities",
    "requirements",
    "qualifications",
    "benefits",
    "job_description",
    "description",
    "duties",
    "skills",
];

const CONTENT_PREVIEW_CHARS: usize = 500;
const META_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct CareerPostPreview {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub content_preview: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaPreview {
    pub key: String,
    pub value_preview: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaField {
    pub meta_key: String,
    pub meta_value: Option<String>,
}

/// Where the first career posting keeps its job fields
#[derive(Debug, Clone, Serialize)]
pub struct CareerFieldReport {
    pub post: CareerPostPreview,
    pub all_meta_fields: Vec<MetaPreview>,
    pub job_specific_meta: Option<Vec<MetaField>>,
    /// Sections the splitter finds in the body
    pub parsed_sections: CareerSections,
    pub message: String,
}

/// Char-safe prefix without an ellipsis
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Report on the first career posting, or `None` when there are none
pub async fn career_field_report(
    pool: &MySqlPool,
    types: &ContentTypes,
) -> Result<Option<CareerFieldReport>> {
    let mut qb = QueryBuilder::<MySql>::new(
        "SELECT p.ID AS id, p.post_title AS title, p.post_name AS slug, p.post_content AS content \
         FROM wp_posts p WHERE ",
    );
    ContentKind::careers(types).push_predicate(&mut qb, "p");
    qb.push(" LIMIT 1");

    let Some(row) = qb.build().fetch_optional(pool).await? else {
        return Ok(None);
    };

    let id: u64 = row.get("id");
    let content: String = row.get("content");

    let meta_rows = sqlx::query(
        r#"
        SELECT meta_key, meta_value
        FROM wp_postmeta
        WHERE post_id = ?
          AND meta_key NOT LIKE '\_%'
        ORDER BY meta_key
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let all_meta_fields = meta_rows
        .iter()
        .map(|m| {
            let value: Option<String> = m.get("meta_value");
            MetaPreview {
                key: m.get("meta_key"),
                value_preview: preview(value.as_deref().unwrap_or_default(), META_PREVIEW_CHARS),
            }
        })
        .collect();

    let mut job_qb = QueryBuilder::<MySql>::new(
        "SELECT meta_key, meta_value FROM wp_postmeta WHERE post_id = ",
    );
    job_qb.push_bind(id);
    job_qb.push(" AND meta_key IN (");
    let mut separated = job_qb.separated(", ");
    for key in JOB_META_KEYS {
        separated.push_bind(key);
    }
    separated.push_unseparated(") ORDER BY meta_key");

    let job_meta: Vec<MetaField> = job_qb
        .build()
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|m| MetaField {
            meta_key: m.get("meta_key"),
            meta_value: m.get("meta_value"),
        })
        .collect();

    let message = if job_meta.is_empty() {
        "No job-specific meta fields found - data is likely in post_content HTML"
    } else {
        "Found job-specific meta fields!"
    };

    Ok(Some(CareerFieldReport {
        post: CareerPostPreview {
            id,
            title: row.get("title"),
            slug: row.get("slug"),
            content_preview: preview(&content, CONTENT_PREVIEW_CHARS),
        },
        all_meta_fields,
        job_specific_meta: (!job_meta.is_empty()).then_some(job_meta),
        parsed_sections: parse_career_sections(&content),
        message: message.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_char_safe() {
        assert_eq!(preview("Malé office", 4), "Malé");
        assert_eq!(preview("ab", 10), "ab");
    }
}
