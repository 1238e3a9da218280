//! Database models
//!
//! Rows from the CMS tables mapped into typed values. Serialized meta arrays
//! are decoded before they reach these types.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::content::career_sections::CareerSections;

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
    pub parent_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub date: NaiveDateTime,
    pub post_type: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub thumbnail_url: Option<String>,
}

/// Image attachment (gallery entry or diagnostics sample)
#[derive(Debug, Clone, Serialize)]
pub struct ImageAttachment {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub url: String,
}

/// Taxonomy term with its published item count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyTerm {
    pub name: String,
    pub slug: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacentLink {
    pub slug: String,
    pub title: String,
}

/// Older and newer neighbours of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    pub previous: Option<AdjacentLink>,
    pub next: Option<AdjacentLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub thumbnail_url: Option<String>,
    /// Category names
    pub categories: Vec<String>,
    /// Service names from the service taxonomy
    pub services: Vec<String>,
}

/// Custom fields entered on a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectMeta {
    pub client: Option<String>,
    pub year: Option<String>,
    pub location: Option<String>,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub thumbnail_url: Option<String>,
    pub categories: Vec<String>,
    pub services: Vec<String>,
    pub meta: ProjectMeta,
    pub gallery: Vec<ImageAttachment>,
}

impl ProjectDetail {
    /// Taxonomy services followed by meta services, de-duplicated, blanks dropped
    pub fn all_services(&self) -> Vec<String> {
        let mut merged: Vec<String> = Vec::new();
        for service in self.services.iter().chain(self.meta.services.iter()) {
            let service = service.trim();
            if !service.is_empty() && !merged.iter().any(|s| s == service) {
                merged.push(service.to_string());
            }
        }
        merged
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsSummary {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub thumbnail_url: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsDetail {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub thumbnail_url: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub gallery: Vec<ImageAttachment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerSummary {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub closing_date: Option<String>,
}

/// Job posting with its explicitly entered fields
#[derive(Debug, Clone, Serialize)]
pub struct CareerDetail {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub department: Option<String>,
    pub closing_date: Option<String>,
    pub job_description: Option<String>,
    pub responsibilities: Option<String>,
    pub requirements: Option<String>,
    pub qualifications: Option<String>,
    pub benefits: Option<String>,
}

impl CareerDetail {
    /// Section fields entered directly on the posting
    pub fn explicit_sections(&self) -> CareerSections {
        CareerSections {
            description: self.job_description.clone(),
            responsibilities: self.responsibilities.clone(),
            requirements: self.requirements.clone(),
            qualifications: self.qualifications.clone(),
            benefits: self.benefits.clone(),
        }
    }
}

/// Hero slider slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroSlide {
    pub id: i64,
    pub order: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientLogo {
    pub name: String,
    pub url: String,
}
