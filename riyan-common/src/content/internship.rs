//! Internship page parser
//!
//! The internships page is a single CMS page. Its title, lead paragraph and
//! the "key details" and "criteria" lists are pulled out so the page can lay
//! them out as cards; anything missing falls back to fixed copy.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::text::strip_html;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:h2|h3|strong)[^>]*>(.*?(?:Riyan|Internship|Program).*?)</(?:h2|h3|strong)>")
        .unwrap()
});
static PARAGRAPH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<p[^>]*>(.*?)</p>").unwrap());
static KEY_DETAILS_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:h3|h4|strong)[^>]*>.*?(?:Key Details|Details|Requirements).*?</(?:h3|h4|strong)>")
        .unwrap()
});
static CRITERIA_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:h3|h4|strong)[^>]*>.*?(?:Criteria|Eligibility|Qualifications).*?</(?:h3|h4|strong)>")
        .unwrap()
});
static NEXT_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<(?:h3|h4|strong)").unwrap());
static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li[^>]*>.*?</li>").unwrap());

/// Pieces of the internships page body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InternshipContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub key_details: Vec<String>,
    pub criteria: Vec<String>,
}

pub fn parse_internship_content(html: &str) -> InternshipContent {
    let title = TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_html(m.as_str()));

    let description = PARAGRAPH_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_html(m.as_str()));

    InternshipContent {
        title,
        description,
        key_details: list_after_heading(html, &KEY_DETAILS_HEADING_RE),
        criteria: list_after_heading(html, &CRITERIA_HEADING_RE),
    }
}

/// Plain-text list items between a matching heading and the next heading
fn list_after_heading(html: &str, heading: &Regex) -> Vec<String> {
    let Some(found) = heading.find(html) else {
        return Vec::new();
    };

    let rest = &html[found.end()..];
    let block = match NEXT_HEADING_RE.find(rest) {
        Some(next) => &rest[..next.start()],
        None => rest,
    };

    LIST_ITEM_RE
        .find_iter(block)
        .map(|item| strip_html(item.as_str()))
        .collect()
}
