//! Text helpers shared by the parsers and page rendering

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

/// Length of the plain-text summary shown on listing cards
pub const SUMMARY_CHARS: usize = 140;

/// Remove tags, collapse whitespace runs to a single space, and trim
pub fn strip_html(input: &str) -> String {
    let without_tags = TAG_RE.replace_all(input, "");
    WHITESPACE_RE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Drop `<style>` and `<script>` blocks from CMS markup
pub fn sanitize_content(input: &str) -> String {
    let without_styles = STYLE_RE.replace_all(input, "");
    SCRIPT_RE.replace_all(&without_styles, "").into_owned()
}

/// Cut to at most `max_chars` characters, appending an ellipsis when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Plain-text card summary: the excerpt when present, else the start of the body
pub fn summary(excerpt: &str, content: &str, max_chars: usize) -> String {
    if !excerpt.trim().is_empty() {
        return strip_html(&sanitize_content(excerpt));
    }
    strip_html(&sanitize_content(content))
        .chars()
        .take(max_chars)
        .collect()
}

/// Render a CMS date as e.g. "Mar 5, 2024"
///
/// Blank or missing input yields `fallback`; values that do not parse are
/// shown verbatim.
pub fn format_date(value: Option<&str>, fallback: &str) -> String {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return fallback.to_string(),
    };

    match parse_date(raw) {
        Some(date) => format_naive_date(date),
        None => raw.to_string(),
    }
}

/// Format a calendar date as "Mon D, YYYY"
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    // Date-picker fields store Ymd without separators
    ["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Escape text for interpolation into HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
