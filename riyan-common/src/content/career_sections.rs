//! Career posting section splitter
//!
//! Job postings arrive as a single rich-text body. Headings (`<h2>`) inside
//! that body are classified by keyword into description, responsibilities,
//! requirements, qualifications and benefits; the markup under each heading
//! is kept as-is. Sections that cannot be identified stay absent.
//!
//! Parsing never fails: unrecognized headings and headings without a closing
//! tag are skipped, and a body without any `<h2>` yields no sections at all,
//! which tells the page to render the raw body instead.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::text::{sanitize_content, strip_html};

static H2_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h2[^>]*>").unwrap());
static H2_CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</h2>").unwrap());
static H2_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h2").unwrap());
static LEAD_PARAGRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap());
static LIST_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<li[^>]*>.*?</li>").unwrap());

// A list item ending in "<sentence>. Salary and Benefits" carries the last
// responsibility and opens the benefits list that follows it.
static BENEFITS_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.\s+Salary\s+and\s+Benefits\s*</li>").unwrap());
static MARKER_RESPONSIBILITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)\.\s+Salary\s+and\s+Benefits").unwrap());

/// Minimum plain-text length for a lead paragraph to count as the description
const LEAD_MIN_CHARS: usize = 20;

/// Named subsection of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Description,
    Responsibilities,
    Requirements,
    Qualifications,
    Benefits,
}

impl Section {
    /// Display order on the career detail page
    pub const ALL: [Section; 5] = [
        Section::Description,
        Section::Responsibilities,
        Section::Requirements,
        Section::Qualifications,
        Section::Benefits,
    ];

    /// Stable key, also the post-meta key holding an explicit value
    pub fn key(self) -> &'static str {
        match self {
            Section::Description => "description",
            Section::Responsibilities => "responsibilities",
            Section::Requirements => "requirements",
            Section::Qualifications => "qualifications",
            Section::Benefits => "benefits",
        }
    }

    /// Heading shown above the section
    pub fn heading(self) -> &'static str {
        match self {
            Section::Description => "Job Description",
            Section::Responsibilities => "Responsibilities",
            Section::Requirements => "Requirements",
            Section::Qualifications => "Qualifications",
            Section::Benefits => "Benefits",
        }
    }
}

/// HTML fragments per identified section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CareerSections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
}

impl CareerSections {
    fn slot(&self, section: Section) -> &Option<String> {
        match section {
            Section::Description => &self.description,
            Section::Responsibilities => &self.responsibilities,
            Section::Requirements => &self.requirements,
            Section::Qualifications => &self.qualifications,
            Section::Benefits => &self.benefits,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut Option<String> {
        match section {
            Section::Description => &mut self.description,
            Section::Responsibilities => &mut self.responsibilities,
            Section::Requirements => &mut self.requirements,
            Section::Qualifications => &mut self.qualifications,
            Section::Benefits => &mut self.benefits,
        }
    }

    pub fn get(&self, section: Section) -> Option<&str> {
        self.slot(section).as_deref()
    }

    /// Append markup to a section, creating it when absent
    pub fn append(&mut self, section: Section, html: &str) {
        self.slot_mut(section)
            .get_or_insert_with(String::new)
            .push_str(html);
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.slot(*s).is_none())
    }

    /// Present sections in display order
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        Section::ALL
            .into_iter()
            .filter_map(move |s| self.get(s).map(|html| (s, html)))
    }

    /// Overlay explicitly entered fields on top of parsed ones
    ///
    /// A non-blank explicit value replaces the parsed value for that section.
    pub fn with_explicit(mut self, explicit: &CareerSections) -> CareerSections {
        for section in Section::ALL {
            if let Some(value) = explicit.get(section) {
                if !value.trim().is_empty() {
                    *self.slot_mut(section) = Some(value.to_string());
                }
            }
        }
        self
    }
}

/// Classify a normalized (lower-cased, tag-stripped) heading
pub fn classify_heading(heading: &str) -> Option<Section> {
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| heading.contains(k));

    if has_any(&["qualification", "requirement", "skill", "education"]) {
        return Some(if heading.contains("qualification") {
            Section::Qualifications
        } else {
            Section::Requirements
        });
    }
    if has_any(&["responsibilit", "duties"]) {
        return Some(Section::Responsibilities);
    }
    if has_any(&["benefit", "salary", "compensation", "perks"]) {
        return Some(Section::Benefits);
    }
    if has_any(&["description", "about the role", "job summary", "overview"]) {
        return Some(Section::Description);
    }
    if has_any(&["must have", "required", "essential"]) {
        return Some(Section::Requirements);
    }
    None
}

/// Split a job posting body into sections
pub fn parse_career_sections(html: &str) -> CareerSections {
    let mut sections = CareerSections::default();
    if html.trim().is_empty() {
        return sections;
    }

    let parts: Vec<&str> = H2_OPEN_RE.split(html).collect();
    if parts.len() < 2 {
        return sections;
    }

    if let Some(lead) = lead_description(parts[0]) {
        sections.description = Some(lead);
    }

    for part in &parts[1..] {
        let Some(close) = H2_CLOSE_RE.find(part) else {
            continue;
        };

        let heading = strip_html(&part[..close.start()]).to_lowercase();
        let body = &part[close.end()..];
        let body = match H2_START_RE.find(body) {
            Some(m) => &body[..m.start()],
            None => body,
        };
        let content = body.trim();
        if content.is_empty() {
            continue;
        }

        match classify_heading(&heading) {
            Some(Section::Responsibilities) => append_responsibilities(&mut sections, content),
            Some(section) => sections.append(section, content),
            None => debug!(heading = %heading, "Skipping unrecognized career heading"),
        }
    }

    sections
}

/// First paragraph before the first heading, when it is long enough
fn lead_description(preamble: &str) -> Option<String> {
    let cleaned = sanitize_content(preamble);
    let caps = LEAD_PARAGRAPH_RE.captures(&cleaned)?;
    let inner = caps.get(1)?.as_str();
    if strip_html(inner).chars().count() > LEAD_MIN_CHARS {
        Some(format!("<p>{}</p>", inner))
    } else {
        None
    }
}

/// Responsibilities, peeling off benefits that were typed into the same list
fn append_responsibilities(sections: &mut CareerSections, content: &str) {
    let marker_item = LIST_ITEM_RE
        .find_iter(content)
        .find(|item| BENEFITS_MARKER_RE.is_match(item.as_str()));

    let Some(item) = marker_item else {
        sections.append(Section::Responsibilities, content);
        return;
    };

    let before = &content[..item.start()];
    let after = &content[item.end()..];

    let last_responsibility = MARKER_RESPONSIBILITY_RE
        .captures(item.as_str())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|text| !text.trim().is_empty())
        .map(|text| format!("<li>{}.</li>\n", text))
        .unwrap_or_default();

    sections.append(
        Section::Responsibilities,
        &format!("{}{}</ul>", before, last_responsibility),
    );

    if !after.trim().is_empty() {
        sections.append(Section::Benefits, &format!("<ul>{}", after));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headings_yields_empty_mapping() {
        let html = "<p>We are hiring a senior architect to lead resort projects.</p><ul><li>Design</li></ul>";
        let sections = parse_career_sections(html);
        assert!(sections.is_empty());
        assert_eq!(sections.iter().count(), 0);
    }

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        assert!(parse_career_sections("").is_empty());
        assert!(parse_career_sections("   \n").is_empty());
    }

    #[test]
    fn test_responsibilities_without_marker() {
        let html = "<h2>Main Responsibilities</h2><ul><li>Manage sites.</li><li>Report weekly.</li></ul>";
        let sections = parse_career_sections(html);

        assert_eq!(
            sections.get(Section::Responsibilities),
            Some("<ul><li>Manage sites.</li><li>Report weekly.</li></ul>")
        );
        assert_eq!(sections.get(Section::Benefits), None);
    }

    #[test]
    fn test_benefits_marker_splits_list() {
        let html = "<h2>Responsibilities</h2><ul><li>Manage sites.</li><li>Assist the Director. Salary and Benefits</li><li>Health insurance</li></ul>";
        let sections = parse_career_sections(html);

        let responsibilities = sections.get(Section::Responsibilities).unwrap();
        assert!(responsibilities.contains("Manage sites."));
        assert!(responsibilities.contains("<li>Assist the Director.</li>"));
        assert!(!responsibilities.contains("Salary and Benefits"));
        assert!(!responsibilities.contains("Health insurance"));
        assert!(responsibilities.ends_with("</ul>"));

        let benefits = sections.get(Section::Benefits).unwrap();
        assert_eq!(benefits, "<ul><li>Health insurance</li></ul>");
    }

    #[test]
    fn test_marker_in_real_posting_shape() {
        let html = "<h2>Main Responsibilities</h2>\n<ul>\n\
            <li>Prime or secondary point of contact for the Client.</li>\n\
            <li>Any other related responsibility as requested by the Managing Director. Salary and Benefits</li>\n\
            <li>Competitive Salary based on qualifications and experience</li>\n\
            <li>Health Insurance</li>\n</ul>\n<h2>How to Apply</h2><p>Send your CV.</p>";
        let sections = parse_career_sections(html);

        let responsibilities = sections.get(Section::Responsibilities).unwrap();
        assert!(responsibilities.contains("Prime or secondary point of contact"));
        assert!(responsibilities
            .contains("<li>Any other related responsibility as requested by the Managing Director.</li>"));

        let benefits = sections.get(Section::Benefits).unwrap();
        assert!(benefits.starts_with("<ul>"));
        assert!(benefits.contains("Competitive Salary"));
        assert!(benefits.contains("Health Insurance"));
        // "How to Apply" is not a section
        assert!(!benefits.contains("Send your CV"));
    }

    #[test]
    fn test_marker_needs_sentence_end() {
        let html = "<h2>Duties</h2><ul><li>Review drawings Salary and Benefits</li><li>Health insurance</li></ul>";
        let sections = parse_career_sections(html);

        let responsibilities = sections.get(Section::Responsibilities).unwrap();
        assert!(responsibilities.contains("Health insurance"));
        assert_eq!(sections.get(Section::Benefits), None);
    }

    #[test]
    fn test_qualifications_heading_is_not_requirements() {
        let html = "<h2>Qualifications, Skills and Experience</h2><ul><li>Degree in Civil Engineering</li></ul>";
        let sections = parse_career_sections(html);

        assert_eq!(
            sections.get(Section::Qualifications),
            Some("<ul><li>Degree in Civil Engineering</li></ul>")
        );
        assert_eq!(sections.get(Section::Requirements), None);
    }

    #[test]
    fn test_repeated_headings_concatenate_in_order() {
        let html = "<h2>Requirements</h2><ul><li>First</li></ul>\
                    <h2>Benefits</h2><p>Insurance</p>\
                    <h2>Essential Skills</h2><ul><li>Second</li></ul>";
        let sections = parse_career_sections(html);

        assert_eq!(
            sections.get(Section::Requirements),
            Some("<ul><li>First</li></ul><ul><li>Second</li></ul>")
        );
        assert_eq!(sections.get(Section::Benefits), Some("<p>Insurance</p>"));
    }

    #[test]
    fn test_unknown_and_empty_headings_skipped() {
        let html = "<h2>Deadline</h2><p>30 June</p><h2>Benefits</h2>   <h2 class=\"x\">No. of vacancies</h2><p>2</p>";
        let sections = parse_career_sections(html);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_unclosed_heading_skipped() {
        let html = "<h2>Benefits<p>Insurance</p>";
        assert!(parse_career_sections(html).is_empty());
    }

    #[test]
    fn test_lead_paragraph_becomes_description() {
        let html = "<style>.x{}</style><p>Riyan is looking for an experienced Quantity Surveyor.</p>\
                    <h2>Job Overview</h2><p>Site based role.</p>";
        let sections = parse_career_sections(html);

        assert_eq!(
            sections.get(Section::Description),
            Some("<p>Riyan is looking for an experienced Quantity Surveyor.</p><p>Site based role.</p>")
        );
    }

    #[test]
    fn test_short_lead_paragraph_ignored() {
        let html = "<p>Apply now</p><h2>Benefits</h2><p>Insurance</p>";
        let sections = parse_career_sections(html);
        assert_eq!(sections.get(Section::Description), None);
        assert_eq!(sections.get(Section::Benefits), Some("<p>Insurance</p>"));
    }

    #[test]
    fn test_heading_markup_and_case_normalized() {
        assert_eq!(classify_heading("key duties"), Some(Section::Responsibilities));
        assert_eq!(classify_heading("education"), Some(Section::Requirements));
        assert_eq!(classify_heading("salary & perks"), Some(Section::Benefits));
        assert_eq!(classify_heading("about the role"), Some(Section::Description));
        assert_eq!(classify_heading("must have"), Some(Section::Requirements));
        assert_eq!(classify_heading("how to apply"), None);

        let html = "<H2 style=\"color:red\"><strong>BENEFITS</strong></H2><p>Leave</p>";
        assert_eq!(
            parse_career_sections(html).get(Section::Benefits),
            Some("<p>Leave</p>")
        );
    }

    #[test]
    fn test_explicit_fields_take_precedence() {
        let parsed = parse_career_sections(
            "<h2>Responsibilities</h2><ul><li>Parsed</li></ul><h2>Benefits</h2><p>Parsed benefits</p>",
        );
        let explicit = CareerSections {
            responsibilities: Some("<p>From meta</p>".to_string()),
            benefits: Some("   ".to_string()),
            ..Default::default()
        };

        let merged = parsed.with_explicit(&explicit);
        assert_eq!(merged.get(Section::Responsibilities), Some("<p>From meta</p>"));
        assert_eq!(merged.get(Section::Benefits), Some("<p>Parsed benefits</p>"));
    }

    #[test]
    fn test_iter_follows_display_order() {
        let sections = parse_career_sections(
            "<h2>Benefits</h2><p>b</p><h2>Qualifications</h2><p>q</p><h2>Duties</h2><p>r</p>",
        );
        let order: Vec<Section> = sections.iter().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![Section::Responsibilities, Section::Qualifications, Section::Benefits]
        );
    }
}
