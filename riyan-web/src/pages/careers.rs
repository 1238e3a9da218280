//! Career listing, job posting and internship pages

use axum::{
    extract::{Path, State},
    response::Html,
};
use riyan_common::content::text::{format_date, format_naive_date, strip_html, summary, SUMMARY_CHARS};
use riyan_common::content::{parse_career_sections, parse_internship_content, CareerSections};
use riyan_common::db::{
    careers::{get_adjacent_careers, get_career_by_slug, get_career_posts},
    CareerDetail, CareerSummary,
};
use tracing::debug;

use super::firm::firm_page;
use super::firm_links;
use crate::error::{PageError, PageResult};
use crate::render::layout::{self, cms_html, text};
use crate::render::listing::render_adjacent;
use crate::render::share::{render_share_links, share_url};
use crate::AppState;

const CAREER_LIST_LIMIT: u32 = 30;

const NOT_SPECIFIED: &str = "Not specified";
const OPEN_UNTIL_FILLED: &str = "Open until filled";

const CAREER_INTRO: &str = "We provide career development opportunities through our \
comprehensive in-house learning and development initiatives. Offering exposure to a wide range \
of projects in the built environment, we ensure our staff gain diverse knowledge and experience. \
With a flat hierarchy and a welcoming atmosphere, we cultivate a friendly work environment.";

const INTERNSHIP_SLUG: &str = "internships";
const INTERNSHIP_TITLE: &str = "Riyan Internship Program";
const INTERNSHIP_DESCRIPTION: &str = "Join our internship program and gain hands-on experience \
in a dynamic professional environment.";
const INTERNSHIP_IMAGE: &str =
    "http://beta.riyan.com.mv/wp-content/uploads/2025/05/5h-floor-Multipurpose-room_1.png";

const INTERNSHIP_INTRO: [&str; 2] = [
    "At Riyan, we believe in nurturing the next generation of architects, engineers, planners, \
and consultants. Our internship program offers students and recent graduates a unique \
opportunity to work alongside experienced professionals on real-world projects that shape the \
built environment of the Maldives and beyond.",
    "Through hands-on experience across our multi-disciplinary teams, interns gain valuable \
insights into the consulting industry while contributing meaningfully to projects spanning \
architecture, engineering, urban planning, and research.",
];

const INTERNSHIP_OFFER: [(&str, [&str; 5]); 3] = [
    (
        "Professional Development",
        [
            "Real project experience",
            "Mentorship from senior professionals",
            "Skill development workshops",
            "Industry networking opportunities",
            "Career guidance and support",
        ],
    ),
    (
        "Work Experience",
        [
            "Multi-disciplinary exposure",
            "Client interaction experience",
            "Technical software training",
            "Site visits and field work",
            "Team collaboration",
        ],
    ),
    (
        "Benefits",
        [
            "Competitive stipend",
            "Flexible working arrangements",
            "Modern office environment",
            "Professional references",
            "Potential for full-time opportunities",
        ],
    ),
];

const DEFAULT_CRITERIA: [&str; 4] = [
    "Currently enrolled in or recently graduated from a relevant degree program \
(Architecture, Engineering, Planning, etc.)",
    "Strong academic record and genuine interest in the built environment sector",
    "Proficiency in relevant software (AutoCAD, Revit, SketchUp, or similar) is advantageous",
    "Excellent communication skills and ability to work in a collaborative team environment",
];

fn positions_label(count: usize) -> String {
    match count {
        0 => "No active listings".to_string(),
        1 => "1 position available".to_string(),
        n => format!("{n} positions available"),
    }
}

fn render_role_card(role: &CareerSummary) -> String {
    let deadline = role
        .closing_date
        .as_deref()
        .map(|closing| {
            format!(
                r#"<span class="badge">Deadline: {}</span>"#,
                text(&format_date(Some(closing), OPEN_UNTIL_FILLED))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="card">
  {deadline}
  <h3><a href="/firm/career/{slug}">{title}</a></h3>
  <p>{summary}</p>
  <a href="/firm/career/{slug}">View More Details</a>
</article>"#,
        deadline = deadline,
        slug = text(&role.slug),
        title = text(&role.title),
        summary = text(&summary(&role.excerpt, &role.content, SUMMARY_CHARS)),
    )
}

/// GET /firm/career
pub async fn career_list(State(state): State<AppState>) -> PageResult<Html<String>> {
    let (page, roles) = tokio::try_join!(
        firm_page(&state.db, "career"),
        async {
            get_career_posts(&state.db, &state.config.content, CAREER_LIST_LIMIT)
                .await
                .map_err(PageError::from)
        },
    )?;
    debug!(
        total = roles.len(),
        sample = ?roles.iter().take(3).map(|r| (r.id, r.slug.as_str())).collect::<Vec<_>>(),
        "Career listing"
    );

    let listing = if roles.is_empty() {
        r#"<div class="empty"><p><strong>No current openings</strong></p>
<p>We're always interested in meeting talented people. Check back soon or <a href="/firm/contact">reach out to our team</a>.</p></div>"#
            .to_string()
    } else {
        let cards: String = roles.iter().map(render_role_card).collect();
        format!(r#"<div class="cards">{}</div>"#, cards)
    };

    let lead = strip_html(&page.excerpt);
    let lead = if lead.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="lead">{}</p>"#, text(&lead))
    };

    let body = format!(
        r#"<h1>Career</h1>
{lead}
<p>{intro}</p>
<section class="roles">
  <h2>Open roles</h2>
  <p class="count">{count}</p>
  {listing}
</section>
{links}"#,
        lead = lead,
        links = firm_links("career"),
        intro = text(CAREER_INTRO),
        count = positions_label(roles.len()),
        listing = listing,
    );

    Ok(Html(layout::page("Career", &body)))
}

/// Structured sections for a posting, or `None` when the body has no
/// recognizable structure and no fields were entered
fn career_sections(role: &CareerDetail) -> Option<CareerSections> {
    let sections = parse_career_sections(&role.content).with_explicit(&role.explicit_sections());
    (!sections.is_empty()).then_some(sections)
}

fn render_career(role: &CareerDetail, share: &str, adjacent: &str) -> String {
    let posted = format_naive_date(role.date.date());
    let closing = format_date(role.closing_date.as_deref(), OPEN_UNTIL_FILLED);

    let article = match career_sections(role) {
        Some(sections) => sections
            .iter()
            .map(|(section, html)| {
                format!(
                    r#"<section class="job-section"><h2>{}</h2><div>{}</div></section>"#,
                    section.heading(),
                    cms_html(html)
                )
            })
            .collect::<String>(),
        None => format!(r#"<div class="content">{}</div>"#, cms_html(&role.content)),
    };

    let details: String = [
        ("Location", role.location.as_deref().unwrap_or(NOT_SPECIFIED)),
        ("Type", role.employment_type.as_deref().unwrap_or(NOT_SPECIFIED)),
        ("Department", role.department.as_deref().unwrap_or(NOT_SPECIFIED)),
        ("Posted", posted.as_str()),
        ("Application deadline", closing.as_str()),
    ]
    .iter()
    .map(|(label, value)| format!("<dt>{}</dt><dd>{}</dd>", label, text(value)))
    .collect();

    let lead = strip_html(&role.excerpt);
    let apply_by = if role.closing_date.is_some() {
        format!("Apply by {closing}")
    } else {
        OPEN_UNTIL_FILLED.to_string()
    };

    format!(
        r#"<header class="job-header">
  <p class="eyebrow">Career</p>
  <h1>{title}</h1>
  <p class="lead">{lead}</p>
  <p class="meta">Posted: {posted} &middot; {apply_by}</p>
  <a href="/firm/contact">Apply Now</a> <a href="/firm/career">Back to Careers</a>
</header>
<div class="job">
  <article>{article}</article>
  <aside>
    <h3>Role Details</h3>
    <dl>{details}</dl>
    <a href="/firm/contact">Apply Now</a>
    {share}
    {adjacent}
  </aside>
</div>"#,
        title = text(&role.title),
        lead = text(&lead),
        posted = text(&posted),
        apply_by = text(&apply_by),
        article = article,
        details = details,
        share = share,
        adjacent = adjacent,
    )
}

/// GET /firm/career/:slug
pub async fn career_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> PageResult<Html<String>> {
    let types = &state.config.content;
    let (role, adjacent) = tokio::try_join!(
        get_career_by_slug(&state.db, types, &slug),
        get_adjacent_careers(&state.db, types, &slug),
    )?;

    let Some(role) = role else {
        return Err(PageError::NotFound("Position not found.".to_string()));
    };

    debug!(
        id = role.id,
        slug = %role.slug,
        explicit_fields = !role.explicit_sections().is_empty(),
        "Career detail"
    );

    let url = share_url(&state.config.site_url, "firm/career", &slug);
    let body = render_career(
        &role,
        &render_share_links(&url, &role.title),
        &render_adjacent("firm/career", &adjacent),
    );

    Ok(Html(layout::page(&role.title, &body)))
}

fn numbered(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!(r#"<li><span class="badge">{}</span> {}</li>"#, i + 1, text(item)))
        .collect()
}

/// GET /firm/career/internships
pub async fn internships_page(State(state): State<AppState>) -> PageResult<Html<String>> {
    let page = firm_page(&state.db, INTERNSHIP_SLUG).await?;

    let parsed = parse_internship_content(&page.content);
    debug!(
        key_details = parsed.key_details.len(),
        criteria = parsed.criteria.len(),
        "Internship page parsed"
    );

    let title = parsed
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .or_else(|| Some(page.title.clone()).filter(|t| !t.trim().is_empty()))
        .unwrap_or_else(|| INTERNSHIP_TITLE.to_string());
    let description = parsed
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| Some(strip_html(&page.excerpt)).filter(|d| !d.is_empty()))
        .unwrap_or_else(|| INTERNSHIP_DESCRIPTION.to_string());

    let offer: String = INTERNSHIP_OFFER
        .iter()
        .map(|(heading, items)| {
            let items: String = items.iter().map(|i| format!("<li>{}</li>", text(i))).collect();
            format!("<div><h3>{}</h3><ul>{}</ul></div>", text(heading), items)
        })
        .collect();

    let criteria: Vec<&str> = if parsed.criteria.is_empty() {
        DEFAULT_CRITERIA.to_vec()
    } else {
        parsed.criteria.iter().map(String::as_str).collect()
    };

    let program_details = if parsed.key_details.is_empty() {
        String::new()
    } else {
        let items: String = parsed
            .key_details
            .iter()
            .map(|d| format!("<li>{}</li>", text(d)))
            .collect();
        format!(r#"<section class="program-details"><h2>Program Details</h2><ul>{}</ul></section>"#, items)
    };

    let intro: String = INTERNSHIP_INTRO
        .iter()
        .map(|p| format!("<p>{}</p>", text(p)))
        .collect();

    let body = format!(
        r#"{hero}
<section class="intro"><p>{description}</p>{intro}</section>
<section class="offer">
  <h2>What We Offer</h2>
  <p>Our internship program is designed to provide comprehensive learning experiences that bridge academic knowledge with professional practice.</p>
  <div class="cards">{offer}</div>
</section>
<section class="criteria">
  <h2>Eligibility Criteria</h2>
  <p>We welcome applications from motivated individuals who meet the following requirements.</p>
  <ol>{criteria}</ol>
</section>
{program_details}
<section class="cta">
  <h2>Ready to Start Your Journey?</h2>
  <a href="/firm/contact">Apply Now</a> <a href="/firm/career">View All Careers</a>
</section>
{links}"#,
        hero = layout::hero("Career Opportunities", &title, &description, INTERNSHIP_IMAGE),
        description = text(&description),
        intro = intro,
        offer = offer,
        criteria = numbered(&criteria),
        program_details = program_details,
        links = firm_links("career/internships"),
    );

    Ok(Html(layout::page(&title, &body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn role(content: &str) -> CareerDetail {
        CareerDetail {
            id: 5,
            slug: "site-engineer".into(),
            title: "Site Engineer".into(),
            excerpt: String::new(),
            content: content.into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 10)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            location: Some("Malé".into()),
            employment_type: None,
            department: None,
            closing_date: None,
            job_description: None,
            responsibilities: None,
            requirements: None,
            qualifications: None,
            benefits: None,
        }
    }

    #[test]
    fn test_positions_label() {
        assert_eq!(positions_label(0), "No active listings");
        assert_eq!(positions_label(1), "1 position available");
        assert_eq!(positions_label(4), "4 positions available");
    }

    #[test]
    fn test_career_renders_sections_and_sidebar() {
        let html = render_career(
            &role("<h2>Key Responsibilities</h2><ul><li>Supervise works</li></ul>"),
            "",
            "",
        );
        assert!(html.contains("<h2>Responsibilities</h2>"));
        assert!(html.contains("<li>Supervise works</li>"));
        assert!(html.contains("<dt>Location</dt><dd>Malé</dd>"));
        assert!(html.contains("<dt>Type</dt><dd>Not specified</dd>"));
        assert!(html.contains("<dt>Posted</dt><dd>Jan 10, 2025</dd>"));
        assert!(html.contains("<dt>Application deadline</dt><dd>Open until filled</dd>"));
    }

    #[test]
    fn test_explicit_field_wins_over_parsed() {
        let mut r = role("<h2>Benefits</h2><p>Parsed</p>");
        r.benefits = Some("<p>Explicit</p>".into());
        let sections = career_sections(&r).unwrap();
        assert_eq!(sections.benefits.as_deref(), Some("<p>Explicit</p>"));
    }

    #[test]
    fn test_unstructured_body_rendered_raw() {
        let r = role("<p>Send your CV.</p><script>x()</script>");
        assert!(career_sections(&r).is_none());

        let html = render_career(&r, "", "");
        assert!(html.contains(r#"<div class="content"><p>Send your CV.</p></div>"#));
    }

    #[test]
    fn test_role_card_deadline_badge() {
        let card = CareerSummary {
            id: 1,
            slug: "architect".into(),
            title: "Architect".into(),
            excerpt: String::new(),
            content: "<p>Design buildings.</p>".into(),
            date: NaiveDate::default().and_hms_opt(0, 0, 0).unwrap(),
            closing_date: Some("20250315".into()),
        };
        let html = render_role_card(&card);
        assert!(html.contains("Deadline: Mar 15, 2025"));
        assert!(html.contains("<p>Design buildings.</p>"));
    }
}
