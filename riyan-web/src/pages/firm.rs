//! Firm section: About and Contact pages

use axum::{extract::State, response::Html};
use riyan_common::content::{categorize_logos, LogoGroup};
use riyan_common::db::{logos::get_client_logos, posts::get_page_by_slug, Page};
use sqlx::MySqlPool;
use tracing::debug;

use super::firm_links;
use super::home::{KEY_SECTORS, KEY_SECTORS_INTRO};
use crate::error::{PageError, PageResult};
use crate::render::layout::{self, text};
use crate::AppState;

const ABOUT_TITLE: &str = "Riyan Pvt. Ltd.";
const ABOUT_DESCRIPTION: &str = "Founded in 1997, Riyan Pvt. Ltd. is a leading \
multi-disciplinary consultancy firm based in the Maldives.";
const ABOUT_IMAGE: &str = "/wp-content/uploads/2024/12/Sonevafushi-e1759852363152-1140x740.jpg";

const ABOUT_COPY: [&str; 3] = [
    "Founded in 1997, Riyan Pvt. Ltd. is a leading multi-disciplinary consultancy firm based in \
the Maldives. With expertise spanning design consultancy, engineering, project management, and \
research & planning, we deliver integrated solutions that shape sustainable and resilient \
environments.",
    "From luxury resorts and landmark buildings to critical infrastructure, urban planning, and \
socio-economic research, we bring together creativity, technical excellence, and strategic \
insight. Backed by decades of local knowledge and enriched by our experience working with \
international clients and delivering projects funded by global donor agencies, we consistently \
deliver outcomes that meet international standards across diverse sectors.",
    "At Riyan, we are committed to innovation, sustainability, and client-focused delivery making \
us a trusted partner in transforming visions into lasting impact across the Maldives and beyond.",
];

const SERVICES: [(&str, &[&str]); 4] = [
    (
        "Planning",
        &[
            "Site Investigation",
            "Due Diligence",
            "Hydrographic & Land Surveying",
            "Feasibility Studies",
            "Socioeconomic Assessments",
            "Sustainability Analysis",
            "Urban Planning",
            "Development Planning",
        ],
    ),
    (
        "Design",
        &[
            "Interior Design",
            "Architectural Design",
            "Civil Engineering",
            "Structural Engineering",
            "MEP Design",
            "Coastal Engineering",
            "Quantity Surveying",
            "Water & Sanitation Design",
            "Ports & Transportation",
            "Solid Waste Management",
        ],
    ),
    ("Implementation", &["Project Management & Supervision"]),
    ("Operational", &["Management Consultancy", "Valuation"]),
];

const CLIENTS_INTRO: &str = "We possess a wealth of experience in forging fruitful partnerships \
with the Maldivian government, local and international companies, as well as esteemed bilateral \
and multilateral agencies, resulting in a proven track record of success.";

const CONTACT_TITLE: &str = "Let's build places that endure.";
const CONTACT_DESCRIPTION: &str = "Dedicated design, engineering, and research teams based in \
the Maldives, ready to partner on your next project.";
const CONTACT_IMAGE: &str = "/images/about-hero.png";

/// (label, value, href)
const CONTACT_CHANNELS: [(&str, &str, &str); 3] = [
    ("Call us", "+960 331 5049", "tel:+9603315049"),
    ("Email", "info@riyan.com.mv", "mailto:info@riyan.com.mv"),
    (
        "Visit",
        "H. Azim, 3rd Floor, Ameenee Magu, Male 20054",
        "https://www.google.com/maps?q=4.170965613755108,73.5159096621892&z=17",
    ),
];

const FOCUS_AREAS: [&str; 5] = [
    "Design & Engineering",
    "Project Management",
    "Research & Planning",
    "Sustainability",
    "Advisory",
];

/// CMS page backing a firm section page; 404 when it does not exist
pub(crate) async fn firm_page(db: &MySqlPool, slug: &str) -> PageResult<Page> {
    let page = get_page_by_slug(db, slug)
        .await?
        .ok_or_else(|| PageError::NotFound("Page not found.".to_string()))?;
    debug!(id = page.id, slug = %page.slug, title = %page.title, "Firm page");
    Ok(page)
}

fn render_logo_groups(groups: &[LogoGroup]) -> String {
    groups
        .iter()
        .map(|group| {
            let logos: String = if group.logos.is_empty() {
                r#"<p class="empty">No logos available.</p>"#.to_string()
            } else {
                group
                    .logos
                    .iter()
                    .map(|logo| {
                        format!(
                            r#"<img src="{}" alt="{}" loading="lazy">"#,
                            text(&logo.url),
                            text(&logo.name)
                        )
                    })
                    .collect()
            };
            format!(
                r#"<section class="logo-group"><h3>{}</h3><div class="logos">{}</div></section>"#,
                text(group.label),
                logos
            )
        })
        .collect()
}

fn render_services() -> String {
    SERVICES
        .iter()
        .map(|(heading, items)| {
            let items: String = items.iter().map(|i| format!("<li>{}</li>", text(i))).collect();
            format!("<div><h3>{}</h3><ul>{}</ul></div>", text(heading), items)
        })
        .collect()
}

/// GET /firm/about
pub async fn about_page(State(state): State<AppState>) -> PageResult<Html<String>> {
    let logos = get_client_logos(&state.db, &state.config.content.client_logo_fragment).await?;
    let groups = categorize_logos(&logos);
    debug!(
        total = logos.len(),
        categorized = groups.iter().map(|g| g.logos.len()).sum::<usize>(),
        "Client logos"
    );

    let copy: String = ABOUT_COPY.iter().map(|p| format!("<p>{}</p>", text(p))).collect();
    let sectors: String = KEY_SECTORS
        .iter()
        .map(|(title, image)| {
            format!(r#"<figure><img src="{image}" alt="{title}" loading="lazy"><figcaption>{title}</figcaption></figure>"#)
        })
        .collect();

    let body = format!(
        r#"{hero}
<section class="intro">{copy}</section>
<section class="services">
  <h2>Multidisciplinary Services</h2>
  <div class="cards">{services}</div>
</section>
<section class="sectors">
  <h2>Over 1,000 successful projects spanning diverse sectors.</h2>
  <p>{sectors_intro}</p>
  <div class="cards">{sectors}</div>
</section>
<section class="clients">
  <h2>Clients</h2>
  <p>{clients_intro}</p>
  {logos}
</section>
{links}"#,
        hero = layout::hero("About", ABOUT_TITLE, ABOUT_DESCRIPTION, ABOUT_IMAGE),
        copy = copy,
        services = render_services(),
        sectors_intro = text(KEY_SECTORS_INTRO),
        sectors = sectors,
        clients_intro = text(CLIENTS_INTRO),
        logos = render_logo_groups(&groups),
        links = firm_links("about"),
    );

    Ok(Html(layout::page("About", &body)))
}

fn render_contact() -> String {
    let channels: String = CONTACT_CHANNELS
        .iter()
        .map(|(label, value, href)| {
            format!(
                r#"<div class="channel"><p class="eyebrow">{}</p><a href="{}">{}</a></div>"#,
                text(label),
                text(href),
                text(value)
            )
        })
        .collect();
    let focus: String = FOCUS_AREAS
        .iter()
        .map(|area| format!(r#"<span class="badge">{}</span> "#, text(area)))
        .collect();

    format!(
        r#"{hero}
<section class="contact">
  <div class="channels">{channels}</div>
  <p class="focus">{focus}</p>
</section>
{links}"#,
        hero = layout::hero("Contact", CONTACT_TITLE, CONTACT_DESCRIPTION, CONTACT_IMAGE),
        channels = channels,
        focus = focus,
        links = firm_links("contact"),
    )
}

/// GET /firm/contact
pub async fn contact_page() -> Html<String> {
    Html(layout::page("Contact", &render_contact()))
}
