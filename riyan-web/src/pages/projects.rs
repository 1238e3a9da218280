//! Project listing and detail pages

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use riyan_common::content::text::strip_html;
use riyan_common::db::{
    projects::{
        get_adjacent_projects, get_project_by_slug, get_project_categories, get_project_services,
        get_projects,
    },
    ListingFilter, ProjectDetail,
};
use tracing::debug;

use super::ListingQuery;
use crate::error::{PageError, PageResult};
use crate::render::layout::{self, cms_html, joined_or, text};
use crate::render::listing::{
    filter_bar, render_adjacent, render_cards, render_gallery, resolve_per_page, Card,
    SelectFilter, PROJECT_DEFAULT_PAGE_SIZE, PROJECT_PAGE_SIZES,
};
use crate::render::share::{render_share_links, share_url};
use crate::AppState;

const FALLBACK_IMAGE: &str =
    "http://beta.riyan.com.mv/wp-content/uploads/about_gallery/1_Collaboration-Space.jpg";

const NOT_SPECIFIED: &str = "Not specified";

/// GET /projects
pub async fn project_list(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> PageResult<Html<String>> {
    let types = &state.config.content;
    let per_page = resolve_per_page(
        query.per_page.as_deref(),
        &PROJECT_PAGE_SIZES,
        PROJECT_DEFAULT_PAGE_SIZE,
    );
    let filter = ListingFilter {
        category: query.category.clone(),
        service: query.service.clone(),
        search: query.q.clone(),
        limit: per_page,
    };

    let (categories, services, projects) = tokio::try_join!(
        get_project_categories(&state.db, types),
        get_project_services(&state.db, types),
        get_projects(&state.db, types, &filter),
    )?;

    debug!(
        total = projects.len(),
        sample = ?projects
            .iter()
            .take(3)
            .map(|p| (p.id, p.slug.as_str(), p.title.as_str(), &p.categories, &p.services))
            .collect::<Vec<_>>(),
        "Project listing"
    );

    let selected_category = query.category.as_deref().unwrap_or_default();
    let selected_service = query.service.as_deref().unwrap_or_default();
    let bar = filter_bar(
        "/projects",
        &[
            SelectFilter {
                name: "category",
                label: "Sector",
                terms: &categories,
                selected: selected_category,
            },
            SelectFilter {
                name: "service",
                label: "Service",
                terms: &services,
                selected: selected_service,
            },
        ],
        query.q.as_deref().unwrap_or_default(),
        &PROJECT_PAGE_SIZES,
        per_page,
    );

    let cards: Vec<Card<'_>> = projects
        .iter()
        .map(|project| Card {
            href: format!("/projects/{}", project.slug),
            title: &project.title,
            excerpt: &project.excerpt,
            content: &project.content,
            image_url: project.thumbnail_url.as_deref().unwrap_or(FALLBACK_IMAGE),
            meta: project.categories.join(", "),
        })
        .collect();

    let body = format!(
        r#"<h1>Projects</h1>
{bar}
<p class="count">{count} project{plural}</p>
{cards}"#,
        bar = bar,
        count = projects.len(),
        plural = if projects.len() == 1 { "" } else { "s" },
        cards = render_cards(&cards, "No projects match these filters."),
    );

    Ok(Html(layout::page("Projects", &body)))
}

fn render_project(project: &ProjectDetail, share: &str, adjacent: &str) -> String {
    let meta = &project.meta;
    let stats: String = [
        ("Client", meta.client.as_deref()),
        ("Year", meta.year.as_deref()),
        ("Location", meta.location.as_deref()),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            "<dt>{}</dt><dd>{}</dd>",
            label,
            text(value.unwrap_or(NOT_SPECIFIED))
        )
    })
    .collect();

    let lead = strip_html(&project.excerpt);
    let lead = if lead.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="lead">{}</p>"#, text(&lead))
    };

    format!(
        r#"{hero}
<article class="project">
  <dl class="stats">{stats}</dl>
  {lead}
  <div class="content">{content}</div>
  <dl class="taxonomy">
    <dt>Sectors</dt><dd>{sectors}</dd>
    <dt>Services</dt><dd>{services}</dd>
  </dl>
  {gallery}
  {share}
</article>
{adjacent}"#,
        hero = layout::hero(
            "Project",
            &project.title,
            "",
            project.thumbnail_url.as_deref().unwrap_or(FALLBACK_IMAGE)
        ),
        stats = stats,
        lead = lead,
        content = cms_html(&project.content),
        sectors = joined_or(&project.categories, NOT_SPECIFIED),
        services = joined_or(&project.all_services(), NOT_SPECIFIED),
        gallery = render_gallery(&project.gallery, &project.title),
        share = share,
        adjacent = adjacent,
    )
}

/// GET /projects/:slug
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> PageResult<Html<String>> {
    let types = &state.config.content;
    let (project, adjacent) = tokio::try_join!(
        get_project_by_slug(&state.db, types, &slug),
        get_adjacent_projects(&state.db, types, &slug),
    )?;

    let Some(project) = project else {
        return Err(PageError::NotFound("Project not found.".to_string()));
    };

    debug!(
        id = project.id,
        slug = %project.slug,
        categories = ?project.categories,
        services = ?project.all_services(),
        gallery = project.gallery.len(),
        "Project detail"
    );

    let url = share_url(&state.config.site_url, "projects", &slug);
    let body = render_project(
        &project,
        &render_share_links(&url, &project.title),
        &render_adjacent("projects", &adjacent),
    );

    Ok(Html(layout::page(&project.title, &body)))
}
