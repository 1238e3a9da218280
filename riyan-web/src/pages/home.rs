//! Home page: hero slider, about blurb, key sectors, latest news, contact

use axum::{extract::State, response::Html};
use riyan_common::content::hero::fallback_slide;
use riyan_common::content::text::{format_naive_date, truncate};
use riyan_common::db::{hero::get_hero_slides, news::get_news_posts, HeroSlide, ListingFilter};
use tracing::debug;

use crate::error::PageResult;
use crate::render::layout::{self, text};
use crate::render::listing::{render_cards, Card};
use crate::AppState;

const LATEST_NEWS_COUNT: u32 = 3;
const SLIDE_CAPTION_CHARS: usize = 60;

pub(crate) const NEWS_FALLBACK_IMAGE: &str =
    "http://beta.riyan.com.mv/wp-content/uploads/about_gallery/1_Collaboration-Space.jpg";

const ABOUT_TITLE: &str = "Integrated Solutions.";
const ABOUT_TEXT: &str = "Founded in 1997, Riyan Pvt. Ltd. is a leading multi-disciplinary \
consultancy firm based in the Maldives. With expertise spanning design consultancy, engineering, \
project management, and research & planning, we deliver integrated solutions that shape \
sustainable and resilient environments.";

pub(crate) const KEY_SECTORS_INTRO: &str = "Over the past 28 years, we have successfully delivered projects \
across diverse sectors including Buildings, Resorts, Infrastructure, Water & Sewerage, Urban \
Planning & Research.";

pub(crate) const KEY_SECTORS: [(&str, &str); 5] = [
    ("Buildings", "http://beta.riyan.com.mv/wp-content/uploads/2018/12/IAS-FINAL-1024x568-1.jpg"),
    ("Resorts", "http://beta.riyan.com.mv/wp-content/uploads/2009/01/Pic-13-Park-Hyatt-rotated.jpg"),
    ("Infrastructure", "http://beta.riyan.com.mv/wp-content/uploads/2007/02/mpl.jpg"),
    ("Urban Planning", "http://beta.riyan.com.mv/wp-content/uploads/2021/09/bodufolhadhoo-LUP-1.jpg"),
    ("Research", "https://beta.riyan.com.mv/wp-content/uploads/2022/08/IMG20210407113813-1800x900-1.jpg"),
];

fn render_slider(slides: &[HeroSlide]) -> String {
    let (first, rest) = match slides.split_first() {
        Some(split) => split,
        None => return String::new(),
    };

    let mut html = layout::hero("Riyan", &first.title, &first.description, &first.image_url);
    if !rest.is_empty() {
        html.push_str(r#"<ol class="slides">"#);
        for slide in rest {
            html.push_str(&format!(
                r#"<li><img src="{}" alt="{}" loading="lazy"> {}</li>"#,
                text(&slide.image_url),
                text(&slide.title),
                text(&truncate(&slide.title, SLIDE_CAPTION_CHARS))
            ));
        }
        html.push_str("</ol>");
    }
    html
}

fn render_key_sectors() -> String {
    let items: String = KEY_SECTORS
        .iter()
        .map(|(title, image)| {
            format!(r#"<figure><img src="{image}" alt="{title}" loading="lazy"><figcaption>{title}</figcaption></figure>"#)
        })
        .collect();
    format!(
        r#"<section class="key-sectors"><h2>Key Sectors</h2><p>{}</p><div class="cards">{}</div></section>"#,
        text(KEY_SECTORS_INTRO),
        items
    )
}

/// GET /
pub async fn home_page(State(state): State<AppState>) -> PageResult<Html<String>> {
    let types = &state.config.content;
    let filter = ListingFilter {
        limit: LATEST_NEWS_COUNT,
        ..Default::default()
    };

    let (mut slides, news) = tokio::try_join!(
        get_hero_slides(&state.db, &types.hero_slider_alias),
        get_news_posts(&state.db, types, &filter),
    )?;

    debug!(slides = slides.len(), news = news.len(), "Home page content loaded");
    if slides.is_empty() {
        slides.push(fallback_slide());
    }

    let cards: Vec<Card<'_>> = news
        .iter()
        .map(|post| Card {
            href: format!("/news/{}", post.slug),
            title: &post.title,
            excerpt: &post.excerpt,
            content: &post.content,
            image_url: post.thumbnail_url.as_deref().unwrap_or(NEWS_FALLBACK_IMAGE),
            meta: format_naive_date(post.date.date()),
        })
        .collect();

    let body = format!(
        r#"{slider}
<section class="about"><h2>{about_title}</h2><p>{about}</p><a href="/firm/about">Learn More</a></section>
{sectors}
<section class="latest-news"><h2>Latest News</h2>{news}</section>
<section class="contact-strip">
  <h2>Contact Us</h2>
  <p>Email us directly: <a href="mailto:info@riyan.com.mv">info@riyan.com.mv</a></p>
  <p>Call us directly: <a href="tel:+9603315049">+960 331 5049</a></p>
</section>"#,
        slider = render_slider(&slides),
        about_title = text(ABOUT_TITLE),
        about = text(ABOUT_TEXT),
        sectors = render_key_sectors(),
        news = render_cards(&cards, "No news yet."),
    );

    Ok(Html(layout::page("Home", &body)))
}
