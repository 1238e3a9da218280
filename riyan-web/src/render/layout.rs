//! Site layout: document shell, header navigation and footer
//!
//! Text interpolated into markup goes through [`text`]; CMS bodies go
//! through [`cms_html`], which drops style and script blocks but keeps the
//! rest of the markup.

use riyan_common::content::text::{escape_html, sanitize_content};

/// Escape plain text for HTML
pub fn text(value: &str) -> String {
    escape_html(value)
}

/// CMS markup with style and script blocks removed
pub fn cms_html(value: &str) -> String {
    sanitize_content(value)
}

const NAV: &str = r#"<header class="site-header">
  <a class="brand" href="/">Riyan</a>
  <nav>
    <a href="/">Home</a>
    <a href="/projects">Projects</a>
    <a href="/news">News</a>
    <span class="nav-group">Firm
      <a href="/firm/about">About</a>
      <a href="/firm/career">Career</a>
      <a href="/firm/career/internships">Internships</a>
      <a href="/firm/contact">Contact</a>
    </span>
  </nav>
</header>"#;

const FOOTER: &str = r#"<footer class="site-footer">
  <p>Riyan Pvt. Ltd. &middot; H. Azim, 3rd Floor, Ameenee Magu, Male 20054, Maldives</p>
  <p><a href="tel:+9603315049">+960 331 5049</a> &middot; <a href="mailto:info@riyan.com.mv">info@riyan.com.mv</a></p>
</footer>"#;

/// Full HTML document around `body`
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Riyan Pvt. Ltd.</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }}
.site-header, .site-footer {{ padding: 1rem 10%; background: #111827; color: #fff; }}
.site-header a, .site-footer a {{ color: #fff; margin-right: 1rem; text-decoration: none; }}
main {{ padding: 2rem 10%; }}
.hero {{ min-height: 320px; background-size: cover; background-position: center; color: #fff; display: flex; align-items: flex-end; padding: 2rem 10%; }}
.eyebrow {{ text-transform: uppercase; letter-spacing: 0.3em; font-size: 0.75rem; }}
.cards {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }}
.card img, .gallery img {{ width: 100%; height: auto; }}
.badge {{ background: #781213; color: #fff; padding: 0.1rem 0.5rem; border-radius: 4px; font-size: 0.8rem; }}
.notice {{ min-height: 40vh; display: flex; flex-direction: column; align-items: center; justify-content: center; }}
</style>
</head>
<body>
{nav}
<main>
{body}
</main>
{footer}
</body>
</html>"#,
        title = text(title),
        nav = NAV,
        body = body,
        footer = FOOTER,
    )
}

/// Full-width hero with an eyebrow, title and optional description
pub fn hero(eyebrow: &str, title: &str, description: &str, image_url: &str) -> String {
    let description = if description.trim().is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", text(description))
    };
    format!(
        r#"<section class="hero" style="background-image: linear-gradient(to top, rgba(0,0,0,.7), rgba(0,0,0,.1)), url('{image}')">
  <div>
    <p class="eyebrow">{eyebrow}</p>
    <h1>{title}</h1>
    {description}
  </div>
</section>"#,
        image = text(image_url),
        eyebrow = text(eyebrow),
        title = text(title),
        description = description,
    )
}

/// Comma-separated list of names, or `fallback` when empty
pub fn joined_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        text(fallback)
    } else {
        text(&items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_escapes_title() {
        let html = page("R&D <Lab>", "<p>body</p>");
        assert!(html.contains("<title>R&amp;D &lt;Lab&gt; - Riyan Pvt. Ltd.</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"<a href="/firm/career/internships">Internships</a>"#));
    }

    #[test]
    fn test_cms_html_strips_scripts_only() {
        assert_eq!(
            cms_html("<p>Keep <b>this</b></p><script>x()</script>"),
            "<p>Keep <b>this</b></p>"
        );
    }

    #[test]
    fn test_hero_omits_blank_description() {
        let html = hero("Firm", "About", "  ", "a.jpg");
        assert!(html.contains("<h1>About</h1>"));
        assert!(!html.contains("<p></p>"));
    }

    #[test]
    fn test_joined_or() {
        assert_eq!(joined_or(&[], "Not specified"), "Not specified");
        assert_eq!(
            joined_or(&["Resorts".into(), "Hotels & Spas".into()], "-"),
            "Resorts, Hotels &amp; Spas"
        );
    }
}
