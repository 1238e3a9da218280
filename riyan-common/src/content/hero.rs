//! Hero slider slides
//!
//! Slides come from the slider plugin tables as two JSON blobs per row:
//! `params` (publish state, background image) and `layers` (text layers keyed
//! by position). Only the background image and the first two text layers are
//! used.

use serde_json::Value;
use tracing::warn;

use super::text::strip_html;
use crate::db::models::HeroSlide;

/// Layer keys that hold layout containers rather than text
const CONTAINER_LAYERS: [&str; 3] = ["top", "middle", "bottom"];

/// Parse a JSON column, treating invalid JSON as absent
fn parse_json(column: &str, slide_id: i64, raw: Option<&str>) -> Option<Value> {
    let raw = raw.filter(|r| !r.trim().is_empty())?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(slide_id, column, error = %e, "Invalid slide JSON, treating as empty");
            None
        }
    }
}

/// Build a slide from a slider row
///
/// Returns `None` for unpublished slides and for slides with no image and no
/// text.
pub fn parse_slide(
    id: i64,
    order: i64,
    params_json: Option<&str>,
    layers_json: Option<&str>,
) -> Option<HeroSlide> {
    let params = parse_json("params", id, params_json);
    let layers = parse_json("layers", id, layers_json);

    let publish_state = params
        .as_ref()
        .and_then(|p| p.pointer("/publish/state"))
        .and_then(Value::as_str);
    if publish_state == Some("unpublished") {
        return None;
    }

    let image_url = params
        .as_ref()
        .and_then(|p| p.pointer("/bg/image"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let texts = text_layers(layers.as_ref());
    let title = texts.first().map(|t| strip_html(t)).unwrap_or_default();
    let description = texts.get(1).map(|t| strip_html(t)).unwrap_or_default();

    if image_url.is_empty() && title.is_empty() && description.is_empty() {
        return None;
    }

    Some(HeroSlide {
        id,
        order,
        title,
        description,
        image_url,
    })
}

/// Non-blank text layers ordered by numeric key
fn text_layers(layers: Option<&Value>) -> Vec<&str> {
    let Some(map) = layers.and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut keyed: Vec<(f64, &str)> = map
        .iter()
        .filter(|(key, _)| !CONTAINER_LAYERS.contains(&key.as_str()))
        .filter_map(|(key, layer)| {
            let text = layer.get("text").and_then(Value::as_str)?;
            if text.trim().is_empty() {
                return None;
            }
            // Non-numeric keys sort after numbered layers
            let position = key.parse::<f64>().unwrap_or(f64::MAX);
            Some((position, text))
        })
        .collect();

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, text)| text).collect()
}

/// Slide shown when the slider has no usable slides
pub fn fallback_slide() -> HeroSlide {
    HeroSlide {
        id: -1,
        order: 0,
        title: "Integrated Solutions.".to_string(),
        description:
            "Design, engineering, project management, and research expertise from a Maldives-based team."
                .to_string(),
        image_url: "http://beta.riyan.com.mv/wp-content/uploads/2022/06/hd-1800x900-1.png"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slide_orders_layers_numerically() {
        let params = r#"{"bg":{"image":"https://example.com/hero.jpg"},"publish":{"state":"published"}}"#;
        let layers = r#"{
            "10": {"text": "<span>Second line</span>"},
            "2": {"text": "  <b>Built for</b>\n the Maldives "},
            "top": {"text": "container"},
            "5": {"text": "   "}
        }"#;

        let slide = parse_slide(7, 3, Some(params), Some(layers)).unwrap();
        assert_eq!(slide.id, 7);
        assert_eq!(slide.order, 3);
        assert_eq!(slide.title, "Built for the Maldives");
        assert_eq!(slide.description, "Second line");
        assert_eq!(slide.image_url, "https://example.com/hero.jpg");
    }

    #[test]
    fn test_unpublished_slide_skipped() {
        let params = r#"{"bg":{"image":"a.jpg"},"publish":{"state":"unpublished"}}"#;
        assert!(parse_slide(1, 0, Some(params), Some(r#"{"1":{"text":"Hi"}}"#)).is_none());
    }

    #[test]
    fn test_empty_slide_skipped() {
        assert!(parse_slide(1, 0, Some("{}"), Some("{}")).is_none());
        assert!(parse_slide(1, 0, None, None).is_none());
    }

    #[test]
    fn test_invalid_json_treated_as_absent() {
        let slide = parse_slide(4, 1, Some("{not json"), Some(r#"{"1":{"text":"Only title"}}"#))
            .unwrap();
        assert_eq!(slide.title, "Only title");
        assert_eq!(slide.description, "");
        assert_eq!(slide.image_url, "");
    }

    #[test]
    fn test_image_only_slide_kept() {
        let slide = parse_slide(2, 0, Some(r#"{"bg":{"image":"x.png"}}"#), Some("[]")).unwrap();
        assert_eq!(slide.title, "");
        assert_eq!(slide.image_url, "x.png");
    }

    #[test]
    fn test_fallback_slide() {
        let slide = fallback_slide();
        assert_eq!(slide.id, -1);
        assert_eq!(slide.title, "Integrated Solutions.");
        assert!(!slide.image_url.is_empty());
    }
}
