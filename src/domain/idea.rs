//! Idea posts and the pagination metadata reported by the ideas API.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Image rendition appended to a post via `append[]`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImageAsset {
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

/// Single idea post as returned by the API. Fields of an unexpected type are
/// read as absent instead of rejecting the post.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PostSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_images")]
    pub small_image: Option<Vec<ImageAsset>>,
    #[serde(default, deserialize_with = "lenient_images")]
    pub medium_image: Option<Vec<ImageAsset>>,
}

/// Strings are kept, numbers and booleans are rendered as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn lenient_images<'de, D>(deserializer: D) -> Result<Option<Vec<ImageAsset>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Pagination bounds reported by the API alongside a page of posts.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub to: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

impl PageMeta {
    /// Clamps both bounds to at least one; an empty listing still has a
    /// single page.
    pub fn normalized(self) -> Self {
        Self {
            current_page: self.current_page.max(1),
            last_page: self.last_page.max(1),
            ..self
        }
    }
}

fn first_url(images: Option<&Vec<ImageAsset>>) -> Option<&str> {
    images?
        .iter()
        .filter_map(|image| image.url.as_deref())
        .map(str::trim)
        .find(|url| !url.is_empty())
}

fn is_image_url(src: &str) -> bool {
    src.starts_with("https://") || src.starts_with("http://") || src.starts_with('/')
}

/// Returns the `src` of the first http(s) or root-relative image in `content`.
pub fn first_image_src(content: &str) -> Option<String> {
    let found: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&found);

    ammonia::Builder::default()
        .attribute_filter(move |element, attribute, value| {
            let src = value.trim();
            if element == "img" && attribute == "src" && is_image_url(src) {
                if let Ok(mut slot) = slot.lock() {
                    slot.get_or_insert_with(|| src.to_string());
                }
            }
            Some(Cow::Borrowed(value))
        })
        .clean(content);

    found.lock().ok().and_then(|slot| slot.clone())
}

impl PostSummary {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or("Untitled Post")
    }

    /// Picks the card thumbnail: appended renditions first, then the first
    /// image embedded in the post body.
    pub fn thumbnail_url(&self) -> Option<String> {
        first_url(self.medium_image.as_ref())
            .or_else(|| first_url(self.small_image.as_ref()))
            .map(str::to_string)
            .or_else(|| self.content.as_deref().and_then(first_image_src))
    }

    /// Publish date parsed from either RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
    pub fn published_date(&self) -> Option<NaiveDate> {
        let raw = self.published_at.as_deref()?.trim();

        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Date shown on the card; the raw value is kept when it cannot be parsed.
    pub fn display_date(&self) -> String {
        match self.published_date() {
            Some(date) => date.format("%-d %B %Y").to_string(),
            None => self.published_at.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> PostSummary {
        PostSummary {
            title: Some("Growth hacks".to_string()),
            published_at: Some("2022-09-05 10:00:00".to_string()),
            content: Some(
                r#"<p>Intro</p><img src="https://cdn.example.com/a.jpg"><img src="https://cdn.example.com/b.jpg">"#
                    .to_string(),
            ),
            ..PostSummary::default()
        }
    }

    #[test]
    fn thumbnail_prefers_appended_renditions() {
        let mut post = post();
        post.small_image = Some(vec![ImageAsset {
            url: Some("https://cdn.example.com/small.jpg".to_string()),
        }]);
        assert_eq!(
            post.thumbnail_url().as_deref(),
            Some("https://cdn.example.com/small.jpg")
        );

        post.medium_image = Some(vec![ImageAsset {
            url: Some("https://cdn.example.com/medium.jpg".to_string()),
        }]);
        assert_eq!(
            post.thumbnail_url().as_deref(),
            Some("https://cdn.example.com/medium.jpg")
        );
    }

    #[test]
    fn thumbnail_falls_back_to_first_embedded_image() {
        assert_eq!(
            post().thumbnail_url().as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn script_urls_are_not_used_as_thumbnails() {
        assert_eq!(first_image_src(r#"<img src="javascript:alert(1)">"#), None);
        assert_eq!(first_image_src("<p>no images</p>"), None);
    }

    #[test]
    fn missing_title_gets_placeholder() {
        let mut post = post();
        post.title = Some("   ".to_string());
        assert_eq!(post.display_title(), "Untitled Post");
        post.title = None;
        assert_eq!(post.display_title(), "Untitled Post");
    }

    #[test]
    fn dates_are_formatted_for_cards() {
        assert_eq!(post().display_date(), "5 September 2022");

        let mut post = post();
        post.published_at = Some("2023-01-02T08:00:00+07:00".to_string());
        assert_eq!(post.display_date(), "2 January 2023");

        post.published_at = Some("yesterday".to_string());
        assert_eq!(post.display_date(), "yesterday");
    }

    #[test]
    fn unexpected_field_types_are_tolerated() {
        let post: PostSummary = serde_json::from_value(serde_json::json!({
            "title": 2024,
            "published_at": null,
            "content": { "html": "<p>x</p>" },
            "small_image": "none",
            "medium_image": [5, { "url": "https://cdn.example.com/m.jpg" }]
        }))
        .unwrap();

        assert_eq!(post.display_title(), "2024");
        assert_eq!(post.content, None);
        assert_eq!(post.small_image, None);
        assert_eq!(
            post.thumbnail_url().as_deref(),
            Some("https://cdn.example.com/m.jpg")
        );
    }

    #[test]
    fn meta_bounds_are_clamped() {
        let meta = PageMeta {
            current_page: 0,
            last_page: 0,
            from: None,
            to: None,
            total: Some(0),
        }
        .normalized();
        assert_eq!((meta.current_page, meta.last_page), (1, 1));
    }
}
