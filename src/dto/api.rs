//! Response envelope returned by the remote ideas API.

use serde_json::Value;
use thiserror::Error;

use crate::domain::idea::{PageMeta, PostSummary};

/// Parsed JSON body of a successful `GET /api/ideas` call. Its shape has not
/// been checked yet; see [`RawIdeasPage::into_page`].
#[derive(Clone, Debug, PartialEq)]
pub struct RawIdeasPage(pub Value);

/// Page of ideas with a validated shape.
#[derive(Clone, Debug, PartialEq)]
pub struct IdeasPage {
    pub posts: Vec<PostSummary>,
    pub meta: Option<PageMeta>,
}

/// The body parsed as JSON but did not have the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("response has no `data` array")]
    MissingData,
    #[error("post #{index} is malformed: {reason}")]
    MalformedPost { index: usize, reason: String },
}

impl RawIdeasPage {
    /// Validates the envelope. `data` must be an array of posts; a missing
    /// or malformed `meta` only hides the pagination bar.
    pub fn into_page(self) -> Result<IdeasPage, FormatError> {
        let Value::Object(mut envelope) = self.0 else {
            return Err(FormatError::MissingData);
        };

        let Some(Value::Array(items)) = envelope.remove("data") else {
            return Err(FormatError::MissingData);
        };

        let posts = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<PostSummary>(item).map_err(|err| {
                    FormatError::MalformedPost {
                        index,
                        reason: err.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let meta = match envelope.remove("meta") {
            None | Some(Value::Null) => None,
            Some(raw) => match serde_json::from_value::<PageMeta>(raw) {
                Ok(meta) => Some(meta.normalized()),
                Err(err) => {
                    log::warn!("Ignoring malformed pagination meta: {err}");
                    None
                }
            },
        };

        Ok(IdeasPage { posts, meta })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_envelope_is_accepted() {
        let raw = RawIdeasPage(json!({
            "data": [
                {
                    "id": 7,
                    "title": "Idea",
                    "published_at": "2022-09-05 10:00:00",
                    "content": "<p>text</p>",
                    "small_image": [{ "id": 1, "url": "https://cdn.example.com/s.jpg" }],
                    "medium_image": []
                }
            ],
            "meta": { "current_page": 2, "last_page": 9, "from": 11, "to": 20, "total": 90 },
            "links": {}
        }));

        let page = raw.into_page().unwrap();

        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].title.as_deref(), Some("Idea"));
        let meta = page.meta.unwrap();
        assert_eq!((meta.current_page, meta.last_page), (2, 9));
        assert_eq!(meta.total, Some(90));
    }

    #[test]
    fn missing_data_is_invalid_format() {
        let raw = RawIdeasPage(json!({ "meta": { "current_page": 1, "last_page": 1 } }));
        assert_eq!(raw.into_page(), Err(FormatError::MissingData));
    }

    #[test]
    fn non_array_data_is_invalid_format() {
        for body in [json!({ "data": {} }), json!({ "data": "x" }), json!([1, 2]), json!(null)] {
            assert_eq!(RawIdeasPage(body).into_page(), Err(FormatError::MissingData));
        }
    }

    #[test]
    fn malformed_post_is_invalid_format() {
        let raw = RawIdeasPage(json!({ "data": [{ "title": "ok" }, 5] }));
        assert!(matches!(
            raw.into_page(),
            Err(FormatError::MalformedPost { index: 1, .. })
        ));
    }

    #[test]
    fn posts_with_odd_field_types_are_kept() {
        let raw = RawIdeasPage(json!({
            "data": [{ "title": 42, "content": ["not", "html"], "published_at": "2022-09-05" }]
        }));

        let page = raw.into_page().unwrap();

        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].title.as_deref(), Some("42"));
        assert_eq!(page.posts[0].content, None);
    }

    #[test]
    fn malformed_meta_is_dropped() {
        let raw = RawIdeasPage(json!({ "data": [], "meta": { "current_page": "one" } }));
        let page = raw.into_page().unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.meta, None);
    }
}
