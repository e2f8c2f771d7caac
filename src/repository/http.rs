//! Ideas API client backed by `reqwest`.

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::domain::query::QueryState;
use crate::dto::api::RawIdeasPage;
use crate::repository::IdeaReader;
use crate::repository::errors::{FetchError, FetchResult};

/// Extra fields requested with every page.
const APPENDED_FIELDS: [&str; 2] = ["small_image", "medium_image"];

#[derive(Clone, Debug)]
pub struct HttpIdeaRepository {
    http: reqwest::Client,
    api_url: String,
}

impl HttpIdeaRepository {
    pub fn new(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Query parameters sent to the API for `query`.
    pub fn request_params(query: &QueryState) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page[number]", query.page.to_string()),
            ("page[size]", query.size.to_string()),
            ("sort", query.sort.as_str().to_string()),
        ];
        params.extend(
            APPENDED_FIELDS
                .iter()
                .map(|field| ("append[]", (*field).to_string())),
        );
        params
    }
}

/// Message for a non-success response: the body's `message` field when
/// present, otherwise one built from the status code.
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}

impl IdeaReader for HttpIdeaRepository {
    async fn list_ideas(&self, query: &QueryState) -> FetchResult<RawIdeasPage> {
        log::debug!("Fetching ideas from {} ({})", self.api_url, query.encode());

        let response = self
            .http
            .get(&self.api_url)
            .query(&Self::request_params(query))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let body = response.json::<Value>().await?;

        Ok(RawIdeasPage(body))
    }
}
