//! Listing state carried in the URL query string.

use serde::Deserialize;

use crate::domain::types::{PageNumber, PageSize, SortKey};

/// The `(page, size, sort)` triple that fully determines what is fetched and
/// displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    pub page: PageNumber,
    pub size: PageSize,
    pub sort: SortKey,
}

/// User actions that move the listing to a new state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SetPageSize(PageSize),
    SetSort(SortKey),
    GoToPage(PageNumber),
}

/// Raw query parameters. Repeated keys are collected so that a duplicated
/// parameter never makes decoding fail; the first value wins.
#[derive(Debug, Default, Deserialize)]
struct RawQuery {
    #[serde(default)]
    page: Vec<String>,
    #[serde(default)]
    size: Vec<String>,
    #[serde(default)]
    sort: Vec<String>,
}

fn first_positive(values: &[String]) -> Option<u32> {
    values
        .first()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
}

impl QueryState {
    pub fn new(page: PageNumber, size: PageSize, sort: SortKey) -> Self {
        Self { page, size, sort }
    }

    /// Parses a URL query string. Never fails: missing or invalid values fall
    /// back to the listing defaults.
    pub fn decode(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let raw = match serde_html_form::from_str::<RawQuery>(query) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Ignoring undecodable query string {query:?}: {err}");
                RawQuery::default()
            }
        };

        let page = first_positive(&raw.page)
            .and_then(|value| PageNumber::new(value).ok())
            .unwrap_or_default();
        let size = first_positive(&raw.size)
            .and_then(|value| PageSize::new(value).ok())
            .unwrap_or_default();
        let sort = raw
            .sort
            .first()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        Self { page, size, sort }
    }

    /// Canonical query string: `page`, `size` and `sort`, in that order.
    ///
    /// Sort keys are a closed set of URL-safe tokens, so no escaping is
    /// required.
    pub fn encode(&self) -> String {
        format!(
            "page={}&size={}&sort={}",
            self.page,
            self.size,
            self.sort.as_str()
        )
    }

    /// Canonical listing URL for this state.
    pub fn href(&self) -> String {
        format!("/?{}", self.encode())
    }

    /// Returns the state produced by `command`. Changing the page size or the
    /// sort order starts over from the first page.
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::SetPageSize(size) => Self {
                page: PageNumber::default(),
                size,
                ..self
            },
            Command::SetSort(sort) => Self {
                page: PageNumber::default(),
                sort,
                ..self
            },
            Command::GoToPage(page) => Self { page, ..self },
        }
    }
}
