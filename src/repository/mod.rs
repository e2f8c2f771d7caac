use crate::domain::query::QueryState;
use crate::dto::api::RawIdeasPage;
use crate::repository::errors::FetchResult;

pub mod errors;
pub mod http;

pub use http::HttpIdeaRepository;

/// Source of idea pages.
///
/// One call issues one request; implementations do not retry, cache, or
/// de-duplicate overlapping calls.
pub trait IdeaReader {
    fn list_ideas(
        &self,
        query: &QueryState,
    ) -> impl Future<Output = FetchResult<RawIdeasPage>> + Send;
}
