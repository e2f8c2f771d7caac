//! Fetch/render cycle for the ideas listing.

use crate::domain::query::QueryState;
use crate::dto::ideas::{IdeaCard, IdeasPageData, PaginationView, ResultSummary};
use crate::forms::controls::{ControlsForm, ControlsPayload};
use crate::repository::IdeaReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches the page described by `state` and prepares it for rendering.
///
/// A body without a `data` array is reported as
/// [`ServiceError::InvalidFormat`] rather than a fetch failure.
pub async fn load_ideas_page<R>(repo: &R, state: QueryState) -> ServiceResult<IdeasPageData>
where
    R: IdeaReader + ?Sized,
{
    let raw = repo.list_ideas(&state).await.map_err(|err| {
        log::error!("Failed to fetch ideas for {}: {err}", state.encode());
        err
    })?;

    let page = raw.into_page().map_err(|err| {
        log::error!("Ideas API returned an unexpected body: {err}");
        err
    })?;

    let ideas = page.posts.iter().map(IdeaCard::from).collect();
    let pagination = page.meta.map(|meta| PaginationView::new(state, meta));
    let summary = page.meta.as_ref().and_then(ResultSummary::from_meta);

    Ok(IdeasPageData {
        ideas,
        pagination,
        summary,
    })
}

/// Resolves submitted controls into the next listing state.
pub fn apply_controls(form: ControlsForm) -> ServiceResult<QueryState> {
    let payload = ControlsPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected listing controls: {err}");
        ServiceError::Form(err.to_string())
    })?;

    Ok(payload.resolve())
}
