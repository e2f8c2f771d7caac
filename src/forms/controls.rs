//! Page-size and sort controls shown above the idea list.

use serde::Deserialize;
use validator::Validate;

use crate::MAX_PAGE_SIZE;
use crate::domain::query::{Command, QueryState};
use crate::domain::types::{PageSize, SortKey};
use crate::forms::FormError;

/// Submitted controls together with the canonical query of the page they
/// were submitted from. Fields stay raw so bad input reaches the handler.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ControlsForm {
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub size: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub sort: String,
}

fn parse_page_size(raw: &str) -> Result<PageSize, FormError> {
    let size = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| FormError::InvalidPageSize)?;
    if size > MAX_PAGE_SIZE {
        return Err(FormError::InvalidPageSize);
    }
    PageSize::new(size).map_err(|_| FormError::InvalidPageSize)
}

/// Commands derived from the controls that actually changed.
#[derive(Debug, PartialEq, Eq)]
pub struct ControlsPayload {
    pub current: QueryState,
    pub commands: Vec<Command>,
}

impl TryFrom<ControlsForm> for ControlsPayload {
    type Error = FormError;

    fn try_from(form: ControlsForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let current = QueryState::decode(&form.current);
        let size = parse_page_size(&form.size)?;
        let sort = form
            .sort
            .trim()
            .parse::<SortKey>()
            .map_err(|_| FormError::InvalidSortKey)?;

        let mut commands = Vec::with_capacity(2);
        if size != current.size {
            commands.push(Command::SetPageSize(size));
        }
        if sort != current.sort {
            commands.push(Command::SetSort(sort));
        }

        Ok(Self { current, commands })
    }
}

impl ControlsPayload {
    /// State reached by applying every command to the submitting page's state.
    pub fn resolve(&self) -> QueryState {
        self.commands
            .iter()
            .fold(self.current, |state, command| state.apply(*command))
    }
}
