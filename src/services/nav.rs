//! Highlighted navigation item, remembered across reloads in a cookie.

use crate::forms::nav::{NavForm, NavSelection};
use crate::services::{ServiceError, ServiceResult};
use crate::{DEFAULT_NAV_ITEM, NAV_ITEMS};

/// Navigation item to highlight given the stored cookie value.
pub fn active_nav_item(stored: Option<&str>) -> &'static str {
    stored
        .and_then(|stored| NAV_ITEMS.into_iter().find(|item| *item == stored))
        .unwrap_or(DEFAULT_NAV_ITEM)
}

/// Validates a click on a navigation item.
pub fn select_nav_item(form: NavForm) -> ServiceResult<NavSelection> {
    NavSelection::try_from(form).map_err(|err| {
        log::warn!("Rejected navigation selection: {err}");
        ServiceError::Form(err.to_string())
    })
}
