use serde::Deserialize;
use validator::Validate;

use crate::NAV_ITEMS;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct NavForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub label: String,
    /// Local path to return to after highlighting the item.
    #[serde(default)]
    pub back: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavSelection {
    pub label: &'static str,
    pub back: String,
}

/// Only same-site absolute paths are followed. Browsers read `/\` as `//`.
fn local_path(path: Option<&str>) -> String {
    match path.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(|c| c.is_ascii_control()) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

impl TryFrom<NavForm> for NavSelection {
    type Error = FormError;

    fn try_from(form: NavForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let label = NAV_ITEMS
            .into_iter()
            .find(|item| *item == form.label.trim())
            .ok_or(FormError::UnknownNavItem)?;

        Ok(Self {
            label,
            back: local_path(form.back.as_deref()),
        })
    }
}
