use std::collections::BTreeSet;

use serde::Serialize;

/// Number of pages shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 2;

/// Entry of the pagination bar. Serializes as the page number, or `null` for
/// an ellipsis, so templates can branch on truthiness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageLabel {
    Page(u32),
    Ellipsis,
}

/// Computes the page labels shown around `current_page`.
///
/// The first and last pages are always kept together with every page within
/// [`WINDOW_RADIUS`] of the current one. A gap of a single page is filled
/// with that page; any wider gap collapses into one ellipsis.
pub fn page_window(current_page: u32, last_page: u32) -> Vec<PageLabel> {
    let last_page = last_page.max(1);

    let mut kept = BTreeSet::from([1, last_page]);
    let window_start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
    let window_end = current_page.saturating_add(WINDOW_RADIUS).min(last_page);
    kept.extend(window_start..=window_end);

    let mut labels = Vec::with_capacity(kept.len() + 2);
    let mut previous: Option<u32> = None;

    for page in kept {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => labels.push(PageLabel::Page(prev + 1)),
                _ => labels.push(PageLabel::Ellipsis),
            }
        }
        labels.push(PageLabel::Page(page));
        previous = Some(page);
    }

    labels
}
