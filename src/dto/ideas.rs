//! View models handed to the listing template.

use serde::Serialize;

use crate::PAGE_SIZE_OPTIONS;
use crate::domain::idea::{PageMeta, PostSummary};
use crate::domain::query::{Command, QueryState};
use crate::domain::types::{PageNumber, SortKey};
use crate::pagination::{PageLabel, page_window};

/// Card rendered for a single idea.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct IdeaCard {
    pub title: String,
    pub published: String,
    /// `None` means the template shows the fallback image.
    pub image_url: Option<String>,
}

impl From<&PostSummary> for IdeaCard {
    fn from(post: &PostSummary) -> Self {
        Self {
            title: post.display_title().to_string(),
            published: post.display_date(),
            image_url: post.thumbnail_url(),
        }
    }
}

/// Entry of the pagination bar; ellipses carry no link.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub label: PageLabel,
    pub href: Option<String>,
    pub current: bool,
}

/// Pagination bar. Arrow links are `None` when disabled.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationView {
    pub first: Option<String>,
    pub previous: Option<String>,
    pub pages: Vec<PageLink>,
    pub next: Option<String>,
    pub last: Option<String>,
}

fn page_href(state: QueryState, page: u32) -> Option<String> {
    let page = PageNumber::new(page).ok()?;
    Some(state.apply(Command::GoToPage(page)).href())
}

impl PaginationView {
    pub fn new(state: QueryState, meta: PageMeta) -> Self {
        let PageMeta {
            current_page,
            last_page,
            ..
        } = meta.normalized();

        let pages = page_window(current_page, last_page)
            .into_iter()
            .map(|label| match label {
                PageLabel::Page(page) => PageLink {
                    label,
                    href: page_href(state, page),
                    current: page == current_page,
                },
                PageLabel::Ellipsis => PageLink {
                    label,
                    href: None,
                    current: false,
                },
            })
            .collect();

        let has_previous = current_page > 1;
        let has_next = current_page < last_page;

        Self {
            first: has_previous.then(|| page_href(state, 1)).flatten(),
            previous: has_previous
                .then(|| page_href(state, current_page.min(last_page.saturating_add(1)) - 1))
                .flatten(),
            pages,
            next: has_next.then(|| page_href(state, current_page + 1)).flatten(),
            last: has_next.then(|| page_href(state, last_page)).flatten(),
        }
    }
}

/// `Showing <from> - <to> of <total>` line.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ResultSummary {
    pub from: u32,
    pub to: u32,
    pub total: u32,
}

impl ResultSummary {
    pub fn from_meta(meta: &PageMeta) -> Option<Self> {
        Some(Self {
            from: meta.from?,
            to: meta.to?,
            total: meta.total?,
        })
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Page-size and sort selects, prefilled with the current state.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ControlsView {
    /// Canonical query of the page the controls are submitted from.
    pub current: String,
    pub size: u32,
    pub sort: &'static str,
    pub page_sizes: Vec<u32>,
    pub sort_options: Vec<SortOption>,
}

impl ControlsView {
    pub fn new(state: QueryState) -> Self {
        let size = state.size.get();

        let mut page_sizes = PAGE_SIZE_OPTIONS.to_vec();
        if !page_sizes.contains(&size) {
            page_sizes.push(size);
            page_sizes.sort_unstable();
        }

        Self {
            current: state.encode(),
            size,
            sort: state.sort.as_str(),
            page_sizes,
            sort_options: SortKey::ALL
                .into_iter()
                .map(|key| SortOption {
                    value: key.as_str(),
                    label: key.label(),
                })
                .collect(),
        }
    }
}

/// Data required to render the listing template.
#[derive(Debug, Default, Serialize)]
pub struct IdeasPageData {
    pub ideas: Vec<IdeaCard>,
    /// Hidden when the API reports no pagination meta.
    pub pagination: Option<PaginationView>,
    pub summary: Option<ResultSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PageSize;

    fn meta(current_page: u32, last_page: u32) -> PageMeta {
        PageMeta {
            current_page,
            last_page,
            from: None,
            to: None,
            total: None,
        }
    }

    fn state(page: u32) -> QueryState {
        QueryState::new(
            PageNumber::new(page).unwrap(),
            PageSize::new(20).unwrap(),
            SortKey::Oldest,
        )
    }

    #[test]
    fn links_keep_size_and_sort() {
        let view = PaginationView::new(state(5), meta(5, 10));

        assert_eq!(
            view.previous.as_deref(),
            Some("/?page=4&size=20&sort=published_at")
        );
        assert_eq!(
            view.last.as_deref(),
            Some("/?page=10&size=20&sort=published_at")
        );

        let current: Vec<_> = view.pages.iter().filter(|link| link.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].label, PageLabel::Page(5));
        assert!(
            view.pages
                .iter()
                .filter(|link| link.label == PageLabel::Ellipsis)
                .all(|link| link.href.is_none())
        );
    }

    #[test]
    fn arrows_are_disabled_at_the_edges() {
        let first = PaginationView::new(state(1), meta(1, 3));
        assert_eq!(first.first, None);
        assert_eq!(first.previous, None);
        assert!(first.next.is_some());

        let last = PaginationView::new(state(3), meta(3, 3));
        assert!(last.previous.is_some());
        assert_eq!(last.next, None);
        assert_eq!(last.last, None);

        let only = PaginationView::new(state(1), meta(1, 1));
        assert_eq!(only.pages.len(), 1);
        assert!(only.first.is_none() && only.last.is_none());
    }

    #[test]
    fn previous_from_beyond_the_end_points_at_last_page() {
        let view = PaginationView::new(state(40), meta(40, 10));
        assert_eq!(
            view.previous.as_deref(),
            Some("/?page=10&size=20&sort=published_at")
        );
        assert_eq!(view.next, None);
    }

    #[test]
    fn summary_requires_all_counts() {
        let mut meta = meta(1, 3);
        assert_eq!(ResultSummary::from_meta(&meta), None);

        meta.from = Some(1);
        meta.to = Some(10);
        meta.total = Some(25);
        assert_eq!(
            ResultSummary::from_meta(&meta),
            Some(ResultSummary {
                from: 1,
                to: 10,
                total: 25
            })
        );
    }

    #[test]
    fn controls_offer_current_size() {
        let view = ControlsView::new(state(2));
        assert_eq!(view.current, "page=2&size=20&sort=published_at");
        assert_eq!(view.page_sizes, vec![10, 20, 50]);
        assert_eq!(view.sort, "published_at");
        assert_eq!(view.sort_options.len(), 2);

        let custom = QueryState::decode("size=35");
        assert_eq!(ControlsView::new(custom).page_sizes, vec![10, 20, 35, 50]);
    }
}
