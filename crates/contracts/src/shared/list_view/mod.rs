//! List view pipeline shared by every admin list page.
//!
//! A page owns one [`ListViewState`]: an in-memory [`RecordStore`], the
//! current [`FilterCriteria`], a [`PageWindow`] and the [`DialogState`] of its
//! add/delete/permissions overlays. The visible rows are always derived as
//! filter → sort → paginate over the store, never cached.
//!
//! ```text
//! RecordStore ──filter(criteria)──► sort(rule) ──slice(window)──► ListPage
//! ```

mod config;
mod criteria;
mod error;
mod page;
mod record;
mod state;
mod store;

pub use config::{
    CategoricalFilter, ListViewConfig, SortRule, FILTER_ALL, LOG_PAGE_SIZES, STANDARD_PAGE_SIZES,
};
pub use criteria::{search_needle, DateRange, FilterCriteria};
pub use error::ListViewError;
pub use page::{filter_sort_paginate, ListPage, PageWindow};
pub use record::{require_non_empty, ListRecord, RecordDraft, RecordId};
pub use state::{DialogState, ListEvent, ListViewState};
pub use store::RecordStore;

#[cfg(test)]
mod test_support;
