//! Reactive wrapper around `contracts::shared::list_view::ListViewState`.
//!
//! Pages hold one `ListViewModel` and feed every UI event through
//! [`ListViewModel::dispatch`]; the visible page is derived from the state
//! on each read.

use chrono::{Local, NaiveDate};
use contracts::shared::list_view::{
    DialogState, ListEvent, ListPage, ListRecord, ListViewConfig, ListViewState,
};
use leptos::prelude::*;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct ListViewModel<T: ListRecord + Send + Sync + 'static> {
    pub state: RwSignal<ListViewState<T>>,
    /// Used in log messages only.
    name: &'static str,
}

impl<T: ListRecord + Send + Sync + 'static> Clone for ListViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListRecord + Send + Sync + 'static> Copy for ListViewModel<T> {}

impl<T: ListRecord + Send + Sync + 'static> ListViewModel<T> {
    pub fn new(name: &'static str, config: ListViewConfig, records: Vec<T>) -> Self {
        Self {
            state: RwSignal::new(ListViewState::new(config, records)),
            name,
        }
    }

    /// Applies one event. On error the state is left as it was and the error
    /// is logged; returns whether the transition happened.
    pub fn dispatch(&self, event: ListEvent<T>) -> bool {
        let result = self
            .state
            .with_untracked(|state| state.apply(event, today()));
        match result {
            Ok(next) => {
                self.state.set(next);
                true
            }
            Err(e) => {
                log::warn!("{}: {}", self.name, e);
                false
            }
        }
    }

    pub fn page(&self) -> Signal<ListPage<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.view()))
    }

    pub fn dialog(&self) -> Signal<DialogState<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.dialog.clone()))
    }

    pub fn query(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.criteria.query.clone()))
    }

    pub fn selection(&self, field: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.criteria.selection(field).to_string()))
    }

    pub fn active_filters_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active_filters_count()))
    }

    pub fn page_size_options(&self) -> Vec<usize> {
        self.state
            .with_untracked(|s| s.config.page_size_options.clone())
    }

    pub fn dismiss(&self) {
        self.dispatch(ListEvent::Dismiss);
    }

    pub fn on_query_change(&self) -> Callback<String> {
        let this = *self;
        Callback::new(move |query| {
            this.dispatch(ListEvent::SetQuery(query));
        })
    }

    pub fn on_filter_change(&self, field: &'static str) -> Callback<String> {
        let this = *self;
        Callback::new(move |value| {
            this.dispatch(ListEvent::SetFilter {
                field: field.to_string(),
                value,
            });
        })
    }

    pub fn on_page_change(&self) -> Callback<usize> {
        let this = *self;
        Callback::new(move |page| {
            this.dispatch(ListEvent::GoToPage(page));
        })
    }

    pub fn on_page_size_change(&self) -> Callback<usize> {
        let this = *self;
        Callback::new(move |size| {
            this.dispatch(ListEvent::SetPageSize(size));
        })
    }
}
