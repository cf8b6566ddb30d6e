use super::config::ListViewConfig;
use super::criteria::{DateRange, FilterCriteria};
use super::error::ListViewError;
use super::page::{filter_sort_paginate, ListPage, PageWindow};
use super::record::{ListRecord, RecordId};
use super::store::RecordStore;
use chrono::NaiveDate;

/// Which overlay a list page shows. Targeted variants carry the record the
/// dialog was opened for; closing always drops it.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<T> {
    Closed,
    AddOpen,
    DeleteOpen(T),
    PermissionsOpen(T),
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        DialogState::Closed
    }
}

impl<T> DialogState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            DialogState::DeleteOpen(t) | DialogState::PermissionsOpen(t) => Some(t),
            DialogState::Closed | DialogState::AddOpen => None,
        }
    }
}

/// UI events a list page feeds into [`ListViewState::apply`].
pub enum ListEvent<T: ListRecord> {
    SetQuery(String),
    SetFilter { field: String, value: String },
    SetDateRange(DateRange),
    ResetFilters,
    GoToPage(usize),
    SetPageSize(usize),
    OpenAdd,
    OpenDelete(RecordId),
    OpenPermissions(RecordId),
    /// Cancel button, close icon or backdrop click.
    Dismiss,
    ConfirmAdd(T::Draft),
    ConfirmDelete,
    ConfirmUpdate(T),
}

/// Complete state of one list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState<T> {
    pub config: ListViewConfig,
    pub store: RecordStore<T>,
    pub criteria: FilterCriteria,
    pub window: PageWindow,
    pub dialog: DialogState<T>,
}

impl<T: ListRecord> ListViewState<T> {
    pub fn new(config: ListViewConfig, records: Vec<T>) -> Self {
        let window = PageWindow::first(config.default_page_size);
        Self {
            config,
            store: RecordStore::seeded(records),
            criteria: FilterCriteria::default(),
            window,
            dialog: DialogState::Closed,
        }
    }

    /// Derives the visible page. Recomputed on every call.
    pub fn view(&self) -> ListPage<T> {
        filter_sort_paginate(
            self.store.records(),
            &self.criteria,
            &self.config,
            self.window,
        )
    }

    pub fn active_filters_count(&self) -> usize {
        self.criteria.active_count()
    }

    /// Pure transition: returns the next state and leaves `self` untouched.
    ///
    /// Criteria and page size changes reset the page index to 0. Mutations
    /// never move the page index, so deleting the last row of the last page
    /// leaves an empty page behind.
    pub fn apply(&self, event: ListEvent<T>, today: NaiveDate) -> Result<Self, ListViewError> {
        let mut next = self.clone();
        match event {
            ListEvent::SetQuery(query) => {
                next.criteria.query = query;
                next.window.page_index = 0;
            }
            ListEvent::SetFilter { field, value } => {
                next.criteria.selections.insert(field, value);
                next.window.page_index = 0;
            }
            ListEvent::SetDateRange(range) => {
                next.criteria.date_range = range;
                next.window.page_index = 0;
            }
            ListEvent::ResetFilters => {
                next.criteria = FilterCriteria::default();
                next.window.page_index = 0;
            }
            ListEvent::GoToPage(page_index) => {
                next.window.page_index = page_index;
            }
            ListEvent::SetPageSize(size) => {
                if !self.config.supports_page_size(size) {
                    return Err(ListViewError::UnsupportedPageSize(size));
                }
                next.window = PageWindow::first(size);
            }
            ListEvent::OpenAdd => {
                next.dialog = DialogState::AddOpen;
            }
            ListEvent::OpenDelete(id) => {
                next.dialog = DialogState::DeleteOpen(self.target(id)?);
            }
            ListEvent::OpenPermissions(id) => {
                next.dialog = DialogState::PermissionsOpen(self.target(id)?);
            }
            ListEvent::Dismiss => {
                next.dialog = DialogState::Closed;
            }
            ListEvent::ConfirmAdd(draft) => {
                next.store.insert(draft, today)?;
                next.dialog = DialogState::Closed;
            }
            ListEvent::ConfirmDelete => match &self.dialog {
                DialogState::DeleteOpen(target) => {
                    next.store.remove(target.record_id());
                    next.dialog = DialogState::Closed;
                }
                DialogState::Closed => {}
                DialogState::AddOpen | DialogState::PermissionsOpen(_) => {
                    return Err(ListViewError::NoDialogTarget);
                }
            },
            ListEvent::ConfirmUpdate(record) => {
                match &self.dialog {
                    DialogState::PermissionsOpen(target)
                        if target.record_id() == record.record_id() => {}
                    _ => return Err(ListViewError::NoDialogTarget),
                }
                next.store.replace(record)?;
                next.dialog = DialogState::Closed;
            }
        }
        Ok(next)
    }

    fn target(&self, id: RecordId) -> Result<T, ListViewError> {
        self.store
            .get(id)
            .cloned()
            .ok_or(ListViewError::RecordNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::{ticket, tickets, Ticket, TicketDraft};
    use crate::shared::list_view::{SortRule, FILTER_ALL};

    fn today() -> NaiveDate {
        crate::shared::dates::ymd(2024, 6, 1)
    }

    fn config() -> ListViewConfig {
        ListViewConfig::new(&["title", "owner"]).with_filter("state", "State", &["open", "closed"])
    }

    fn state_with(records: Vec<Ticket>) -> ListViewState<Ticket> {
        ListViewState::new(config(), records)
    }

    fn step(state: &ListViewState<Ticket>, event: ListEvent<Ticket>) -> ListViewState<Ticket> {
        state.apply(event, today()).expect("transition should succeed")
    }

    #[test]
    fn test_criteria_changes_reset_page_index() {
        let state = state_with(tickets(12));
        let on_page_2 = step(&state, ListEvent::GoToPage(2));
        assert_eq!(on_page_2.window.page_index, 2);

        let events: Vec<ListEvent<Ticket>> = vec![
            ListEvent::SetQuery("ticket".into()),
            ListEvent::SetFilter {
                field: "state".into(),
                value: FILTER_ALL.into(),
            },
            ListEvent::SetDateRange(DateRange::default()),
            ListEvent::ResetFilters,
            ListEvent::SetPageSize(10),
        ];
        for event in events {
            assert_eq!(step(&on_page_2, event).window.page_index, 0);
        }
    }

    #[test]
    fn test_every_visible_record_satisfies_criteria() {
        let records = vec![
            ticket(1, "Patch VPN", "ana", "open"),
            ticket(2, "Patch mail", "ben", "closed"),
            ticket(3, "Audit VPN", "ana", "closed"),
            ticket(4, "Rotate VPN keys", "cy", "open"),
        ];
        let state = step(&state_with(records), ListEvent::SetQuery("vpn".into()));
        let state = step(
            &state,
            ListEvent::SetFilter {
                field: "state".into(),
                value: "open".into(),
            },
        );
        let page = state.view();
        assert_eq!(page.total_count, 2);
        for item in &page.items {
            assert!(state.criteria.matches(item, &state.config));
            assert_eq!(item.state, "open");
        }
    }

    #[test]
    fn test_second_page_of_seven_shows_two() {
        let state = step(&state_with(tickets(7)), ListEvent::GoToPage(1));
        let page = state.view();
        let ids: Vec<u32> = page.items.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![6, 7]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_add_then_search_finds_single_new_record() {
        let state = state_with(tickets(5));
        let state = step(&state, ListEvent::OpenAdd);
        assert_eq!(state.dialog, DialogState::AddOpen);

        let state = step(
            &state,
            ListEvent::ConfirmAdd(TicketDraft {
                title: "Harden SSH config".into(),
                owner: "dee".into(),
            }),
        );
        assert_eq!(state.dialog, DialogState::Closed);

        let state = step(&state, ListEvent::SetQuery("harden ssh".into()));
        let page = state.view();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, RecordId(6));
        assert_eq!(page.items[0].created, today().and_hms_opt(0, 0, 0));
    }

    #[test]
    fn test_invalid_add_keeps_dialog_open_and_state_intact() {
        let state = step(&state_with(tickets(2)), ListEvent::OpenAdd);
        let err = state
            .apply(ListEvent::ConfirmAdd(TicketDraft::default()), today())
            .unwrap_err();
        assert_eq!(err, ListViewError::MissingField("title"));
        assert_eq!(state.dialog, DialogState::AddOpen);
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_delete_dialog_flow_and_idempotence() {
        let state = state_with(tickets(3));
        let state = step(&state, ListEvent::OpenDelete(RecordId(2)));
        assert_eq!(
            state.dialog.target().map(|t| t.display_name()),
            Some("Ticket 2".to_string())
        );

        let state = step(&state, ListEvent::ConfirmDelete);
        assert_eq!(state.store.len(), 2);
        assert_eq!(state.dialog, DialogState::Closed);

        // Confirming again with nothing captured changes nothing.
        let again = step(&state, ListEvent::ConfirmDelete);
        assert_eq!(again, state);
    }

    #[test]
    fn test_delete_of_vanished_target_is_noop() {
        let state = step(&state_with(tickets(3)), ListEvent::OpenDelete(RecordId(3)));
        let mut vanished = state.clone();
        vanished.store.remove(RecordId(3));
        let state = step(&vanished, ListEvent::ConfirmDelete);
        assert_eq!(state.store.len(), 2);
        assert_eq!(state.dialog, DialogState::Closed);
    }

    #[test]
    fn test_open_dialog_for_unknown_record_fails() {
        let state = state_with(tickets(1));
        assert_eq!(
            state.apply(ListEvent::OpenDelete(RecordId(9)), today()),
            Err(ListViewError::RecordNotFound(RecordId(9)))
        );
    }

    #[test]
    fn test_dismiss_clears_target() {
        let state = step(&state_with(tickets(2)), ListEvent::OpenPermissions(RecordId(1)));
        assert!(state.dialog.is_open());
        let state = step(&state, ListEvent::Dismiss);
        assert_eq!(state.dialog, DialogState::Closed);
        assert!(state.dialog.target().is_none());
    }

    #[test]
    fn test_deleting_only_row_on_last_page_leaves_empty_page() {
        let state = step(&state_with(tickets(6)), ListEvent::GoToPage(1));
        assert_eq!(state.view().items.len(), 1);

        let state = step(&state, ListEvent::OpenDelete(RecordId(6)));
        let state = step(&state, ListEvent::ConfirmDelete);
        let page = state.view();
        assert_eq!(page.page_index, 1);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_unsupported_page_size_is_rejected() {
        let state = step(&state_with(tickets(3)), ListEvent::GoToPage(1));
        assert_eq!(
            state.apply(ListEvent::SetPageSize(7), today()),
            Err(ListViewError::UnsupportedPageSize(7))
        );
    }

    #[test]
    fn test_confirm_update_requires_matching_dialog() {
        let state = state_with(tickets(2));
        let mut edited = state.store.get(RecordId(1)).cloned().unwrap();
        edited.state = "closed".into();

        assert_eq!(
            state.apply(ListEvent::ConfirmUpdate(edited.clone()), today()),
            Err(ListViewError::NoDialogTarget)
        );

        let state = step(&state, ListEvent::OpenPermissions(RecordId(1)));
        let state = step(&state, ListEvent::ConfirmUpdate(edited));
        assert_eq!(state.store.records()[0].state, "closed");
        assert_eq!(state.dialog, DialogState::Closed);
    }

    #[test]
    fn test_confirm_delete_rejects_other_dialogs() {
        let state = state_with(tickets(2));
        let opened = vec![
            step(&state, ListEvent::OpenAdd),
            step(&state, ListEvent::OpenPermissions(RecordId(1))),
        ];
        for open in opened {
            assert_eq!(
                open.apply(ListEvent::ConfirmDelete, today()),
                Err(ListViewError::NoDialogTarget)
            );
            assert!(open.dialog.is_open());
            assert_eq!(open.store.len(), 2);
        }
    }

    #[test]
    fn test_new_records_append_without_resort() {
        let config = config().sorted_by(SortRule::InsertionOrder);
        let state = ListViewState::new(config, tickets(2));
        let state = step(
            &state,
            ListEvent::ConfirmAdd(TicketDraft {
                title: "Aardvark".into(),
                owner: "ana".into(),
            }),
        );
        let titles: Vec<String> = state.view().items.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Ticket 1", "Ticket 2", "Aardvark"]);
    }
}
