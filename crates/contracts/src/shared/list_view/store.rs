use super::error::ListViewError;
use super::record::{ListRecord, RecordDraft, RecordId};
use chrono::NaiveDate;

/// Ordered in-memory records of one kind plus the id counter for new ones.
///
/// The counter only moves forward: deleting the highest id never frees it
/// for reuse, and an empty store starts at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: RecordId(1),
        }
    }
}

impl<T: ListRecord> RecordStore<T> {
    pub fn seeded(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(|r| r.record_id())
            .max()
            .map_or(RecordId(1), |max| max.next());
        Self { records, next_id }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    /// Validates and appends a new record, returning its id.
    pub fn insert(&mut self, draft: T::Draft, today: NaiveDate) -> Result<RecordId, ListViewError> {
        draft.validate()?;
        let id = self.next_id;
        self.next_id = id.next();
        self.records.push(draft.build(id, today));
        Ok(id)
    }

    /// Removes the record with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let pos = self.records.iter().position(|r| r.record_id() == id)?;
        Some(self.records.remove(pos))
    }

    /// Swaps in an edited copy at the same position.
    pub fn replace(&mut self, record: T) -> Result<(), ListViewError> {
        let id = record.record_id();
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.record_id() == id)
            .ok_or(ListViewError::RecordNotFound(id))?;
        *slot = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::{tickets, Ticket, TicketDraft};

    fn today() -> NaiveDate {
        crate::shared::dates::ymd(2024, 6, 1)
    }

    fn draft(title: &str) -> TicketDraft {
        TicketDraft {
            title: title.into(),
            owner: "ben".into(),
        }
    }

    #[test]
    fn test_seeded_counter_continues_after_max() {
        let mut store = RecordStore::seeded(tickets(5));
        assert_eq!(store.next_id(), RecordId(6));
        let id = store.insert(draft("Review firewall"), today()).unwrap();
        assert_eq!(id, RecordId(6));
        assert_eq!(store.records().last().map(|t| t.title.as_str()), Some("Review firewall"));
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let mut store: RecordStore<Ticket> = RecordStore::seeded(Vec::new());
        assert_eq!(store.insert(draft("First"), today()), Ok(RecordId(1)));
        assert_eq!(RecordStore::<Ticket>::default().next_id(), RecordId(1));
    }

    #[test]
    fn test_deleted_max_id_is_not_reused() {
        let mut store = RecordStore::seeded(tickets(3));
        assert!(store.remove(RecordId(3)).is_some());
        assert_eq!(store.insert(draft("Next"), today()), Ok(RecordId(4)));
    }

    #[test]
    fn test_invalid_draft_leaves_counter_untouched() {
        let mut store = RecordStore::seeded(tickets(2));
        assert_eq!(
            store.insert(draft("  "), today()),
            Err(ListViewError::MissingField("title"))
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id(), RecordId(3));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = RecordStore::seeded(tickets(3));
        assert!(store.remove(RecordId(2)).is_some());
        assert!(store.remove(RecordId(2)).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = RecordStore::seeded(tickets(3));
        let mut edited = store.get(RecordId(2)).cloned().unwrap();
        edited.state = "closed".into();
        store.replace(edited).unwrap();
        assert_eq!(store.records()[1].state, "closed");

        let ghost = crate::shared::list_view::test_support::ticket(9, "x", "y", "open");
        assert_eq!(store.replace(ghost), Err(ListViewError::RecordNotFound(RecordId(9))));
    }
}
