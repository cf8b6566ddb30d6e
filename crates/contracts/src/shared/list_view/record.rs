use super::error::ListViewError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Integer identifier assigned by a [`super::RecordStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl RecordId {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record contracts
// ============================================================================

/// Form input for an add-record dialog.
pub trait RecordDraft<R> {
    /// Advisory required-field check; the UI disables "confirm" while it fails.
    fn validate(&self) -> Result<(), ListViewError>;

    /// Stamps the store-assigned id and creation date onto the draft.
    fn build(self, id: RecordId, today: NaiveDate) -> R;
}

/// Record kinds that cannot be added from the UI use `Infallible` as their draft.
impl<R> RecordDraft<R> for Infallible {
    fn validate(&self) -> Result<(), ListViewError> {
        match *self {}
    }

    fn build(self, _id: RecordId, _today: NaiveDate) -> R {
        match self {}
    }
}

/// A row that can flow through the list view pipeline.
pub trait ListRecord: Clone {
    type Draft: RecordDraft<Self>;

    fn record_id(&self) -> RecordId;

    /// Name echoed by the delete confirmation dialog.
    fn display_name(&self) -> String;

    /// Named field accessor used by free-text search and categorical filters.
    /// Unknown field names return `None` and never match.
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>>;

    /// Sort/date-range key. Only time-ordered kinds return one.
    fn timestamp(&self) -> Option<NaiveDateTime> {
        None
    }
}

pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ListViewError> {
    if value.trim().is_empty() {
        Err(ListViewError::MissingField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("name", "Acme"), Ok(()));
        assert_eq!(
            require_non_empty("name", "   "),
            Err(ListViewError::MissingField("name"))
        );
    }

    #[test]
    fn test_record_id_display_and_next() {
        let id = RecordId(41);
        assert_eq!(id.next(), RecordId(42));
        assert_eq!(id.to_string(), "41");
    }
}
