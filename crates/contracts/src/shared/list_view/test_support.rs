use super::{require_non_empty, ListRecord, ListViewError, RecordDraft, RecordId};
use chrono::{NaiveDate, NaiveDateTime};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: RecordId,
    pub title: String,
    pub owner: String,
    pub state: String,
    pub created: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct TicketDraft {
    pub title: String,
    pub owner: String,
}

impl RecordDraft<Ticket> for TicketDraft {
    fn validate(&self) -> Result<(), ListViewError> {
        require_non_empty("title", &self.title)
    }

    fn build(self, id: RecordId, today: NaiveDate) -> Ticket {
        Ticket {
            id,
            title: self.title,
            owner: self.owner,
            state: "open".into(),
            created: today.and_hms_opt(0, 0, 0),
        }
    }
}

impl ListRecord for Ticket {
    type Draft = TicketDraft;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "title" => Some(Cow::Borrowed(&self.title)),
            "owner" => Some(Cow::Borrowed(&self.owner)),
            "state" => Some(Cow::Borrowed(&self.state)),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.created
    }
}

pub fn ticket(id: u32, title: &str, owner: &str, state: &str) -> Ticket {
    Ticket {
        id: RecordId(id),
        title: title.into(),
        owner: owner.into(),
        state: state.into(),
        created: None,
    }
}

pub fn tickets(count: u32) -> Vec<Ticket> {
    (1..=count)
        .map(|i| ticket(i, &format!("Ticket {i}"), "ana", "open"))
        .collect()
}
