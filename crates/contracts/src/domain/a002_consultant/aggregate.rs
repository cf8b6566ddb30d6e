use crate::shared::list_view::{
    require_non_empty, ListRecord, ListViewConfig, ListViewError, RecordDraft, RecordId,
    STANDARD_PAGE_SIZES,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
    pub const STATUS: &str = "status";
    pub const AFFILIATION: &str = "affiliation";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultantRole {
    StudentConsultant,
    FacultyAdvisor,
    SeniorConsultant,
}

impl ConsultantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultantRole::StudentConsultant => "Student Consultant",
            ConsultantRole::FacultyAdvisor => "Faculty Advisor",
            ConsultantRole::SeniorConsultant => "Senior Consultant",
        }
    }

    pub fn all() -> [ConsultantRole; 3] {
        [
            ConsultantRole::StudentConsultant,
            ConsultantRole::FacultyAdvisor,
            ConsultantRole::SeniorConsultant,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.as_str() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|r| r.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultantStatus {
    Active,
    OnLeave,
    Inactive,
}

impl ConsultantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultantStatus::Active => "Active",
            ConsultantStatus::OnLeave => "On Leave",
            ConsultantStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> [ConsultantStatus; 3] {
        [
            ConsultantStatus::Active,
            ConsultantStatus::OnLeave,
            ConsultantStatus::Inactive,
        ]
    }

    pub fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|s| s.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: ConsultantRole,
    pub status: ConsultantStatus,
    pub client_count: u32,
    pub affiliation: String,
    pub join_date: NaiveDate,
}

impl ListRecord for Consultant {
    type Draft = ConsultantDraft;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            fields::NAME => Some(Cow::Borrowed(&self.name)),
            fields::EMAIL => Some(Cow::Borrowed(&self.email)),
            fields::ROLE => Some(Cow::Borrowed(self.role.as_str())),
            fields::STATUS => Some(Cow::Borrowed(self.status.as_str())),
            fields::AFFILIATION => Some(Cow::Borrowed(&self.affiliation)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantDraft {
    pub name: String,
    pub email: String,
    pub role: Option<ConsultantRole>,
    pub affiliation: String,
}

impl RecordDraft<Consultant> for ConsultantDraft {
    fn validate(&self) -> Result<(), ListViewError> {
        require_non_empty(fields::NAME, &self.name)?;
        if self.role.is_none() {
            return Err(ListViewError::MissingField(fields::ROLE));
        }
        require_non_empty(fields::EMAIL, &self.email)
    }

    fn build(self, id: RecordId, today: NaiveDate) -> Consultant {
        Consultant {
            id,
            name: self.name,
            email: self.email,
            role: self.role.unwrap_or(ConsultantRole::StudentConsultant),
            status: ConsultantStatus::Active,
            client_count: 0,
            affiliation: self.affiliation,
            join_date: today,
        }
    }
}

pub fn list_config() -> ListViewConfig {
    ListViewConfig::new(&[fields::NAME, fields::EMAIL, fields::AFFILIATION])
        .with_filter(fields::ROLE, "Role", &ConsultantRole::labels())
        .with_filter(fields::STATUS, "Status", &ConsultantStatus::labels())
        .with_page_sizes(STANDARD_PAGE_SIZES, 5)
}

/// Overview widget: free-text only, matching what the card shows.
pub fn widget_config() -> ListViewConfig {
    ListViewConfig::new(&[fields::NAME, fields::AFFILIATION, fields::ROLE])
        .with_page_sizes(STANDARD_PAGE_SIZES, 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_consultant::mock::seed_consultants;
    use crate::shared::dates::ymd;
    use crate::shared::list_view::{ListEvent, ListViewState};

    #[test]
    fn test_role_and_status_filters_combine() {
        let today = ymd(2024, 6, 1);
        let state = ListViewState::new(list_config(), seed_consultants())
            .apply(
                ListEvent::SetFilter {
                    field: fields::ROLE.into(),
                    value: "Student Consultant".into(),
                },
                today,
            )
            .and_then(|s| {
                s.apply(
                    ListEvent::SetFilter {
                        field: fields::STATUS.into(),
                        value: "Active".into(),
                    },
                    today,
                )
            })
            .unwrap();
        let page = state.view();
        assert!(page.total_count > 0);
        for c in &page.items {
            assert_eq!(c.role, ConsultantRole::StudentConsultant);
            assert_eq!(c.status, ConsultantStatus::Active);
        }
    }

    #[test]
    fn test_draft_requires_role() {
        let draft = ConsultantDraft {
            name: "Lee Park".into(),
            email: "lpark@university.example".into(),
            role: None,
            affiliation: String::new(),
        };
        assert_eq!(draft.validate(), Err(ListViewError::MissingField(fields::ROLE)));

        let draft = ConsultantDraft {
            role: ConsultantRole::from_label("Faculty Advisor"),
            ..draft
        };
        assert_eq!(draft.validate(), Ok(()));
        let built = draft.build(RecordId(42), ymd(2024, 6, 1));
        assert_eq!(built.role, ConsultantRole::FacultyAdvisor);
        assert_eq!(built.status, ConsultantStatus::Active);
        assert_eq!(built.client_count, 0);
    }

    #[test]
    fn test_widget_search_matches_role_label() {
        let state = ListViewState::new(widget_config(), seed_consultants())
            .apply(ListEvent::SetQuery("faculty".into()), ymd(2024, 6, 1))
            .unwrap();
        let page = state.view();
        assert!(page.total_count > 0);
        assert!(page.items.iter().all(|c| {
            c.role == ConsultantRole::FacultyAdvisor
                || c.affiliation.to_lowercase().contains("faculty")
        }));
    }
}
