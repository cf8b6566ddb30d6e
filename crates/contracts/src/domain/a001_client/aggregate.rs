use crate::shared::list_view::{
    require_non_empty, ListRecord, ListViewConfig, ListViewError, RecordDraft, RecordId,
    STANDARD_PAGE_SIZES,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Field names understood by [`Client::field_value`].
pub mod fields {
    pub const NAME: &str = "name";
    pub const BUSINESS_TYPE: &str = "business_type";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const CONTACT_PERSON: &str = "contact_person";
    pub const STATUS: &str = "status";
}

pub const BUSINESS_TYPES: &[&str] = &[
    "Retail",
    "Healthcare",
    "Restaurant",
    "Professional Services",
    "Non-profit",
];

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    PendingReview,
    PendingApproval,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::PendingReview => "Pending Review",
            ClientStatus::PendingApproval => "Pending Approval",
        }
    }

    pub fn all() -> [ClientStatus; 3] {
        [
            ClientStatus::Active,
            ClientStatus::PendingReview,
            ClientStatus::PendingApproval,
        ]
    }

    pub fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|s| s.as_str()).collect()
    }
}

// ============================================================================
// Security score
// ============================================================================

/// 0–100 assessment result. The raw value 0 is the "not assessed yet"
/// sentinel, not a real score, and must be skipped by any aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityScore(u8);

impl SecurityScore {
    pub const UNASSESSED: SecurityScore = SecurityScore(0);

    /// Values above 100 are capped.
    pub fn new(raw: u8) -> Self {
        Self(raw.min(100))
    }

    pub fn value(&self) -> Option<u8> {
        (self.0 > 0).then_some(self.0)
    }

    pub fn is_assessed(&self) -> bool {
        self.0 > 0
    }

    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.value().map(RiskLevel::from_score)
    }

    pub fn label(&self) -> String {
        match self.value() {
            Some(v) => v.to_string(),
            None => "Not assessed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => RiskLevel::Low,
            70..=84 => RiskLevel::Moderate,
            50..=69 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Low => "Low",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub business_type: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_person: String,
    pub consultant_count: u32,
    pub security_score: SecurityScore,
    pub status: ClientStatus,
    pub join_date: NaiveDate,
}

impl ListRecord for Client {
    type Draft = ClientDraft;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            fields::NAME => Some(Cow::Borrowed(&self.name)),
            fields::BUSINESS_TYPE => Some(Cow::Borrowed(&self.business_type)),
            fields::EMAIL => Some(Cow::Borrowed(&self.email)),
            fields::PHONE => Some(Cow::Borrowed(&self.phone)),
            fields::ADDRESS => Some(Cow::Borrowed(&self.address)),
            fields::CONTACT_PERSON => Some(Cow::Borrowed(&self.contact_person)),
            fields::STATUS => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Input of the "Add client" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub business_type: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_person: String,
}

impl RecordDraft<Client> for ClientDraft {
    fn validate(&self) -> Result<(), ListViewError> {
        require_non_empty(fields::NAME, &self.name)?;
        require_non_empty(fields::BUSINESS_TYPE, &self.business_type)?;
        require_non_empty(fields::EMAIL, &self.email)
    }

    fn build(self, id: RecordId, today: NaiveDate) -> Client {
        Client {
            id,
            name: self.name,
            business_type: self.business_type,
            email: self.email,
            phone: self.phone,
            address: self.address,
            contact_person: self.contact_person,
            consultant_count: 0,
            security_score: SecurityScore::UNASSESSED,
            status: ClientStatus::PendingReview,
            join_date: today,
        }
    }
}

pub fn list_config() -> ListViewConfig {
    ListViewConfig::new(&[
        fields::NAME,
        fields::EMAIL,
        fields::CONTACT_PERSON,
        fields::BUSINESS_TYPE,
    ])
    .with_filter(fields::STATUS, "Status", &ClientStatus::labels())
    .with_filter(fields::BUSINESS_TYPE, "Business type", BUSINESS_TYPES)
    .with_page_sizes(STANDARD_PAGE_SIZES, 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::mock::seed_clients;
    use crate::shared::dates::ymd;
    use crate::shared::list_view::{ListEvent, ListViewState, FILTER_ALL};

    fn state() -> ListViewState<Client> {
        ListViewState::new(list_config(), seed_clients())
    }

    fn set_filter(field: &str, value: &str) -> ListEvent<Client> {
        ListEvent::SetFilter {
            field: field.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_status_filter_keeps_original_order() {
        let today = ymd(2024, 6, 1);
        let state = state()
            .apply(set_filter(fields::STATUS, "Active"), today)
            .and_then(|s| s.apply(set_filter(fields::BUSINESS_TYPE, FILTER_ALL), today))
            .and_then(|s| s.apply(ListEvent::SetQuery(String::new()), today))
            .unwrap();
        let page = state.view();
        let ids: Vec<u32> = page.items.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert!(page.items.iter().all(|c| c.status == ClientStatus::Active));
    }

    #[test]
    fn test_search_covers_contact_person() {
        let state = state()
            .apply(ListEvent::SetQuery("priya".into()), ymd(2024, 6, 1))
            .unwrap();
        let names: Vec<String> = state.view().items.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Harbor Grill".to_string()]);
    }

    #[test]
    fn test_added_client_defaults() {
        let today = ymd(2024, 6, 1);
        let draft = ClientDraft {
            name: "Riverside Vet Clinic".into(),
            business_type: "Healthcare".into(),
            email: "office@riversidevet.example".into(),
            ..Default::default()
        };
        let state = state()
            .apply(ListEvent::OpenAdd, today)
            .and_then(|s| s.apply(ListEvent::ConfirmAdd(draft), today))
            .and_then(|s| s.apply(ListEvent::SetQuery("riverside".into()), today))
            .unwrap();
        let page = state.view();
        assert_eq!(page.total_count, 1);
        let client = &page.items[0];
        assert_eq!(client.id, RecordId(6));
        assert_eq!(client.status, ClientStatus::PendingReview);
        assert_eq!(client.join_date, today);
        assert!(!client.security_score.is_assessed());
    }

    #[test]
    fn test_draft_requires_name_type_and_email() {
        let mut draft = ClientDraft {
            name: "Acme".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ListViewError::MissingField(fields::BUSINESS_TYPE))
        );
        draft.business_type = "Retail".into();
        assert_eq!(draft.validate(), Err(ListViewError::MissingField(fields::EMAIL)));
        draft.email = "not-an-email".into();
        assert_eq!(draft.validate(), Ok(()), "format is not checked");
    }

    #[test]
    fn test_security_score_sentinel() {
        assert_eq!(SecurityScore::UNASSESSED.value(), None);
        assert_eq!(SecurityScore::UNASSESSED.label(), "Not assessed");
        assert_eq!(SecurityScore::new(250).value(), Some(100));
        assert_eq!(SecurityScore::new(72).risk_level(), Some(RiskLevel::Moderate));
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(85), RiskLevel::Low);
    }
}
