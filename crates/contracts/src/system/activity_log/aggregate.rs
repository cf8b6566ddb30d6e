use crate::shared::list_view::{ListRecord, ListViewConfig, RecordId, SortRule, LOG_PAGE_SIZES};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;

pub mod fields {
    pub const USER: &str = "user";
    pub const ACTION: &str = "action";
    pub const CATEGORY: &str = "category";
    pub const IP_ADDRESS: &str = "ip_address";
    pub const SEVERITY: &str = "severity";
    pub const DETAILS: &str = "details";
}

pub const LOG_CATEGORIES: &[&str] = &[
    "Authentication",
    "Client Management",
    "Assessment",
    "Reports",
    "Security",
    "System",
    "User Management",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Filter key; matches the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    pub fn all() -> [Severity; 3] {
        [Severity::Info, Severity::Warning, Severity::Error]
    }

    pub fn keys() -> Vec<&'static str> {
        Self::all().iter().map(|s| s.as_str()).collect()
    }
}

/// One audit trail line. `user` is a display string, not a link to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: RecordId,
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub action: String,
    pub category: String,
    pub ip_address: String,
    pub severity: Severity,
    pub details: String,
}

impl ListRecord for ActivityLogEntry {
    /// Log entries are never added from the UI.
    type Draft = Infallible;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.action, self.timestamp.format("%Y-%m-%d %H:%M"))
    }

    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            fields::USER => Some(Cow::Borrowed(&self.user)),
            fields::ACTION => Some(Cow::Borrowed(&self.action)),
            fields::CATEGORY => Some(Cow::Borrowed(&self.category)),
            fields::IP_ADDRESS => Some(Cow::Borrowed(&self.ip_address)),
            fields::SEVERITY => Some(Cow::Borrowed(self.severity.as_str())),
            fields::DETAILS => Some(Cow::Borrowed(&self.details)),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.timestamp)
    }
}

pub fn list_config() -> ListViewConfig {
    ListViewConfig::new(&[fields::USER, fields::ACTION, fields::DETAILS, fields::IP_ADDRESS])
        .with_filter(fields::SEVERITY, "Severity", &Severity::keys())
        .with_filter(fields::CATEGORY, "Category", LOG_CATEGORIES)
        .with_date_filter()
        .sorted_by(SortRule::TimestampDesc)
        .with_page_sizes(LOG_PAGE_SIZES, 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::ymd;
    use crate::shared::list_view::{DateRange, ListEvent, ListViewState};
    use crate::system::activity_log::mock::seed_activity_log;

    fn state() -> ListViewState<ActivityLogEntry> {
        ListViewState::new(list_config(), seed_activity_log())
    }

    #[test]
    fn test_error_filter_newest_first() {
        let state = state()
            .apply(
                ListEvent::SetFilter {
                    field: fields::SEVERITY.into(),
                    value: "error".into(),
                },
                ymd(2024, 6, 1),
            )
            .unwrap();
        let ids: Vec<u32> = state.view().items.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![9, 7]);
    }

    #[test]
    fn test_display_order_is_non_increasing() {
        let page = state().view();
        assert_eq!(page.total_count, 12);
        assert_eq!(page.items.len(), 10);
        for pair in page.items.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_date_range_includes_whole_end_day() {
        let day = Some(ymd(2024, 1, 14));
        let state = state()
            .apply(
                ListEvent::SetDateRange(DateRange::new(day, day)),
                ymd(2024, 6, 1),
            )
            .unwrap();
        let page = state.view();
        let ids: Vec<u32> = page.items.iter().map(|e| e.id.value()).collect();
        // 23:58 on the end day is still inside the range.
        assert_eq!(ids, vec![3, 5, 4, 7]);
    }

    #[test]
    fn test_search_covers_ip_address() {
        let state = state()
            .apply(ListEvent::SetQuery("203.0.113".into()), ymd(2024, 6, 1))
            .unwrap();
        let ids: Vec<u32> = state.view().items.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_severity_serializes_as_filter_key() {
        for severity in Severity::all() {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json, format!("\"{}\"", severity.as_str()));
        }
    }
}
