use super::config::{ListViewConfig, FILTER_ALL};
use super::record::ListRecord;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive calendar range. `end` covers the whole of its day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// An absent bound always matches; a missing timestamp fails any present bound.
    pub fn contains(&self, timestamp: Option<NaiveDateTime>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(day) = timestamp.map(|ts| ts.date()) else {
            return false;
        };
        self.start.map_or(true, |start| day >= start) && self.end.map_or(true, |end| day <= end)
    }
}

/// Lowercased search needle without surrounding whitespace. `None` when
/// nothing is left to search for.
pub fn search_needle(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// The user's current search/filter input for one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    /// Field name → selected value (or [`FILTER_ALL`]).
    pub selections: BTreeMap<String, String>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn selection(&self, field: &str) -> &str {
        self.selections
            .get(field)
            .map(String::as_str)
            .unwrap_or(FILTER_ALL)
    }

    /// Query as it is searched for; whitespace-only counts as empty.
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// Number of predicates that currently constrain the list (badge counter).
    pub fn active_count(&self) -> usize {
        let query = usize::from(!self.trimmed_query().is_empty());
        let selections = self
            .selections
            .values()
            .filter(|v| v.as_str() != FILTER_ALL)
            .count();
        let dates = usize::from(self.date_range.start.is_some())
            + usize::from(self.date_range.end.is_some());
        query + selections + dates
    }

    /// AND of free-text, categorical and date-range predicates.
    pub fn matches<T: ListRecord>(&self, record: &T, config: &ListViewConfig) -> bool {
        self.matches_query(record, &config.searchable_fields)
            && self.matches_selections(record)
            && self.date_range.contains(record.timestamp())
    }

    fn matches_query<T: ListRecord>(&self, record: &T, fields: &[&'static str]) -> bool {
        let Some(needle) = search_needle(&self.query) else {
            return true;
        };
        fields.iter().any(|field| {
            record
                .field_value(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    }

    fn matches_selections<T: ListRecord>(&self, record: &T) -> bool {
        self.selections.iter().all(|(field, selected)| {
            selected == FILTER_ALL
                || record
                    .field_value(field)
                    .is_some_and(|value| value == selected.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::{ticket, Ticket};

    fn config() -> ListViewConfig {
        ListViewConfig::new(&["title", "owner"]).with_filter("state", "State", &["open", "closed"])
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&ticket(1, "Rotate keys", "ana", "open"), &config()));
    }

    #[test]
    fn test_query_is_case_insensitive_over_any_field() {
        let criteria = FilterCriteria {
            query: "ANA".into(),
            ..Default::default()
        };
        let t = ticket(1, "Rotate keys", "Ana", "open");
        assert!(criteria.matches(&t, &config()));

        let by_title = FilterCriteria {
            query: "rotate".into(),
            ..Default::default()
        };
        assert!(by_title.matches(&t, &config()));

        let miss = FilterCriteria {
            query: "open".into(),
            ..Default::default()
        };
        // "state" is filterable but not searchable
        assert!(!miss.matches(&t, &config()));
    }

    #[test]
    fn test_categorical_all_sentinel_and_exact_match() {
        let t = ticket(1, "Rotate keys", "ana", "open");
        let mut criteria = FilterCriteria::default();
        criteria.selections.insert("state".into(), FILTER_ALL.into());
        assert!(criteria.matches(&t, &config()));

        criteria.selections.insert("state".into(), "closed".into());
        assert!(!criteria.matches(&t, &config()));

        criteria.selections.insert("state".into(), "Open".into());
        assert!(!criteria.matches(&t, &config()), "equality is exact");
    }

    #[test]
    fn test_date_range_bounds() {
        let at = |d: u32, h: u32| crate::shared::dates::ymd_hms(2024, 1, d, h, 30, 0);
        let day = |d: u32| Some(crate::shared::dates::ymd(2024, 1, d));

        let range = DateRange::new(day(10), day(12));
        assert!(range.contains(Some(at(10, 0))), "start is inclusive");
        assert!(range.contains(Some(at(12, 23))), "end covers the whole day");
        assert!(!range.contains(Some(at(13, 0))));
        assert!(!range.contains(Some(at(9, 23))));
        assert!(!range.contains(None));

        assert!(DateRange::new(None, day(12)).contains(Some(at(1, 0))));
        assert!(DateRange::default().contains(None));
    }

    #[test]
    fn test_predicates_are_combined_with_and() {
        let mut t: Ticket = ticket(1, "Rotate keys", "ana", "open");
        t.created = Some(crate::shared::dates::ymd_hms(2024, 1, 5, 8, 0, 0));
        let mut criteria = FilterCriteria {
            query: "rotate".into(),
            ..Default::default()
        };
        criteria.selections.insert("state".into(), "open".into());
        assert!(criteria.matches(&t, &config()));

        criteria.date_range = DateRange::new(Some(crate::shared::dates::ymd(2024, 2, 1)), None);
        assert!(!criteria.matches(&t, &config()));
    }

    #[test]
    fn test_active_count() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.active_count(), 0);
        criteria.query = "x".into();
        criteria.selections.insert("state".into(), FILTER_ALL.into());
        criteria.selections.insert("owner".into(), "ana".into());
        criteria.date_range.end = Some(crate::shared::dates::ymd(2024, 1, 1));
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn test_query_whitespace_is_ignored() {
        let t = ticket(1, "Harbor Grill", "ana", "open");
        let padded = FilterCriteria {
            query: "  grill ".into(),
            ..Default::default()
        };
        assert!(padded.matches(&t, &config()));
        assert_eq!(padded.trimmed_query(), "grill");
        assert_eq!(padded.active_count(), 1);

        let blank = FilterCriteria {
            query: "   ".into(),
            ..Default::default()
        };
        assert!(blank.matches(&t, &config()));
        assert_eq!(blank.active_count(), 0);
        assert_eq!(search_needle("   "), None);
        assert_eq!(search_needle(" GriLL "), Some("grill".to_string()));
    }
}
