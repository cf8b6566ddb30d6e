use super::record::ListRecord;

/// Categorical filter value meaning "impose no constraint on this field".
pub const FILTER_ALL: &str = "all";

/// Page size menu for client, consultant and account lists.
pub const STANDARD_PAGE_SIZES: &[usize] = &[5, 10, 25];

/// Page size menu for the activity log.
pub const LOG_PAGE_SIZES: &[usize] = &[10, 25, 50, 100];

/// One equality filter shown as a select in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalFilter {
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<&'static str>,
}

/// Fixed, single-key order applied before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortRule {
    /// Store order; new records show up at the end.
    #[default]
    InsertionOrder,
    /// Newest first. Stable, so equal timestamps keep store order.
    TimestampDesc,
}

impl SortRule {
    pub fn apply<T: ListRecord>(&self, items: &mut [&T]) {
        match self {
            SortRule::InsertionOrder => {}
            SortRule::TimestampDesc => items.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
        }
    }
}

/// Per-page description of what the pipeline searches, filters and sorts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewConfig {
    pub searchable_fields: Vec<&'static str>,
    pub categorical_filters: Vec<CategoricalFilter>,
    pub sort: SortRule,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// Whether the filter panel offers a date range.
    pub date_filter: bool,
}

impl ListViewConfig {
    pub fn new(searchable_fields: &[&'static str]) -> Self {
        Self {
            searchable_fields: searchable_fields.to_vec(),
            categorical_filters: Vec::new(),
            sort: SortRule::InsertionOrder,
            page_size_options: STANDARD_PAGE_SIZES.to_vec(),
            default_page_size: STANDARD_PAGE_SIZES[0],
            date_filter: false,
        }
    }

    pub fn with_filter(
        mut self,
        field: &'static str,
        label: &'static str,
        options: &[&'static str],
    ) -> Self {
        self.categorical_filters.push(CategoricalFilter {
            field,
            label,
            options: options.to_vec(),
        });
        self
    }

    pub fn sorted_by(mut self, sort: SortRule) -> Self {
        self.sort = sort;
        self
    }

    /// Replaces the page size menu. `default_size` must be one of `sizes`;
    /// otherwise the first option is used.
    pub fn with_page_sizes(mut self, sizes: &[usize], default_size: usize) -> Self {
        self.page_size_options = sizes.to_vec();
        self.default_page_size = if sizes.contains(&default_size) {
            default_size
        } else {
            sizes.first().copied().unwrap_or(default_size)
        };
        self
    }

    pub fn with_date_filter(mut self) -> Self {
        self.date_filter = true;
        self
    }

    pub fn supports_page_size(&self, size: usize) -> bool {
        size > 0 && self.page_size_options.contains(&size)
    }

    pub fn filter(&self, field: &str) -> Option<&CategoricalFilter> {
        self.categorical_filters.iter().find(|f| f.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size_falls_back_to_first_option() {
        let config = ListViewConfig::new(&["name"]).with_page_sizes(LOG_PAGE_SIZES, 7);
        assert_eq!(config.default_page_size, 10);
        assert!(config.supports_page_size(100));
        assert!(!config.supports_page_size(5));
        assert!(!config.supports_page_size(0));
    }

    #[test]
    fn test_filter_lookup() {
        let config = ListViewConfig::new(&["name"]).with_filter("status", "Status", &["Active"]);
        assert_eq!(config.filter("status").map(|f| f.label), Some("Status"));
        assert!(config.filter("role").is_none());
    }
}
