//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_client--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity part searchable: copy the id from the
//! DOM inspector and it leads to the matching `a001_client/` directory.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(
        id.split_once("--"),
        Some((entity, category)) if !entity.is_empty() && !category.is_empty()
    )
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_client--list"));
        assert!(!is_valid_page_id("a001_client"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("legacy"));
    }
}
