use super::config::ListViewConfig;
use super::criteria::FilterCriteria;
use super::record::ListRecord;

/// Zero-based page position plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageWindow {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(0, page_size)
    }

    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// `[offset, offset + page_size)` clipped to `items`. Past the end the
    /// slice is empty; the index is never clamped.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset();
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// At least one page, even for an empty result.
    pub fn total_pages(&self, total_count: usize) -> usize {
        if total_count == 0 || self.page_size == 0 {
            1
        } else {
            total_count.div_ceil(self.page_size)
        }
    }
}

/// The rows a list page renders plus the numbers its pagination controls show.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn filter_sort_paginate<T: ListRecord>(
    records: &[T],
    criteria: &FilterCriteria,
    config: &ListViewConfig,
    window: PageWindow,
) -> ListPage<T> {
    let mut visible: Vec<&T> = records
        .iter()
        .filter(|record| criteria.matches(*record, config))
        .collect();
    config.sort.apply(&mut visible);

    let total_count = visible.len();
    ListPage {
        items: window.slice(&visible).iter().map(|r| (*r).clone()).collect(),
        total_count,
        total_pages: window.total_pages(total_count),
        page_index: window.page_index,
        page_size: window.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::test_support::tickets;
    use crate::shared::list_view::{RecordId, SortRule};

    #[test]
    fn test_partial_last_page() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(PageWindow::new(0, 5).slice(&items), &[1, 2, 3, 4, 5]);
        assert_eq!(PageWindow::new(1, 5).slice(&items), &[6, 7]);
        assert_eq!(PageWindow::new(0, 5).total_pages(items.len()), 2);
    }

    #[test]
    fn test_index_past_end_is_empty_not_error() {
        let items: Vec<u32> = (1..=7).collect();
        assert!(PageWindow::new(2, 5).slice(&items).is_empty());
        assert!(PageWindow::new(usize::MAX, 5).slice(&items).is_empty());
        assert!(PageWindow::new(0, 5).slice::<u32>(&[]).is_empty());
        assert_eq!(PageWindow::new(0, 5).total_pages(0), 1);
    }

    #[test]
    fn test_pipeline_sorts_before_slicing() {
        let mut records = tickets(6);
        for (i, r) in records.iter_mut().enumerate() {
            r.created = Some(crate::shared::dates::ymd_hms(2024, 1, 1 + i as u32, 0, 0, 0));
        }
        let config = ListViewConfig::new(&["title"]).sorted_by(SortRule::TimestampDesc);
        let page = filter_sort_paginate(
            &records,
            &FilterCriteria::default(),
            &config,
            PageWindow::new(0, 5),
        );
        let ids: Vec<u32> = page.items.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![6, 5, 4, 3, 2]);
        assert_eq!(page.total_count, 6);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_timestamp_ties_keep_store_order() {
        let mut records = tickets(3);
        let ts = crate::shared::dates::ymd_hms(2024, 3, 1, 12, 0, 0);
        for r in records.iter_mut() {
            r.created = Some(ts);
        }
        let config = ListViewConfig::new(&["title"]).sorted_by(SortRule::TimestampDesc);
        let page = filter_sort_paginate(
            &records,
            &FilterCriteria::default(),
            &config,
            PageWindow::new(0, 5),
        );
        let ids: Vec<RecordId> = page.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![RecordId(1), RecordId(2), RecordId(3)]);
    }
}
