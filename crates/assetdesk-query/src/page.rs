//! Pagination types.
//!
//! [`PageRequest`] normalises client page parameters; [`PagedResult`] carries
//! one page of an ordered sequence plus the metadata a list endpoint returns.

use serde::Serialize;

/// Normalised page parameters.
///
/// Both values are at least 1. Requests past the last page are valid and
/// produce an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed).
    pub page_number: u64,
    /// Items per page.
    pub page_size: u32,
}

impl PageRequest {
    /// Creates a page request, clamping both values up to 1.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: page_number.max(1).unsigned_abs(),
            page_size: u32::try_from(page_size.max(1)).unwrap_or(u32::MAX),
        }
    }

    /// Caps the page size at `max`, when a cap is configured.
    pub fn capped(self, max: Option<u32>) -> Self {
        match max {
            Some(max) => Self {
                page_size: self.page_size.min(max.max(1)),
                ..self
            },
            None => self,
        }
    }

    /// Number of items to skip.
    pub fn offset(&self) -> usize {
        let offset = (self.page_number - 1).saturating_mul(u64::from(self.page_size));
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// Number of items to take.
    pub fn limit(&self) -> usize {
        self.page_size as usize
    }

    /// Number of pages needed for `total_items`; zero when there are none.
    pub fn total_pages(&self, total_items: usize) -> u32 {
        let pages = total_items.div_ceil(self.page_size as usize);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Slices one page out of an ordered sequence.
    ///
    /// The sequence is enumerated exactly once: it is counted while being
    /// collected, then the page is cut from the collected items.
    pub fn paginate<T>(&self, items: impl IntoIterator<Item = T>) -> PagedResult<T> {
        let all: Vec<T> = items.into_iter().collect();
        let total_items = all.len();
        let total_pages = self.total_pages(total_items);
        let page: Vec<T> = all.into_iter().skip(self.offset()).take(self.limit()).collect();

        PagedResult {
            items: page,
            total_items,
            page_size: self.page_size,
            current_page: self.page_number,
            total_pages,
            has_next_page: self.page_number < u64::from(total_pages),
            has_previous_page: self.page_number > 1,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Slices an ordered sequence; see [`PageRequest::paginate`].
pub fn paginate<T>(
    items: impl IntoIterator<Item = T>,
    page_number: i64,
    page_size: i64,
) -> PagedResult<T> {
    PageRequest::new(page_number, page_size).paginate(items)
}

/// One page of results with pagination metadata.
///
/// `current_page` is never clamped to `total_pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// The items on the current page.
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total_items: usize,
    /// Items per page.
    pub page_size: u32,
    /// Current page number (1-indexed), as requested.
    pub current_page: u64,
    /// Number of pages; zero when there are no items.
    pub total_pages: u32,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_previous_page: bool,
}

impl<T> PagedResult<T> {
    /// Returns true if there are no items on this page.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Maps the items to a different type, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_clamps_up() {
        assert_eq!(PageRequest::new(0, 0), PageRequest::new(1, 1));
        assert_eq!(PageRequest::new(-4, -10), PageRequest::new(1, 1));
        let req = PageRequest::new(3, 20);
        assert_eq!(req.page_number, 3);
        assert_eq!(req.page_size, 20);
    }

    #[test]
    fn page_request_offset_and_limit() {
        let req = PageRequest::new(3, 20);
        assert_eq!(req.offset(), 40);
        assert_eq!(req.limit(), 20);
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
    }

    #[test]
    fn page_request_cap() {
        assert_eq!(PageRequest::new(1, 500).capped(Some(100)).page_size, 100);
        assert_eq!(PageRequest::new(1, 50).capped(Some(100)).page_size, 50);
        assert_eq!(PageRequest::new(1, 500).capped(None).page_size, 500);
        assert_eq!(PageRequest::new(1, 5).capped(Some(0)).page_size, 1);
    }

    #[test]
    fn total_pages() {
        let req = PageRequest::new(1, 10);
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(10), 1);
        assert_eq!(req.total_pages(11), 2);
        assert_eq!(req.total_pages(100), 10);
    }

    #[test]
    fn middle_page() {
        let result = paginate(1..=15, 2, 5);
        assert_eq!(result.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(result.total_items, 15);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next_page);
        assert!(result.has_previous_page);
    }

    #[test]
    fn last_partial_page() {
        let result = paginate(1..=12, 3, 5);
        assert_eq!(result.items, vec![11, 12]);
        assert!(!result.has_next_page);
        assert!(result.has_previous_page);
    }

    #[test]
    fn page_beyond_last_is_empty() {
        let result = paginate(1..=15, 9, 5);
        assert!(result.is_empty());
        assert_eq!(result.current_page, 9);
        assert_eq!(result.total_pages, 3);
        assert!(!result.has_next_page);
        assert!(result.has_previous_page);
    }

    #[test]
    fn huge_page_number_is_reported_as_requested() {
        let result = paginate(1..=3, 5_000_000_000, 2);
        assert!(result.is_empty());
        assert_eq!(result.current_page, 5_000_000_000);
        assert_eq!(result.total_pages, 2);
        assert!(!result.has_next_page);
        assert!(result.has_previous_page);
        assert_eq!(PageRequest::new(i64::MAX, 1).page_number, i64::MAX as u64);
    }

    #[test]
    fn empty_source() {
        let result = paginate(Vec::<u8>::new(), 1, 10);
        assert!(result.is_empty());
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 0);
        assert!(!result.has_next_page);
        assert!(!result.has_previous_page);
    }

    #[test]
    fn counts_lazy_source_once() {
        let mut pulled = 0;
        let source = (1..=7).inspect(|_| pulled += 1);
        let result = paginate(source, 1, 3);
        assert_eq!(result.items, vec![1, 2, 3]);
        assert_eq!(result.total_items, 7);
        assert_eq!(pulled, 7);
    }

    #[test]
    fn map_keeps_metadata() {
        let result = paginate(1..=4, 2, 2).map(|n| n * 10);
        assert_eq!(result.items, vec![30, 40]);
        assert_eq!(result.total_items, 4);
        assert_eq!(result.current_page, 2);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(paginate(vec!["a"], 1, 10)).unwrap();
        assert_eq!(json["items"][0], "a");
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["hasNextPage"], false);
        assert_eq!(json["hasPreviousPage"], false);
    }
}
