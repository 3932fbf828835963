//! Page type for paginated results.

use serde::Deserialize;
use serde::Serialize;

/// Pagination metadata echoed back by the API for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records in the collection.
    pub total: u64,
    /// Page size used for this response.
    pub limit: u32,
    /// Offset of the first record on this page.
    pub offset: u64,
    /// Total number of pages at this page size.
    pub total_pages: u32,
    /// 1-based index of this page.
    pub current_page: u32,
}

/// One fetched page of records with the collection's total count.
///
/// # Example
///
/// ```
/// use artic_lib::api::Page;
/// use artic_lib::model::Artwork;
///
/// let page = Page::new(vec![Artwork::new(1, "Nighthawks")], 120);
///
/// assert_eq!(page.len(), 1);
/// assert_eq!(page.total_count(), 120);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    records: Vec<R>,
    total_count: u64,
    pagination: Option<Pagination>,
}

impl<R> Page<R> {
    /// Creates a new page with records and the collection's total count.
    pub fn new(records: Vec<R>, total_count: u64) -> Self {
        Self {
            records,
            total_count,
            pagination: None,
        }
    }

    /// Attaches the pagination metadata the API returned.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.total_count = pagination.total;
        self.pagination = Some(pagination);
        self
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Returns the total number of records in the collection.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns the pagination metadata, if the source provided it.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Number of pages needed to show `total` records at `page_size` per page.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
