//! Paginated table session.

use log::debug;
use log::warn;

use super::RequestId;
use super::RequestSequencer;
use crate::api::Page;
use crate::api::PageSource;
use crate::api::Pagination;
use crate::api::page_count;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Identified;
use crate::selection::Reconciliation;
use crate::selection::SelectionManager;

/// Page sizes the table offers.
pub const ROWS_PER_PAGE_OPTIONS: &[u32] = &[5, 10, 12, 25, 50];

/// Page size used when nothing else is configured.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 5;

/// Checks that `rows` is one of [`ROWS_PER_PAGE_OPTIONS`].
pub fn validate_rows_per_page(rows: u32) -> Result<u32, ValidationError> {
    if rows == 0 {
        return Err(ValidationError::ZeroPageSize);
    }
    if !ROWS_PER_PAGE_OPTIONS.contains(&rows) {
        return Err(ValidationError::UnsupportedPageSize {
            size: rows,
            allowed: ROWS_PER_PAGE_OPTIONS,
        });
    }
    Ok(rows)
}

/// A fetch that has been issued but not completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    /// Sequence number of this fetch.
    pub id: RequestId,
    /// Requested 1-based page index.
    pub page: u32,
    /// Requested page size.
    pub rows: u32,
}

/// What happened to a completed fetch.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The page is now displayed and has been reconciled with the selection.
    Loaded(Reconciliation),
    /// A newer fetch was issued in the meantime; the response was dropped.
    Stale,
    /// The fetch failed; the previous page and the selection are unchanged.
    Failed(Error),
}

impl LoadOutcome {
    /// Returns `true` if the page was applied.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Drives one table view: fetches pages on demand and keeps the selection.
///
/// Only the current page's records are held. Every fetch is tagged with a
/// [`RequestId`]; a response is applied only if no newer fetch was issued
/// after it, so a slow response to an abandoned page can never overwrite the
/// page the user moved on to.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder().build()?;
/// let mut session = TableSession::new(client, 5)?;
///
/// session.load(1, 5).await?;
/// session.request_auto_select(8);
/// session.next_page().await?;
/// assert_eq!(session.selection().len(), 8);
/// ```
pub struct TableSession<S: PageSource> {
    source: S,
    selection: SelectionManager<S::Record>,
    sequencer: RequestSequencer,
    in_flight: Option<FetchTicket>,
    records: Vec<S::Record>,
    page: u32,
    rows_per_page: u32,
    total_count: Option<u64>,
    pagination: Option<Pagination>,
}

impl<S: PageSource> TableSession<S> {
    /// Creates a session with no page loaded yet.
    pub fn new(source: S, rows_per_page: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            source,
            selection: SelectionManager::new(),
            sequencer: RequestSequencer::new(),
            in_flight: None,
            records: Vec::new(),
            page: 1,
            rows_per_page: validate_rows_per_page(rows_per_page)?,
            total_count: None,
            pagination: None,
        })
    }

    /// Returns the page source.
    pub fn source(&self) -> &S {
        &self.source
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    /// Issues a fetch for `page` at `rows` per page.
    ///
    /// Any fetch still in flight is superseded. The returned ticket must be
    /// handed back to [`complete`](Self::complete) with the fetch result.
    pub fn begin_fetch(&mut self, page: u32, rows: u32) -> Result<FetchTicket, ValidationError> {
        validate_rows_per_page(rows)?;
        if page == 0 {
            return Err(ValidationError::InvalidPage(page));
        }
        if let Some(total) = self.total_count {
            if page > 1 && page > page_count(total, rows) {
                return Err(ValidationError::InvalidPage(page));
            }
        }

        if let Some(previous) = self.in_flight {
            debug!("Fetch {} superseded by page {}", previous.id, page);
        }

        let ticket = FetchTicket {
            id: self.sequencer.issue(),
            page,
            rows,
        };
        self.in_flight = Some(ticket);
        debug!("Fetch {} issued for page {} ({} rows)", ticket.id, page, rows);
        Ok(ticket)
    }

    /// Applies the result of the fetch identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<S::Record>, Error>,
    ) -> LoadOutcome {
        if !self.sequencer.is_current(ticket.id) {
            debug!("Dropping stale response {} for page {}", ticket.id, ticket.page);
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!("Page {} failed to load: {}", ticket.page, e);
                return LoadOutcome::Failed(e);
            }
        };

        self.page = ticket.page;
        self.rows_per_page = ticket.rows;
        self.total_count = Some(page.total_count());
        self.pagination = page.pagination().copied();
        self.records = page.into_records();

        LoadOutcome::Loaded(self.selection.on_page_loaded(&self.records))
    }

    /// Supersedes the fetch in flight, if any, so its result is dropped.
    pub fn cancel_fetch(&mut self) {
        if self.in_flight.take().is_some() {
            self.sequencer.cancel();
        }
    }

    /// Fetches `page` at `rows` per page and applies the result.
    pub async fn load(&mut self, page: u32, rows: u32) -> Result<LoadOutcome, ValidationError> {
        let ticket = self.begin_fetch(page, rows)?;
        let result = self.source.fetch_page(ticket.page, ticket.rows).await;
        Ok(self.complete(ticket, result))
    }

    /// Loads the page after the current one.
    pub async fn next_page(&mut self) -> Result<LoadOutcome, ValidationError> {
        self.load(self.page + 1, self.rows_per_page).await
    }

    /// Loads the page before the current one.
    pub async fn prev_page(&mut self) -> Result<LoadOutcome, ValidationError> {
        self.load(self.page.saturating_sub(1), self.rows_per_page).await
    }

    /// Changes the page size and returns to the first page.
    pub async fn set_rows_per_page(&mut self, rows: u32) -> Result<LoadOutcome, ValidationError> {
        self.load(1, rows).await
    }

    /// Fetches the current page again.
    pub async fn refetch(&mut self) -> Result<LoadOutcome, ValidationError> {
        self.load(self.page, self.rows_per_page).await
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Returns the selection manager.
    pub fn selection(&self) -> &SelectionManager<S::Record> {
        &self.selection
    }

    /// Returns the records on the current page that are selected.
    pub fn selected_on_page(&self) -> Vec<&S::Record> {
        self.selection.selection_for_page(&self.records)
    }

    /// Returns `true` if the row at `index` on the current page is selected.
    pub fn is_row_selected(&self, index: usize) -> bool {
        self.records
            .get(index)
            .is_some_and(|record| self.selection.is_selected(&record.id()))
    }

    /// Flips the row at `index` on the current page.
    ///
    /// Returns the new state, or `None` if there is no such row.
    pub fn toggle_row(&mut self, index: usize) -> Option<bool> {
        let record = self.records.get(index)?;
        Some(self.selection.toggle(record))
    }

    /// Makes exactly the rows at `indices` the current page's selection.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_page_selection(&mut self, indices: &[usize]) {
        let chosen: Vec<S::Record> = indices
            .iter()
            .filter_map(|&i| self.records.get(i).cloned())
            .collect();
        self.selection.on_user_selection_change(&self.records, &chosen);
    }

    /// Selects `count` records starting on the current page.
    ///
    /// Returns how many were selected right away; the rest are selected as
    /// later pages load.
    pub fn request_auto_select(&mut self, count: usize) -> usize {
        self.selection.request_auto_select(count, &self.records)
    }

    /// Deselects everything and drops any pending auto-select.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns `true` if an auto-select remainder can no longer be satisfied
    /// because the last page is displayed.
    pub fn auto_select_exhausted(&self) -> bool {
        self.selection.pending_auto_select() > 0 && self.total_count.is_some() && !self.has_next()
    }

    // -------------------------------------------------------------------------
    // Pagination state
    // -------------------------------------------------------------------------

    /// Returns the records of the current page.
    pub fn records(&self) -> &[S::Record] {
        &self.records
    }

    /// Returns the 1-based index of the displayed page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the displayed page size.
    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    /// Returns the collection size reported by the last loaded page.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Returns the pagination metadata of the last loaded page.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Returns the number of pages at the current page size.
    pub fn total_pages(&self) -> u32 {
        self.total_count
            .map(|total| page_count(total, self.rows_per_page))
            .unwrap_or(0)
    }

    /// Returns `true` if a page exists after the displayed one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Returns `true` if a page exists before the displayed one.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns the fetch in flight, if any.
    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    /// Returns the index of the first row on the current page within the collection.
    pub fn first_row(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.rows_per_page)
    }
}
