//! Table session behaviour against an in-memory page source.

use std::collections::HashSet;
use std::sync::Mutex;

use artic_lib::api::{Page, PageSource, Pagination, page_count};
use artic_lib::error::{ApiError, Error, ValidationError};
use artic_lib::model::Artwork;
use artic_lib::session::{LoadOutcome, TableSession};
use async_trait::async_trait;

/// Serves `total` artworks with ids `1..=total`, failing any page in `failing`.
struct MemorySource {
    records: Vec<Artwork>,
    failing: Mutex<HashSet<u32>>,
}

impl MemorySource {
    fn new(total: u64) -> Self {
        Self {
            records: (1..=total)
                .map(|id| Artwork::new(id, format!("Artwork {id}")))
                .collect(),
            failing: Mutex::new(HashSet::new()),
        }
    }

    fn fail_page(&self, page: u32) {
        self.failing.lock().unwrap().insert(page);
    }

    fn heal_page(&self, page: u32) {
        self.failing.lock().unwrap().remove(&page);
    }
}

#[async_trait]
impl PageSource for MemorySource {
    type Record = Artwork;

    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page<Artwork>, Error> {
        if self.failing.lock().unwrap().contains(&page) {
            return Err(ApiError::http(503, "Service Unavailable").into());
        }

        let total = self.records.len() as u64;
        let start = ((page - 1) * page_size) as usize;
        let records: Vec<Artwork> = self
            .records
            .iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(Page::new(records, total).with_pagination(Pagination {
            total,
            limit: page_size,
            offset: start as u64,
            total_pages: page_count(total, page_size),
            current_page: page,
        }))
    }
}

fn selected_ids(session: &TableSession<MemorySource>) -> Vec<u64> {
    session.selected_on_page().iter().map(|a| a.id).collect()
}

fn assert_loaded(outcome: LoadOutcome) {
    assert!(outcome.is_loaded(), "expected page to load, got {outcome:?}");
}

#[tokio::test]
async fn test_selection_survives_navigation() {
    let mut session = TableSession::new(MemorySource::new(20), 5).unwrap();
    assert_loaded(session.load(1, 5).await.unwrap());
    assert!(!session.has_prev());

    session.set_page_selection(&[0]);
    assert_loaded(session.next_page().await.unwrap());
    assert!(session.has_prev());
    assert!(session.selected_on_page().is_empty());

    assert_loaded(session.prev_page().await.unwrap());
    assert_eq!(selected_ids(&session), vec![1]);
    assert!(session.is_row_selected(0));
}

#[tokio::test]
async fn test_edit_on_page_two_leaves_page_one() {
    let mut session = TableSession::new(MemorySource::new(20), 5).unwrap();
    session.load(1, 5).await.unwrap();
    session.set_page_selection(&[1, 2]);

    session.next_page().await.unwrap();
    assert_eq!(session.toggle_row(0), Some(true));
    session.set_page_selection(&[4]);

    assert!(session.selection().is_selected(&2));
    assert!(session.selection().is_selected(&3));
    assert!(!session.selection().is_selected(&6));
    assert!(session.selection().is_selected(&10));
    assert_eq!(session.selection().len(), 3);
}

#[tokio::test]
async fn test_auto_select_spans_pages() {
    let mut session = TableSession::new(MemorySource::new(20), 5).unwrap();
    session.load(1, 5).await.unwrap();

    assert_eq!(session.request_auto_select(8), 5);
    assert_eq!(session.selection().pending_auto_select(), 3);

    match session.next_page().await.unwrap() {
        LoadOutcome::Loaded(reconciliation) => assert_eq!(reconciliation.auto_selected, 3),
        other => panic!("expected page to load, got {other:?}"),
    }
    assert_eq!(selected_ids(&session), vec![6, 7, 8]);
    assert_eq!(session.selection().pending_auto_select(), 0);
    assert_eq!(session.selection().len(), 8);
}

#[tokio::test]
async fn test_stale_response_is_dropped() {
    let mut session = TableSession::new(MemorySource::new(20), 5).unwrap();
    session.load(1, 5).await.unwrap();
    session.request_auto_select(7);

    let slow = session.begin_fetch(2, 5).unwrap();
    let fast = session.begin_fetch(3, 5).unwrap();
    assert_eq!(session.in_flight(), Some(fast));

    let fast_result = session.source().fetch_page(fast.page, fast.rows).await;
    assert_loaded(session.complete(fast, fast_result));

    let slow_result = session.source().fetch_page(slow.page, slow.rows).await;
    assert!(matches!(session.complete(slow, slow_result), LoadOutcome::Stale));

    assert_eq!(session.page(), 3);
    assert_eq!(session.records()[0].id, 11);
    assert_eq!(selected_ids(&session), vec![11, 12]);
    assert!(!session.selection().is_selected(&6));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_cancelled_fetch_never_applies() {
    let mut session = TableSession::new(MemorySource::new(20), 5).unwrap();
    session.load(1, 5).await.unwrap();
    session.request_auto_select(6);

    let ticket = session.begin_fetch(2, 5).unwrap();
    assert!(session.is_loading());
    session.cancel_fetch();
    assert!(!session.is_loading());

    let result = session.source().fetch_page(ticket.page, ticket.rows).await;
    assert!(matches!(session.complete(ticket, result), LoadOutcome::Stale));
    assert_eq!(session.page(), 1);
    assert_eq!(session.selection().pending_auto_select(), 1);
}

#[tokio::test]
async fn test_failed_fetch_keeps_state() {
    let mut session = TableSession::new(MemorySource::new(20), 5).unwrap();
    session.load(1, 5).await.unwrap();
    session.request_auto_select(7);
    session.source().fail_page(2);

    match session.next_page().await.unwrap() {
        LoadOutcome::Failed(err) => assert!(err.is_retryable()),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(session.page(), 1);
    assert_eq!(session.records().len(), 5);
    assert_eq!(session.selection().len(), 5);
    assert_eq!(session.selection().pending_auto_select(), 2);
    assert!(!session.is_loading());

    session.source().heal_page(2);
    assert_loaded(session.next_page().await.unwrap());
    assert_eq!(selected_ids(&session), vec![6, 7]);
    assert_eq!(session.selection().pending_auto_select(), 0);
}

#[tokio::test]
async fn test_pending_applies_after_page_size_change() {
    let mut session = TableSession::new(MemorySource::new(40), 5).unwrap();
    session.load(1, 5).await.unwrap();
    session.request_auto_select(8);

    assert_loaded(session.set_rows_per_page(10).await.unwrap());
    assert_eq!(session.rows_per_page(), 10);
    assert_eq!(session.page(), 1);
    assert_eq!(selected_ids(&session), (1..=8).collect::<Vec<u64>>());
    assert_eq!(session.selection().pending_auto_select(), 0);
}

#[tokio::test]
async fn test_exhausted_auto_select() {
    let mut session = TableSession::new(MemorySource::new(12), 5).unwrap();
    session.load(1, 5).await.unwrap();
    session.request_auto_select(20);
    assert!(!session.auto_select_exhausted());

    session.next_page().await.unwrap();
    session.next_page().await.unwrap();

    assert_eq!(session.page(), 3);
    assert_eq!(session.records().len(), 2);
    assert!(!session.has_next());
    assert_eq!(session.selection().len(), 12);
    assert_eq!(session.selection().pending_auto_select(), 8);
    assert!(session.auto_select_exhausted());
}

#[tokio::test]
async fn test_page_bounds_and_sizes_are_validated() {
    let mut session = TableSession::new(MemorySource::new(12), 5).unwrap();
    session.load(1, 5).await.unwrap();

    assert_eq!(session.total_pages(), 3);
    assert!(matches!(
        session.load(4, 5).await,
        Err(ValidationError::InvalidPage(4))
    ));
    assert!(matches!(
        session.prev_page().await,
        Err(ValidationError::InvalidPage(0))
    ));
    assert!(matches!(
        session.set_rows_per_page(7).await,
        Err(ValidationError::UnsupportedPageSize { size: 7, .. })
    ));
    assert!(TableSession::new(MemorySource::new(1), 0).is_err());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_refetch_keeps_membership() {
    let mut session = TableSession::new(MemorySource::new(20), 10).unwrap();
    session.load(2, 10).await.unwrap();
    session.set_page_selection(&[0, 9]);

    match session.refetch().await.unwrap() {
        LoadOutcome::Loaded(reconciliation) => {
            assert_eq!(reconciliation.refreshed, 2);
            assert_eq!(reconciliation.auto_selected, 0);
        }
        other => panic!("expected page to load, got {other:?}"),
    }
    assert_eq!(selected_ids(&session), vec![11, 20]);
    assert_eq!(session.first_row(), 10);
    assert_eq!(session.pagination().map(|p| p.current_page), Some(2));
}
