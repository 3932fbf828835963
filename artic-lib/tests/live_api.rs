//! Integration tests against the live artworks API.
//!
//! These tests need network access and are ignored by default. To point them
//! at another deployment, create a `.env` file in the artic-lib directory with:
//!
//! ```env
//! ARTIC_BASE_URL=https://api.artic.edu/api/v1
//! ```
//!
//! Then run: `cargo test -p artic-lib -- --ignored`

use std::env;
use std::time::Duration;

use artic_lib::ArticClient;
use artic_lib::DEFAULT_BASE_URL;
use artic_lib::api::PageSource;
use artic_lib::session::{LoadOutcome, TableSession};

fn client() -> ArticClient {
    let _ = dotenvy::dotenv();
    let base_url = env::var("ARTIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    ArticClient::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_first_page() {
    let page = client().fetch_page(1, 5).await.expect("Fetch failed");

    assert_eq!(page.len(), 5);
    assert!(page.total_count() > 5, "collection should span several pages");

    let pagination = page.pagination().expect("pagination metadata");
    assert_eq!(pagination.current_page, 1);
    assert_eq!(pagination.limit, 5);

    println!("Total artworks: {}", page.total_count());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_auto_select_across_live_pages() {
    let mut session = TableSession::new(client(), 5).expect("valid page size");

    let outcome = session.load(1, 5).await.expect("valid request");
    assert!(matches!(outcome, LoadOutcome::Loaded(_)), "got {outcome:?}");

    session.request_auto_select(8);
    assert_eq!(session.selection().pending_auto_select(), 3);

    let outcome = session.next_page().await.expect("valid request");
    assert!(matches!(outcome, LoadOutcome::Loaded(_)), "got {outcome:?}");
    assert_eq!(session.selected_on_page().len(), 3);
    assert_eq!(session.selection().len(), 8);
}
