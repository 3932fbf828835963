//! Page source contract.

use async_trait::async_trait;

use super::Page;
use crate::error::Error;
use crate::model::Identified;

/// Something that can fetch one page of records at a time.
///
/// The order of the returned records is the source's own and is preserved by
/// everything downstream. Implementations do not retry or cache; a failed fetch
/// is reported as an error and the page counts as not loaded.
///
/// # Implementing
///
/// ```
/// use async_trait::async_trait;
/// use artic_lib::api::{Page, PageSource};
/// use artic_lib::error::Error;
/// use artic_lib::model::Artwork;
///
/// struct Fixed(Vec<Artwork>);
///
/// #[async_trait]
/// impl PageSource for Fixed {
///     type Record = Artwork;
///
///     async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page<Artwork>, Error> {
///         let start = ((page - 1) * page_size) as usize;
///         let records = self.0.iter().skip(start).take(page_size as usize).cloned().collect();
///         Ok(Page::new(records, self.0.len() as u64))
///     }
/// }
/// ```
#[async_trait]
pub trait PageSource: Send + Sync {
    /// The record type this source yields.
    type Record: Identified + Clone + Send;

    /// Fetches the 1-based `page` holding up to `page_size` records.
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page<Self::Record>, Error>;
}
