//! Coupon catalog
//!
//! Query construction, response normalization and the page state machine
//! shared by the coupons, deals and trending pages, plus the client-side
//! filters of the stores directory and store pages.

pub mod directory;
pub mod listing;
pub mod pager;
pub mod query;
pub mod sequence;

pub use directory::{LetterFilter, StoreDirectory, StoreTab};
pub use listing::{Listing, PendingFetch, Viewport};
pub use pager::{PageButton, Pager};
pub use query::{
    ALL_CATEGORIES, CatalogFilter, CatalogQuery, HIGHLIGHTS_PAGE_SIZE, PAGE_SIZE,
};
pub use sequence::{RequestSequencer, Ticket};

use shared::ListEnvelope;
use shared::models::Coupon;

use crate::ClientResult;
use crate::client::HttpClient;

/// One normalized page of a catalog listing
pub type CatalogPage<T> = shared::Page<T>;

/// Coupon collection endpoint
pub const COUPONS_PATH: &str = "/api/coupons";

/// Paged reads of the coupon collection
pub struct CatalogApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> CatalogApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Fetch and normalize one page, surfacing failures
    pub async fn try_fetch_page(&self, query: &CatalogQuery) -> ClientResult<CatalogPage<Coupon>> {
        let path = query.to_path(COUPONS_PATH);
        let envelope: ListEnvelope<Coupon> = self.http.get(&path).await?;
        Ok(envelope.into_page(query.page, query.page_size))
    }

    /// Fetch one page. Failures are logged and render as an empty page.
    pub async fn fetch_page(&self, query: &CatalogQuery) -> CatalogPage<Coupon> {
        match self.try_fetch_page(query).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, page = query.page, "Failed to fetch coupons");
                CatalogPage::empty()
            }
        }
    }
}
