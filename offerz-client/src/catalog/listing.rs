//! Listing page state
//!
//! A `Listing` owns the query of one catalog page and the page currently on
//! screen. Filter changes and page navigation hand back a `PendingFetch`; the
//! caller performs the fetch and feeds the result back through `apply`.

use shared::models::{Coupon, CouponKind};

use super::pager::Pager;
use super::query::{CatalogFilter, CatalogQuery};
use super::sequence::{RequestSequencer, Ticket};
use super::{CatalogApi, CatalogPage};
use crate::client::HttpClient;

/// Empty state headline
pub const EMPTY_STATE_TITLE: &str = "No coupons found";
/// Empty state hint
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search or filter to find what you're looking for.";

/// Whatever displays the listing. Every applied fetch returns it to the top.
pub trait Viewport {
    fn scroll_to_top(&mut self);
}

impl Viewport for () {
    fn scroll_to_top(&mut self) {}
}

/// A fetch the listing is waiting on
#[derive(Debug, Clone)]
#[must_use = "a pending fetch does nothing until it is loaded and applied"]
pub struct PendingFetch {
    ticket: Ticket,
    query: CatalogQuery,
}

impl PendingFetch {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }
}

#[derive(Debug)]
pub struct Listing {
    query: CatalogQuery,
    current: CatalogPage<Coupon>,
    loading: bool,
    sequencer: RequestSequencer,
}

impl Listing {
    /// A listing that has not fetched anything yet
    pub fn new(query: CatalogQuery) -> Self {
        Self {
            query,
            current: CatalogPage::empty(),
            loading: true,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Fetch the current query again (initial load)
    pub fn refresh(&mut self) -> PendingFetch {
        self.loading = true;
        PendingFetch {
            ticket: self.sequencer.issue(),
            query: self.query.clone(),
        }
    }

    fn refilter(&mut self, filter: CatalogFilter) -> PendingFetch {
        self.query.filter = filter;
        self.query.page = 1;
        self.refresh()
    }

    pub fn set_search(&mut self, search: &str) -> PendingFetch {
        let filter = self.query.filter.clone().with_search(search);
        self.refilter(filter)
    }

    pub fn set_category(&mut self, category: &str) -> PendingFetch {
        let filter = self.query.filter.clone().with_category(category);
        self.refilter(filter)
    }

    pub fn set_kind(&mut self, kind: Option<CouponKind>) -> PendingFetch {
        let filter = self.query.filter.clone().with_kind(kind);
        self.refilter(filter)
    }

    pub fn set_trending_only(&mut self, trending_only: bool) -> PendingFetch {
        let filter = self.query.filter.clone().with_trending_only(trending_only);
        self.refilter(filter)
    }

    /// `None` when `page` is outside `1..=total_pages`
    pub fn go_to_page(&mut self, page: u32) -> Option<PendingFetch> {
        if page < 1 || page > self.current.total_pages {
            return None;
        }
        self.query.page = page;
        Some(self.refresh())
    }

    /// Install a fetched page. Returns `false` if a newer fetch has been
    /// issued since, in which case the result is dropped.
    pub fn apply(
        &mut self,
        pending: PendingFetch,
        page: CatalogPage<Coupon>,
        viewport: &mut impl Viewport,
    ) -> bool {
        if !self.sequencer.is_current(pending.ticket) {
            tracing::debug!(ticket = pending.ticket.id(), "Discarding stale listing response");
            return false;
        }
        self.current = page;
        self.loading = false;
        // A failed or shrunken result may not reach the requested page
        if self.query.page > self.current.total_pages.max(1) {
            self.query.page = self.current.page.clamp(1, self.current.total_pages.max(1));
        }
        viewport.scroll_to_top();
        true
    }

    /// Fetch `pending` through `api` and apply it
    pub async fn load<C: HttpClient>(
        &mut self,
        api: &CatalogApi<'_, C>,
        pending: PendingFetch,
        viewport: &mut impl Viewport,
    ) -> bool {
        let page = api.fetch_page(pending.query()).await;
        self.apply(pending, page, viewport)
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn page(&self) -> &CatalogPage<Coupon> {
        &self.current
    }

    pub fn items(&self) -> &[Coupon] {
        &self.current.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.query.page, self.current.total_pages)
    }

    /// No results to show once loading has finished
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.current.items.is_empty()
    }
}
