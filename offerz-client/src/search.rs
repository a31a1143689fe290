//! Search autocomplete
//!
//! The hero search box suggests stores and coupons from a snapshot loaded
//! once when the page opens. Matching happens locally on every keystroke.

use shared::models::{Coupon, CouponKind, Store};

use crate::api::PublicApi;
use crate::client::HttpClient;
use crate::routes::Route;

/// Coupons pulled into the snapshot
pub const SUGGESTION_COUPON_LIMIT: u32 = 100;
/// Suggestions shown per group
pub const MAX_SUGGESTIONS: usize = 3;

/// One selectable suggestion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suggestion<'a> {
    Store(&'a Store),
    Coupon(&'a Coupon),
}

impl Suggestion<'_> {
    /// Where selecting this suggestion navigates
    pub fn route(&self) -> Route {
        match self {
            Suggestion::Store(store) => Route::store_for(&store.name),
            Suggestion::Coupon(coupon) => match coupon.kind {
                CouponKind::Deal => Route::Deals {
                    search: Some(coupon.title.clone()),
                },
                CouponKind::Code => Route::Coupons {
                    search: Some(coupon.title.clone()),
                    category: None,
                },
            },
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Suggestion::Store(store) => &store.name,
            Suggestion::Coupon(coupon) => &coupon.title,
        }
    }
}

/// Matches for one query, at most three of each
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions<'a> {
    pub stores: Vec<&'a Store>,
    pub coupons: Vec<&'a Coupon>,
}

impl<'a> Suggestions<'a> {
    /// Stores first, then coupons
    pub fn iter(&self) -> impl Iterator<Item = Suggestion<'a>> + '_ {
        self.stores
            .iter()
            .copied()
            .map(Suggestion::Store)
            .chain(self.coupons.iter().copied().map(Suggestion::Coupon))
    }

    pub fn len(&self) -> usize {
        self.stores.len() + self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Snapshot of stores and coupons to suggest from
#[derive(Debug, Clone, Default)]
pub struct SuggestionIndex {
    stores: Vec<Store>,
    coupons: Vec<Coupon>,
}

impl SuggestionIndex {
    pub fn new(stores: Vec<Store>, coupons: Vec<Coupon>) -> Self {
        Self { stores, coupons }
    }

    /// Load all stores and the first coupons concurrently. A failed fetch
    /// leaves that half of the index empty.
    pub async fn load<C: HttpClient>(api: &PublicApi<'_, C>) -> Self {
        let (stores, coupons) =
            tokio::join!(api.stores(), api.recent_coupons(SUGGESTION_COUPON_LIMIT));

        let stores = stores.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load stores for search");
            Vec::new()
        });
        let coupons = coupons.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load coupons for search");
            Vec::new()
        });

        tracing::debug!(stores = stores.len(), coupons = coupons.len(), "Search index loaded");
        Self { stores, coupons }
    }

    /// Case-insensitive substring matches, `None` when nothing matches
    pub fn suggest(&self, query: &str) -> Option<Suggestions<'_>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let stores: Vec<_> = self
            .stores
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .take(MAX_SUGGESTIONS)
            .collect();
        let coupons: Vec<_> = self
            .coupons
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&query)
                    || c.store_name.to_lowercase().contains(&query)
            })
            .take(MAX_SUGGESTIONS)
            .collect();

        let suggestions = Suggestions { stores, coupons };
        (!suggestions.is_empty()).then_some(suggestions)
    }

    /// Submitting the form searches the store directory
    pub fn submit(query: &str) -> Option<Route> {
        let query = query.trim();
        (!query.is_empty()).then(|| Route::Stores {
            search: Some(query.to_string()),
        })
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }
}
