//! Catalog query construction

use shared::models::CouponKind;

/// Page size of the full listing pages (coupons, deals, trending)
pub const PAGE_SIZE: u32 = 12;
/// Page size of the home page highlight grid
pub const HIGHLIGHTS_PAGE_SIZE: u32 = 9;
/// Category sentinel meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Filters a listing page applies to the coupon collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub kind: Option<CouponKind>,
    pub trending_only: bool,
}

impl CatalogFilter {
    /// Blank search clears the filter
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(search);
        self
    }

    /// `"All"` (or blank) clears the filter
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = non_blank(category).filter(|c| c != ALL_CATEGORIES);
        self
    }

    pub fn with_kind(mut self, kind: Option<CouponKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_trending_only(mut self, trending_only: bool) -> Self {
        self.trending_only = trending_only;
        self
    }

    /// Category label for the filter chips
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// One page request against a listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub filter: CatalogFilter,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
}

impl CatalogQuery {
    pub fn new(filter: CatalogFilter, page_size: u32) -> Self {
        Self {
            filter,
            page: 1,
            page_size,
        }
    }

    /// `/coupons`
    pub fn coupons() -> Self {
        Self::new(CatalogFilter::default(), PAGE_SIZE)
    }

    /// `/deals`
    pub fn deals() -> Self {
        Self::new(
            CatalogFilter::default().with_kind(Some(CouponKind::Deal)),
            PAGE_SIZE,
        )
    }

    /// `/trending`
    pub fn trending() -> Self {
        Self::new(
            CatalogFilter::default().with_trending_only(true),
            PAGE_SIZE,
        )
    }

    /// Home page grid
    pub fn highlights() -> Self {
        Self::new(CatalogFilter::default(), HIGHLIGHTS_PAGE_SIZE)
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_filter(mut self, filter: CatalogFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Request path: `base?page=P&limit=L[&category=..][&search=..][&type=..][&trending=true]`
    pub fn to_path(&self, base: &str) -> String {
        let mut path = format!("{}?page={}&limit={}", base, self.page.max(1), self.page_size);
        if let Some(category) = &self.filter.category {
            path.push_str("&category=");
            path.push_str(&urlencoding::encode(category));
        }
        if let Some(search) = &self.filter.search {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(search));
        }
        if let Some(kind) = self.filter.kind {
            path.push_str("&type=");
            path.push_str(kind.as_str());
        }
        if self.filter.trending_only {
            path.push_str("&trending=true");
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_query() {
        let q = CatalogQuery::coupons();
        assert_eq!(q.to_path("/api/coupons"), "/api/coupons?page=1&limit=12");
    }

    #[test]
    fn test_all_category_equals_no_filter() {
        let all = CatalogQuery::coupons()
            .with_filter(CatalogFilter::default().with_category(ALL_CATEGORIES));
        assert_eq!(all, CatalogQuery::coupons());
        assert_eq!(all.filter.category_label(), "All");
    }

    #[test]
    fn test_empty_search_equals_no_filter() {
        let q = CatalogQuery::coupons().with_filter(CatalogFilter::default().with_search("   "));
        assert_eq!(q.filter.search, None);
    }

    #[test]
    fn test_values_are_encoded() {
        let q = CatalogQuery::coupons()
            .with_page(3)
            .with_filter(
                CatalogFilter::default()
                    .with_category("Food & Drink")
                    .with_search("50% off"),
            );
        assert_eq!(
            q.to_path("/api/coupons"),
            "/api/coupons?page=3&limit=12&category=Food%20%26%20Drink&search=50%25%20off"
        );
    }

    #[test]
    fn test_listing_presets() {
        assert_eq!(
            CatalogQuery::deals().to_path("/api/coupons"),
            "/api/coupons?page=1&limit=12&type=Deal"
        );
        assert_eq!(
            CatalogQuery::trending().to_path("/api/coupons"),
            "/api/coupons?page=1&limit=12&trending=true"
        );
        assert_eq!(CatalogQuery::highlights().page_size, 9);
    }

    #[test]
    fn test_page_floor() {
        assert_eq!(CatalogQuery::coupons().with_page(0).page, 1);
    }
}
