//! API Response types
//!
//! The backend is not consistent about envelopes: single entities arrive
//! either bare or wrapped in `{ "data": ... }`, and collections arrive as a
//! bare array, as `{ "data": [...] }`, or as a paginated object such as
//! `{ "coupons": [...], "pagination": { ... } }`. Everything in this module
//! exists to collapse those variants into one typed shape at the client
//! boundary.

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses
///
/// ```json
/// { "error": "Invalid credentials" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Server-provided message, preferring `error` over `message`
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// `{ "data": T }` wrapper used by the admin and auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: Some(true),
            data,
            message: None,
        }
    }
}

/// Single entity, bare or wrapped
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped(ApiResponse<T>),
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped(resp) => resp.data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    #[serde(default)]
    pub page: u32,
    /// Items per page
    #[serde(default)]
    pub limit: u32,
    /// Total number of items
    #[serde(default)]
    pub total: u64,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: page_count(total, limit),
        }
    }
}

/// `ceil(total / page_size)`, zero when `page_size` is zero
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size)) as u32
}

/// Keyed collection: `{ "<key>": [...], "pagination": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyedList<T> {
    #[serde(
        alias = "coupons",
        alias = "stores",
        alias = "blogs",
        alias = "categories",
        alias = "messages",
        alias = "pages",
        alias = "data"
    )]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Any of the collection shapes the backend produces
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// Legacy: every matching item, unpaginated
    Bare(Vec<T>),
    /// Current: items plus optional server-side pagination
    Keyed(KeyedList<T>),
}

impl<T> ListEnvelope<T> {
    /// All items regardless of shape
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Keyed(list) => list.items,
        }
    }

    /// Normalize to one page of `page_size` items.
    ///
    /// Server-paginated responses are taken as-is. Full collections are
    /// sliced to `[(page-1)*page_size, page*page_size)`.
    pub fn into_page(self, page: u32, page_size: u32) -> Page<T> {
        let page = page.max(1);
        match self {
            ListEnvelope::Keyed(KeyedList {
                items,
                pagination: Some(meta),
            }) => Page {
                items,
                total: meta.total,
                total_pages: meta.total_pages.max(1),
                page,
            },
            ListEnvelope::Keyed(KeyedList {
                items,
                pagination: None,
            })
            | ListEnvelope::Bare(items) => Page::slice(items, page, page_size),
        }
    }
}

/// One normalized page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
}

impl<T> Page<T> {
    /// Empty result used when a fetch fails
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 1,
            page: 1,
        }
    }

    /// Client-side pagination over a full collection
    pub fn slice(all: Vec<T>, page: u32, page_size: u32) -> Self {
        let page = page.max(1);
        let total = all.len() as u64;
        let total_pages = page_count(total, page_size);
        let start = (page as usize - 1).saturating_mul(page_size as usize);
        let items = all
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Self {
            items,
            total,
            total_pages,
            page,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
