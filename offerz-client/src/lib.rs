//! ClickOfferz client
//!
//! Typed access to the coupon catalog backend: transports, the listing
//! engine behind the coupon pages, search suggestions, the admin session
//! and the admin CRUD surface.
//!
//! ```ignore
//! let config = ClientConfig::from_env();
//! let mut client = OffersClient::from_config(&config)?;
//! client.restore().await;
//!
//! let mut listing = Listing::new(CatalogQuery::coupons());
//! let pending = listing.set_search("shoes");
//! listing.load(&client.catalog(), pending, &mut ()).await;
//! ```

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod notice;
pub mod routes;
pub mod search;
pub mod session;
pub mod validation;

pub use api::{AdminApi, OffersClient, PublicApi, or_default};
pub use catalog::{CatalogApi, CatalogFilter, CatalogPage, CatalogQuery, Listing, Pager};
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use notice::{Notice, NoticeLevel};
pub use routes::{Access, Route, guard};
pub use search::{Suggestion, SuggestionIndex, Suggestions};
pub use session::{AuthSession, AuthState, LoginOutcome, TokenStore};

// Re-export shared types for convenience
pub use shared::client::{AdminProfile, LoginResponse};
pub use shared::models;
