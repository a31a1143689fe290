//! Shared types for the ClickOfferz catalog
//!
//! Entities, request payloads and response envelopes used by the client
//! library, the terminal front end and the test backends.

pub mod client;
pub mod models;
pub mod response;
pub mod slug;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{Envelope, ListEnvelope, Page, Pagination};
pub use slug::store_slug;
