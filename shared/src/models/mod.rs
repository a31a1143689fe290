//! Data models
//!
//! Wire types for the catalog backend. Field names follow the backend's
//! camelCase JSON; identifiers are opaque strings read from `_id`.

pub mod blog;
pub mod category;
pub mod coupon;
mod lenient;
pub mod message;
pub mod page;
pub mod settings;
pub mod stats;
pub mod store;

// Re-exports
pub use blog::*;
pub use category::*;
pub use coupon::*;
pub use message::*;
pub use page::*;
pub use settings::*;
pub use stats::*;
pub use store::*;
