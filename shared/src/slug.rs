//! Store route slugs
//!
//! Store slugs are never stored; every link to a store page derives the slug
//! from the store name with [`store_slug`]. Two names that normalize to the
//! same slug collide and the backend decides which store is served.

/// Derive the routing slug for a store name.
///
/// Trims, lowercases and collapses every run of whitespace into a single `-`.
pub fn store_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
