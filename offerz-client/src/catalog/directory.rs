//! Store directory and store page tabs

use std::fmt;
use std::str::FromStr;

use shared::models::{Coupon, CouponKind, Store};

/// Initial-letter filter of the stores page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterFilter {
    #[default]
    All,
    Letter(char),
}

impl LetterFilter {
    /// `All`, then `A` through `Z`
    pub fn alphabet() -> impl Iterator<Item = LetterFilter> {
        std::iter::once(LetterFilter::All).chain(('A'..='Z').map(LetterFilter::Letter))
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            LetterFilter::All => true,
            LetterFilter::Letter(letter) => name.to_uppercase().starts_with(*letter),
        }
    }
}

impl fmt::Display for LetterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterFilter::All => f.write_str("All"),
            LetterFilter::Letter(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for LetterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(LetterFilter::All);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(LetterFilter::Letter(c.to_ascii_uppercase()))
            }
            _ => Err(format!("not a letter filter: {s}")),
        }
    }
}

/// Client-side filtering over the full store list
#[derive(Debug, Clone, Default)]
pub struct StoreDirectory {
    stores: Vec<Store>,
    letter: LetterFilter,
    search: String,
}

impl StoreDirectory {
    pub fn new(stores: Vec<Store>) -> Self {
        Self {
            stores,
            ..Default::default()
        }
    }

    pub fn set_letter(&mut self, letter: LetterFilter) {
        self.letter = letter;
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.trim().to_lowercase();
    }

    pub fn letter(&self) -> LetterFilter {
        self.letter
    }

    /// Stores passing both filters, in backend order
    pub fn visible(&self) -> Vec<&Store> {
        self.stores
            .iter()
            .filter(|s| self.letter.matches(&s.name))
            .filter(|s| self.search.is_empty() || s.name.to_lowercase().contains(&self.search))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Coupon filter tabs on a store page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreTab {
    #[default]
    All,
    /// Code coupons
    Codes,
    /// Deals
    Sales,
}

impl StoreTab {
    pub const ALL: [StoreTab; 3] = [StoreTab::All, StoreTab::Codes, StoreTab::Sales];

    pub fn label(&self) -> &'static str {
        match self {
            StoreTab::All => "All",
            StoreTab::Codes => "Codes",
            StoreTab::Sales => "Sales",
        }
    }

    pub fn matches(&self, coupon: &Coupon) -> bool {
        match self {
            StoreTab::All => true,
            StoreTab::Codes => coupon.kind == CouponKind::Code,
            StoreTab::Sales => coupon.kind == CouponKind::Deal,
        }
    }

    pub fn filter<'a>(&self, coupons: &'a [Coupon]) -> Vec<&'a Coupon> {
        coupons.iter().filter(|c| self.matches(c)).collect()
    }
}

impl FromStr for StoreTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoreTab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab: {s}"))
    }
}
