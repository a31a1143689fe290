//! Static page Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-stored HTML page behind a fixed route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPage {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Update static page payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageUpdate {
    pub content: String,
}

/// The fixed set of editable informational pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticPageSlug {
    AboutUs,
    PrivacyPolicy,
    TermsConditions,
    CookiePolicy,
    ContactUs,
}

#[derive(Debug, Error)]
#[error("unknown static page: {0}")]
pub struct UnknownPage(pub String);

impl StaticPageSlug {
    pub const ALL: [StaticPageSlug; 5] = [
        StaticPageSlug::AboutUs,
        StaticPageSlug::PrivacyPolicy,
        StaticPageSlug::TermsConditions,
        StaticPageSlug::CookiePolicy,
        StaticPageSlug::ContactUs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaticPageSlug::AboutUs => "about-us",
            StaticPageSlug::PrivacyPolicy => "privacy-policy",
            StaticPageSlug::TermsConditions => "terms-conditions",
            StaticPageSlug::CookiePolicy => "cookie-policy",
            StaticPageSlug::ContactUs => "contact-us",
        }
    }

    /// Title shown while the page loads or when the server has none
    pub fn default_title(&self) -> &'static str {
        match self {
            StaticPageSlug::AboutUs => "About Us",
            StaticPageSlug::PrivacyPolicy => "Privacy Policy",
            StaticPageSlug::TermsConditions => "Terms & Conditions",
            StaticPageSlug::CookiePolicy => "Cookie Policy",
            StaticPageSlug::ContactUs => "Contact Us",
        }
    }
}

impl std::fmt::Display for StaticPageSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StaticPageSlug {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
