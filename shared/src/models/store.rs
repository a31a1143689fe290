//! Store Model

use serde::{Deserialize, Serialize};

use crate::slug::store_slug;

/// How a logo string should be interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoType {
    #[default]
    Emoji,
    Text,
    Url,
    Upload,
}

impl std::str::FromStr for LogoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emoji" => Ok(LogoType::Emoji),
            "text" => Ok(LogoType::Text),
            "url" => Ok(LogoType::Url),
            "upload" => Ok(LogoType::Upload),
            other => Err(format!("unknown logo type: {other}")),
        }
    }
}

/// A logo resolved for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo<'a> {
    /// Image source: remote URL or `data:` URI
    Image(&'a str),
    /// Short text rendered as a wordmark
    Text(&'a str),
    /// Emoji or any other glyph shown inline
    Emoji(&'a str),
}

impl<'a> Logo<'a> {
    /// Resolve a logo from its raw value and declared type.
    ///
    /// Values that look like images (`http...` or `data:`) render as images
    /// even when the declared type says otherwise.
    pub fn resolve(logo: &'a str, logo_type: Option<LogoType>) -> Self {
        let looks_like_image = logo.starts_with("http") || logo.starts_with("data:");
        match logo_type.unwrap_or_default() {
            LogoType::Url | LogoType::Upload => Logo::Image(logo),
            _ if looks_like_image => Logo::Image(logo),
            LogoType::Text => Logo::Text(logo),
            LogoType::Emoji => Logo::Emoji(logo),
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Logo::Image(s) | Logo::Text(s) | Logo::Emoji(s) => s,
        }
    }
}

/// Store entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "super::lenient::logo_type")]
    pub logo_type: Option<LogoType>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Number of live offers
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub offers: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Store {
    /// Routing slug derived from the name
    pub fn slug(&self) -> String {
        store_slug(&self.name)
    }

    pub fn logo(&self) -> Logo<'_> {
        Logo::resolve(&self.logo, self.logo_type)
    }
}

pub(crate) fn default_true() -> bool {
    true
}

/// Create/update store payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInput {
    pub name: String,
    pub logo: String,
    pub logo_type: LogoType,
    pub category: String,
    pub website: String,
    pub description: String,
    pub offers: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<&Store> for StoreInput {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            logo: store.logo.clone(),
            logo_type: store.logo_type.unwrap_or_default(),
            category: store.category.clone().unwrap_or_default(),
            website: store.website.clone().unwrap_or_default(),
            description: store.description.clone().unwrap_or_default(),
            offers: store.offers,
            is_active: store.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_resolution() {
        assert_eq!(Logo::resolve("🛒", None), Logo::Emoji("🛒"));
        assert_eq!(Logo::resolve("🛒", Some(LogoType::Emoji)), Logo::Emoji("🛒"));
        assert_eq!(Logo::resolve("NIKE", Some(LogoType::Text)), Logo::Text("NIKE"));
        assert_eq!(
            Logo::resolve("https://cdn/x.png", Some(LogoType::Url)),
            Logo::Image("https://cdn/x.png")
        );
        assert_eq!(
            Logo::resolve("data:image/png;base64,AAA", Some(LogoType::Upload)),
            Logo::Image("data:image/png;base64,AAA")
        );
        // declared emoji but clearly an image
        assert_eq!(
            Logo::resolve("http://img/logo.jpg", Some(LogoType::Emoji)),
            Logo::Image("http://img/logo.jpg")
        );
    }

    #[test]
    fn test_store_decodes_mongo_id_and_defaults() {
        let store: Store =
            serde_json::from_str(r#"{"_id":"65ab","name":"Best Buy","logo":"🏬"}"#).unwrap();
        assert_eq!(store.id, "65ab");
        assert_eq!(store.slug(), "best-buy");
        assert_eq!(store.offers, 0);
        assert!(store.is_active);
        assert_eq!(store.logo(), Logo::Emoji("🏬"));

        let store: Store = serde_json::from_str(r#"{"id":"7","name":"Nike"}"#).unwrap();
        assert_eq!(store.id, "7");
    }

    #[test]
    fn test_sloppy_store_fields() {
        let store: Store = serde_json::from_str(
            r#"{"_id":"s1","name":"Nike","logo":null,"logoType":"","offers":null}"#,
        )
        .unwrap();
        assert_eq!(store.logo, "");
        assert_eq!(store.logo_type, None);
        assert_eq!(store.offers, 0);
    }

    #[test]
    fn test_logo_type_parse() {
        assert_eq!("URL".parse::<LogoType>().unwrap(), LogoType::Url);
        assert!("gif".parse::<LogoType>().is_err());
    }
}
