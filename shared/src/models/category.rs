//! Category Model

use serde::{Deserialize, Serialize};

use super::store::{Logo, LogoType, default_true};

/// Category entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::logo_type")]
    pub image_type: Option<LogoType>,
    #[serde(default)]
    pub color: Option<String>,
    /// Derived server-side
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub coupon_count: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Category {
    /// Uploaded or linked image when present, otherwise the icon glyph
    pub fn badge(&self) -> Logo<'_> {
        match (self.image.as_deref(), self.image_type) {
            (Some(image), Some(LogoType::Url | LogoType::Upload)) if !image.is_empty() => {
                Logo::Image(image)
            }
            _ => Logo::Emoji(self.icon.as_deref().unwrap_or(DEFAULT_CATEGORY_ICON)),
        }
    }
}

pub const DEFAULT_CATEGORY_ICON: &str = "📁";
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// Create/update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub icon: String,
    pub image: String,
    pub image_type: LogoType,
    pub color: String,
    pub is_active: bool,
}

impl Default for CategoryInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            image: String::new(),
            image_type: LogoType::Emoji,
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            is_active: true,
        }
    }
}

impl From<&Category> for CategoryInput {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            icon: c
                .icon
                .clone()
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
            image: c.image.clone().unwrap_or_default(),
            image_type: c.image_type.unwrap_or_default(),
            color: c
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            is_active: c.is_active,
        }
    }
}
