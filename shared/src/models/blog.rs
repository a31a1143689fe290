//! Blog Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::store::default_true;

/// Blog post entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Unique routing key
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub excerpt: String,
    /// HTML body
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update blog payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image: String,
    pub tags: Vec<String>,
    pub is_active: bool,
}

impl BlogInput {
    /// Split a comma-separated tag field, dropping blanks
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&BlogPost> for BlogInput {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            image: post.image.clone().unwrap_or_default(),
            tags: post.tags.clone(),
            is_active: post.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            BlogInput::parse_tags("savings, tips,, black friday ,"),
            vec!["savings", "tips", "black friday"]
        );
        assert!(BlogInput::parse_tags("  ").is_empty());
    }
}
