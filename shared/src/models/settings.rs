//! Site settings Model

use serde::{Deserialize, Serialize};

/// Social profile links shown in the header banner and footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    pub const PLATFORMS: [&'static str; 6] = [
        "facebook",
        "instagram",
        "twitter",
        "youtube",
        "tiktok",
        "linkedin",
    ];

    pub fn get(&self, platform: &str) -> Option<&str> {
        let link = match platform {
            "facebook" => &self.facebook,
            "instagram" => &self.instagram,
            "twitter" => &self.twitter,
            "youtube" => &self.youtube,
            "tiktok" => &self.tiktok,
            "linkedin" => &self.linkedin,
            _ => return None,
        };
        link.as_deref().filter(|l| !l.is_empty())
    }

    /// Set a platform link; blank values clear it. Returns false for unknown platforms.
    pub fn set(&mut self, platform: &str, url: &str) -> bool {
        let slot = match platform {
            "facebook" => &mut self.facebook,
            "instagram" => &mut self.instagram,
            "twitter" => &mut self.twitter,
            "youtube" => &mut self.youtube,
            "tiktok" => &mut self.tiktok,
            "linkedin" => &mut self.linkedin,
            _ => return false,
        };
        let url = url.trim();
        *slot = (!url.is_empty()).then(|| url.to_string());
        true
    }

    /// Configured links in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::PLATFORMS
            .into_iter()
            .filter_map(|p| self.get(p).map(|url| (p, url)))
    }
}

/// Site settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub social_links: SocialLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links() {
        let settings: Settings = serde_json::from_str(
            r#"{"socialLinks":{"facebook":"https://fb.com/x","tiktok":""}}"#,
        )
        .unwrap();
        let links: Vec<_> = settings.social_links.iter().collect();
        assert_eq!(links, vec![("facebook", "https://fb.com/x")]);

        let mut social = settings.social_links;
        assert!(social.set("youtube", " https://yt.com/x "));
        assert!(social.set("facebook", ""));
        assert!(!social.set("myspace", "https://myspace.com"));
        assert_eq!(social.get("youtube"), Some("https://yt.com/x"));
        assert_eq!(social.get("facebook"), None);
    }
}
