//! Coupon Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::store::{Logo, LogoType, Store, default_true};
use crate::slug::store_slug;

/// Coupon kind: a textual code, or a direct-link deal with no code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponKind {
    #[default]
    Code,
    Deal,
}

impl CouponKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponKind::Code => "Code",
            CouponKind::Deal => "Deal",
        }
    }
}

impl std::fmt::Display for CouponKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CouponKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "code" => Ok(CouponKind::Code),
            "deal" => Ok(CouponKind::Deal),
            other => Err(format!("unknown coupon type: {other}")),
        }
    }
}

/// Coupon entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Denormalized store name; links to the store page via its slug
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub store_name: String,
    #[serde(default)]
    pub store_logo: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::logo_type")]
    pub store_logo_type: Option<LogoType>,
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "super::lenient::null_as_default"
    )]
    pub kind: CouponKind,
    #[serde(default)]
    pub code: Option<String>,
    /// Display label such as "20% OFF"
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub related_coupons: Vec<String>,
    #[serde(default)]
    pub usage_count: Option<u64>,
    #[serde(default, deserialize_with = "super::lenient::null_as_default")]
    pub is_trending: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Coupon {
    pub fn store_slug(&self) -> String {
        store_slug(&self.store_name)
    }

    pub fn store_logo(&self) -> Option<Logo<'_>> {
        self.store_logo
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|logo| Logo::resolve(logo, self.store_logo_type))
    }

    /// Usage count as shown on cards. Unknown counts are reported as such.
    pub fn usage_label(&self) -> String {
        match self.usage_count {
            Some(n) if n > 0 => format!("{n} used"),
            _ => "Not used yet".to_string(),
        }
    }

    /// Expiry parsed from the leading `YYYY-MM-DD` of the stored value
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        let raw = self.expiry.as_deref()?.trim();
        let date = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiry_date().is_some_and(|d| d < today)
    }

    /// Code to reveal, only for code coupons
    pub fn reveal_code(&self) -> Option<&str> {
        match self.kind {
            CouponKind::Code => self.code.as_deref().filter(|c| !c.is_empty()),
            CouponKind::Deal => None,
        }
    }
}

/// Create/update coupon payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponInput {
    pub store_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_logo_type: Option<LogoType>,
    pub title: String,
    pub description: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    pub discount: String,
    pub category: String,
    pub expiry: String,
    pub link: String,
    pub related_coupons: Vec<String>,
    pub usage_count: u64,
    pub is_trending: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CouponInput {
    /// Select the store the coupon belongs to, copying its logo
    pub fn set_store(&mut self, store: &Store) {
        self.store_name = store.name.clone();
        self.store_id = Some(store.id.clone()).filter(|id| !id.is_empty());
        self.store_logo = Some(store.logo.clone());
        self.store_logo_type = Some(store.logo_type.unwrap_or_default());
    }
}

impl From<&Coupon> for CouponInput {
    fn from(c: &Coupon) -> Self {
        Self {
            store_name: c.store_name.clone(),
            store_id: None,
            store_logo: c.store_logo.clone(),
            store_logo_type: c.store_logo_type,
            title: c.title.clone(),
            description: c.description.clone().unwrap_or_default(),
            code: c.code.clone().unwrap_or_default(),
            kind: c.kind,
            discount: c.discount.clone().unwrap_or_default(),
            category: c.category.clone().unwrap_or_default(),
            expiry: c.expiry.clone().unwrap_or_default(),
            link: c.link.clone().unwrap_or_default(),
            related_coupons: c.related_coupons.clone(),
            usage_count: c.usage_count.unwrap_or_default(),
            is_trending: c.is_trending,
            is_active: c.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_wire_format() {
        let json = r#"{
            "_id": "c1",
            "storeName": "Best Buy",
            "title": "10% off TVs",
            "type": "Deal",
            "relatedCoupons": ["TV10", "TV15"],
            "isTrending": true,
            "createdAt": "2024-05-01T10:00:00.000Z"
        }"#;
        let coupon: Coupon = serde_json::from_str(json).unwrap();
        assert_eq!(coupon.kind, CouponKind::Deal);
        assert_eq!(coupon.store_slug(), "best-buy");
        assert_eq!(coupon.related_coupons.len(), 2);
        assert!(coupon.is_trending);
        assert!(coupon.is_active);
        assert!(coupon.created_at.is_some());
        assert_eq!(coupon.reveal_code(), None);
    }

    #[test]
    fn test_one_sloppy_record_does_not_sink_the_list() {
        use crate::response::ListEnvelope;

        let json = r#"[
            {"_id": "c1", "storeName": "Nike", "title": "20% off"},
            {"_id": "c2", "storeName": "Adidas", "title": "Free socks",
             "relatedCoupons": null, "storeLogoType": "", "type": null, "isTrending": null},
            {"_id": "c3", "storeName": "Puma", "title": "BOGO", "storeLogoType": "gif"}
        ]"#;
        let list: ListEnvelope<Coupon> = serde_json::from_str(json).unwrap();
        let coupons = list.into_items();
        assert_eq!(coupons.len(), 3);
        assert!(coupons[1].related_coupons.is_empty());
        assert_eq!(coupons[1].store_logo_type, None);
        assert_eq!(coupons[1].kind, CouponKind::Code);
        assert_eq!(coupons[2].store_logo_type, None);

        let keyed = r#"{"coupons": [{"title": "x", "relatedCoupons": null}],
                        "pagination": {"page": 1, "limit": 12, "total": 1, "totalPages": 1}}"#;
        let list: ListEnvelope<Coupon> = serde_json::from_str(keyed).unwrap();
        assert_eq!(list.into_page(1, 12).items.len(), 1);
    }

    #[test]
    fn test_usage_label_never_fabricates() {
        let mut coupon = Coupon::default();
        assert_eq!(coupon.usage_label(), "Not used yet");
        coupon.usage_count = Some(0);
        assert_eq!(coupon.usage_label(), "Not used yet");
        coupon.usage_count = Some(42);
        assert_eq!(coupon.usage_label(), "42 used");
    }

    #[test]
    fn test_expiry() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut coupon = Coupon {
            expiry: Some("2025-05-31T00:00:00.000Z".into()),
            ..Default::default()
        };
        assert!(coupon.is_expired_on(today));
        coupon.expiry = Some("2025-06-01".into());
        assert!(!coupon.is_expired_on(today));
        coupon.expiry = Some("soon".into());
        assert!(!coupon.is_expired_on(today));
        coupon.expiry = None;
        assert!(!coupon.is_expired_on(today));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("deal".parse::<CouponKind>().unwrap(), CouponKind::Deal);
        assert_eq!("Code".parse::<CouponKind>().unwrap(), CouponKind::Code);
        assert!("sale".parse::<CouponKind>().is_err());
    }

    #[test]
    fn test_set_store_copies_logo() {
        let store = Store {
            id: "s1".into(),
            name: "Nike".into(),
            logo: "https://cdn/nike.png".into(),
            logo_type: Some(LogoType::Url),
            ..Default::default()
        };
        let mut input = CouponInput::default();
        input.set_store(&store);
        assert_eq!(input.store_name, "Nike");
        assert_eq!(input.store_id.as_deref(), Some("s1"));
        assert_eq!(input.store_logo_type, Some(LogoType::Url));
    }
}
