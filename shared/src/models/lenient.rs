//! Tolerant field decoders
//!
//! Records are written by hand in the admin panel and by older backend
//! versions, so individual fields may be `null` or hold values this client
//! does not know. A bad field falls back to its default instead of failing
//! the whole list it arrived in.

use serde::{Deserialize, Deserializer};

use super::store::LogoType;

/// `null` decodes as `T::default()`
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unknown, empty or non-string logo types decode as `None`
pub(crate) fn logo_type<'de, D>(deserializer: D) -> Result<Option<LogoType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(|s| s.trim().parse().ok()))
}
