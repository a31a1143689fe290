//! Admin dashboard counters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_stores: u64,
    #[serde(default)]
    pub total_coupons: u64,
    #[serde(default)]
    pub active_coupons: u64,
    #[serde(default)]
    pub expired_coupons: u64,
}
