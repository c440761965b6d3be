//! Vehicle variant (trim/configuration) types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sellable vehicle variant returned by the `/vehicle-variants` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleVariant {
    pub id: i64,

    /// Variant display name, e.g. "VF 8 Eco".
    pub name: String,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    /// Battery capacity in kWh.
    #[serde(default)]
    pub battery_kwh: Option<f64>,

    /// WLTP range in kilometers.
    #[serde(default)]
    pub range_km: Option<i64>,

    /// List price in the platform currency.
    #[serde(default)]
    pub price: Option<f64>,

    /// Raw status string; recognized values are listed in [`VehicleStatus::LABELS`].
    #[serde(default)]
    pub status: String,

    #[serde(default, deserialize_with = "super::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recognized variant availability states.
#[derive(Clone, Copy)]
pub enum VehicleStatus {
    Available,
    ComingSoon,
    Discontinued,
}

impl VehicleStatus {
    /// Recognized status labels, in stat-card order.
    pub const LABELS: [&'static str; 3] = ["available", "coming-soon", "discontinued"];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::ComingSoon => "coming-soon",
            VehicleStatus::Discontinued => "discontinued",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
