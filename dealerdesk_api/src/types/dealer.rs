//! Dealer types returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a dealer.
pub type DealerID = i64;

/// A dealership record returned by the `/dealers` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dealer {
    /// Unique dealer identifier.
    pub id: DealerID,

    /// Display name of the dealership.
    pub name: String,

    /// Sales region the dealer belongs to (free-form, e.g. "North").
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Raw status string; recognized values are listed in [`DealerStatus::LABELS`].
    #[serde(default)]
    pub status: String,

    #[serde(default, deserialize_with = "super::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recognized dealer lifecycle states.
#[derive(Clone, Copy)]
pub enum DealerStatus {
    Active,
    Inactive,
}

impl DealerStatus {
    /// Recognized status labels, in stat-card order.
    pub const LABELS: [&'static str; 2] = ["active", "inactive"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DealerStatus::Active => "active",
            DealerStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for DealerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
