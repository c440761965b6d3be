//! Sales order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DealerID;

/// A vehicle sales order returned by the `/sales-orders` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: i64,

    /// Human-readable order code, e.g. "SO-2024-0042".
    #[serde(default)]
    pub code: Option<String>,

    /// Buyer name. Older backend builds send this as `customer`.
    #[serde(alias = "customer")]
    pub customer_name: String,

    #[serde(default, alias = "phone")]
    pub customer_phone: Option<String>,

    pub dealer_id: Option<DealerID>,

    /// Ordered vehicle variant.
    #[serde(default)]
    pub variant_id: Option<i64>,

    #[serde(default)]
    pub quantity: Option<i64>,

    /// Order total. Older backend builds send this as `total`.
    #[serde(default, alias = "total")]
    pub total_price: Option<f64>,

    /// Raw status string; recognized values are listed in [`OrderStatus::LABELS`].
    #[serde(default)]
    pub status: String,

    /// Placement time. Older backend builds send this as `orderDate`.
    #[serde(default, alias = "orderDate", deserialize_with = "super::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recognized order lifecycle states.
#[derive(Clone, Copy)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Recognized status labels, in stat-card order.
    pub const LABELS: [&'static str; 5] =
        ["pending", "confirmed", "in-delivery", "delivered", "cancelled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InDelivery => "in-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
