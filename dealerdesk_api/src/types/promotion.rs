//! Promotion campaign types.
//!
//! Promotions carry no status field; their lifecycle (upcoming, active,
//! expired) is derived from the start/end window relative to now.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DealerID;

/// A marketing promotion returned by the `/promotions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: i64,

    /// Campaign headline. Older backend builds send this as `name`.
    #[serde(alias = "name")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Percentage discount. Older backend builds send this as `discount`.
    #[serde(default, alias = "discount")]
    pub discount_percent: Option<f64>,

    /// Dealer the promotion is scoped to; platform-wide when absent.
    #[serde(default)]
    pub dealer_id: Option<DealerID>,

    #[serde(default, deserialize_with = "super::datetime::lenient")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::datetime::lenient")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "super::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}
