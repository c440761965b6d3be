//! Test drive booking types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DealerID;

/// A test drive booking returned by the `/test-drives` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDrive {
    pub id: i64,

    /// Prospect name. Older backend builds send this as `customer`.
    #[serde(alias = "customer")]
    pub customer_name: String,

    #[serde(default, alias = "phone")]
    pub customer_phone: Option<String>,

    pub dealer_id: Option<DealerID>,

    /// Vehicle variant requested for the drive.
    #[serde(default)]
    pub variant_id: Option<i64>,

    /// Booked slot. Older backend builds send this as `appointmentDate`.
    #[serde(
        default,
        alias = "appointmentDate",
        deserialize_with = "super::datetime::lenient"
    )]
    pub scheduled_at: Option<DateTime<Utc>>,

    /// Raw status string; recognized values are listed in [`TestDriveStatus::LABELS`].
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default, deserialize_with = "super::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recognized booking states.
#[derive(Clone, Copy)]
pub enum TestDriveStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl TestDriveStatus {
    /// Recognized status labels, in stat-card order.
    pub const LABELS: [&'static str; 4] = ["pending", "confirmed", "completed", "cancelled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestDriveStatus::Pending => "pending",
            TestDriveStatus::Confirmed => "confirmed",
            TestDriveStatus::Completed => "completed",
            TestDriveStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for TestDriveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
