//! Back-office user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DealerID;

/// A dashboard user returned by the `/users` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Display name. Older backend builds send this as `name`.
    #[serde(alias = "name")]
    pub full_name: String,

    #[serde(default)]
    pub email: Option<String>,

    /// Raw role string; recognized values are listed in [`UserRole::LABELS`].
    #[serde(default)]
    pub role: String,

    /// Raw status string; recognized values are listed in [`UserStatus::LABELS`].
    #[serde(default)]
    pub status: String,

    /// Dealer the account is attached to. Platform admins have none.
    #[serde(default)]
    pub dealer_id: Option<DealerID>,

    #[serde(default, deserialize_with = "super::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recognized user roles.
#[derive(Clone, Copy)]
pub enum UserRole {
    Admin,
    DealerManager,
    DealerStaff,
}

impl UserRole {
    /// Recognized role labels, in stat-card order.
    pub const LABELS: [&'static str; 3] = ["admin", "dealer-manager", "dealer-staff"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::DealerManager => "dealer-manager",
            UserRole::DealerStaff => "dealer-staff",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recognized account states.
#[derive(Clone, Copy)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Recognized status labels, in stat-card order.
    pub const LABELS: [&'static str; 2] = ["active", "inactive"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
