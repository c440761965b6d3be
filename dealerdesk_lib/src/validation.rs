use dealerdesk_api::types::{
    DealerID, DealerStatus, OrderStatus, TestDriveStatus, UserRole, UserStatus, VehicleStatus,
};

use crate::error::DealerDeskError;
use crate::filter::TimePeriod;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_REGION_LENGTH: usize = 60;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, DealerDeskError> {
    if input.len() > max_len {
        return Err(DealerDeskError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(DealerDeskError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a free-text search term: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, DealerDeskError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a region filter value: enforce length, strip control chars, trim.
pub fn validate_region(input: &str) -> Result<String, DealerDeskError> {
    sanitize_text(input, MAX_REGION_LENGTH)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, DealerDeskError> {
    if page < 1 {
        return Err(DealerDeskError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: i64) -> Result<i64, DealerDeskError> {
    if !(1..=100).contains(&page_size) {
        return Err(DealerDeskError::InvalidInput(
            "page_size must be between 1 and 100".to_string(),
        ));
    }
    Ok(page_size)
}

/// Validate a dealer id (must be positive).
pub fn validate_dealer_id(dealer_id: i64) -> Result<DealerID, DealerDeskError> {
    if dealer_id < 1 {
        return Err(DealerDeskError::InvalidInput(
            "dealer id must be positive".to_string(),
        ));
    }
    Ok(dealer_id)
}

/// Validate a time period: case-insensitive, supports shorthand 7d/30d/t.
pub fn validate_period(input: &str) -> Result<TimePeriod, DealerDeskError> {
    match input.trim().to_lowercase().as_str() {
        "all" => Ok(TimePeriod::All),
        "today" | "t" => Ok(TimePeriod::Today),
        "last7days" | "7d" => Ok(TimePeriod::Last7Days),
        "last30days" | "30d" => Ok(TimePeriod::Last30Days),
        _ => Err(DealerDeskError::InvalidInput(format!(
            "unknown period '{}'. Valid values: all, today (t), last7days (7d), last30days (30d)",
            input
        ))),
    }
}

/// Validate a dealer status string.
pub fn validate_dealer_status(input: &str) -> Result<DealerStatus, DealerDeskError> {
    match input.trim().to_lowercase().as_str() {
        "active" => Ok(DealerStatus::Active),
        "inactive" => Ok(DealerStatus::Inactive),
        _ => Err(DealerDeskError::InvalidInput(format!(
            "unknown dealer status '{}'. Valid values: active, inactive",
            input
        ))),
    }
}

/// Validate a user status string.
pub fn validate_user_status(input: &str) -> Result<UserStatus, DealerDeskError> {
    match input.trim().to_lowercase().as_str() {
        "active" => Ok(UserStatus::Active),
        "inactive" => Ok(UserStatus::Inactive),
        _ => Err(DealerDeskError::InvalidInput(format!(
            "unknown user status '{}'. Valid values: active, inactive",
            input
        ))),
    }
}

/// Validate a user role string (kebab-case, supports shorthand m/s).
pub fn validate_user_role(input: &str) -> Result<UserRole, DealerDeskError> {
    match input.trim().to_lowercase().as_str() {
        "admin" => Ok(UserRole::Admin),
        "dealer-manager" | "manager" | "m" => Ok(UserRole::DealerManager),
        "dealer-staff" | "staff" | "s" => Ok(UserRole::DealerStaff),
        _ => Err(DealerDeskError::InvalidInput(format!(
            "unknown role '{}'. Valid values: admin, dealer-manager (m), dealer-staff (s)",
            input
        ))),
    }
}

/// Validate a vehicle variant status string (kebab-case).
pub fn validate_vehicle_status(input: &str) -> Result<VehicleStatus, DealerDeskError> {
    match input.trim().to_lowercase().as_str() {
        "available" => Ok(VehicleStatus::Available),
        "coming-soon" => Ok(VehicleStatus::ComingSoon),
        "discontinued" => Ok(VehicleStatus::Discontinued),
        _ => Err(DealerDeskError::InvalidInput(format!(
            "unknown vehicle status '{}'. Valid values: available, coming-soon, discontinued",
            input
        ))),
    }
}

/// Validate a sales order status string (kebab-case).
pub fn validate_order_status(input: &str) -> Result<OrderStatus, DealerDeskError> {
    match input.trim().to_lowercase().as_str() {
        "pending" => Ok(OrderStatus::Pending),
        "confirmed" => Ok(OrderStatus::Confirmed),
        "in-delivery" => Ok(OrderStatus::InDelivery),
        "delivered" => Ok(OrderStatus::Delivered),
        "cancelled" => Ok(OrderStatus::Cancelled),
        _ => Err(DealerDeskError::InvalidInput(format!(
            "unknown order status '{}'. Valid values: pending, confirmed, in-delivery, \
             delivered, cancelled",
            input
        ))),
    }
}

/// Validate a test drive status string.
pub fn validate_test_drive_status(input: &str) -> Result<TestDriveStatus, DealerDeskError> {
    match input.trim().to_lowercase().as_str() {
        "pending" => Ok(TestDriveStatus::Pending),
        "confirmed" => Ok(TestDriveStatus::Confirmed),
        "completed" => Ok(TestDriveStatus::Completed),
        "cancelled" => Ok(TestDriveStatus::Cancelled),
        _ => Err(DealerDeskError::InvalidInput(format!(
            "unknown test drive status '{}'. Valid values: pending, confirmed, completed, \
             cancelled",
            input
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Search/region sanitization --

    #[test]
    fn search_normal_text() {
        assert_eq!(validate_search("Munro").unwrap(), "Munro");
    }

    #[test]
    fn search_control_chars_stripped() {
        assert_eq!(validate_search("Mun\x00ro\x01").unwrap(), "Munro");
    }

    #[test]
    fn search_max_length_exceeded() {
        let long = "x".repeat(MAX_SEARCH_LENGTH + 1);
        assert!(validate_search(&long).is_err());
    }

    #[test]
    fn search_empty_after_trim() {
        assert!(validate_search("   ").is_err());
    }

    #[test]
    fn search_unicode_preserved() {
        assert_eq!(validate_search("Garc\u{00ED}a").unwrap(), "Garc\u{00ED}a");
    }

    #[test]
    fn region_whitespace_trimmed() {
        assert_eq!(validate_region("  North  ").unwrap(), "North");
    }

    #[test]
    fn region_max_length_exceeded() {
        let long = "x".repeat(MAX_REGION_LENGTH + 1);
        assert!(validate_region(&long).is_err());
    }

    // -- Page bounds --

    #[test]
    fn page_valid() {
        assert_eq!(validate_page(1).unwrap(), 1);
        assert_eq!(validate_page(100).unwrap(), 100);
    }

    #[test]
    fn page_zero_rejected() {
        assert!(validate_page(0).is_err());
    }

    #[test]
    fn page_negative_rejected() {
        assert!(validate_page(-1).is_err());
    }

    #[test]
    fn page_size_valid() {
        assert_eq!(validate_page_size(1).unwrap(), 1);
        assert_eq!(validate_page_size(100).unwrap(), 100);
    }

    #[test]
    fn page_size_out_of_bounds_rejected() {
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(101).is_err());
    }

    // -- Dealer id --

    #[test]
    fn dealer_id_valid() {
        assert_eq!(validate_dealer_id(7).unwrap(), 7);
    }

    #[test]
    fn dealer_id_non_positive_rejected() {
        assert!(validate_dealer_id(0).is_err());
        assert!(validate_dealer_id(-3).is_err());
    }

    // -- Period --

    #[test]
    fn period_canonical_values() {
        assert_eq!(validate_period("all").unwrap(), TimePeriod::All);
        assert_eq!(validate_period("today").unwrap(), TimePeriod::Today);
        assert_eq!(validate_period("last7days").unwrap(), TimePeriod::Last7Days);
        assert_eq!(
            validate_period("last30days").unwrap(),
            TimePeriod::Last30Days
        );
    }

    #[test]
    fn period_shorthand() {
        assert_eq!(validate_period("t").unwrap(), TimePeriod::Today);
        assert_eq!(validate_period("7d").unwrap(), TimePeriod::Last7Days);
        assert_eq!(validate_period("30d").unwrap(), TimePeriod::Last30Days);
    }

    #[test]
    fn period_mixed_case() {
        assert_eq!(validate_period("Today").unwrap(), TimePeriod::Today);
        assert_eq!(validate_period("LAST7DAYS").unwrap(), TimePeriod::Last7Days);
    }

    #[test]
    fn period_invalid() {
        assert!(validate_period("yesterday").is_err());
        assert!(validate_period("").is_err());
    }

    // -- Status validators --

    #[test]
    fn dealer_status_valid() {
        assert!(matches!(
            validate_dealer_status("active").unwrap(),
            DealerStatus::Active
        ));
        assert!(matches!(
            validate_dealer_status("Inactive").unwrap(),
            DealerStatus::Inactive
        ));
    }

    #[test]
    fn dealer_status_invalid() {
        assert!(validate_dealer_status("closed").is_err());
    }

    #[test]
    fn user_role_valid() {
        assert!(matches!(validate_user_role("admin").unwrap(), UserRole::Admin));
        assert!(matches!(
            validate_user_role("dealer-manager").unwrap(),
            UserRole::DealerManager
        ));
        assert!(matches!(
            validate_user_role("staff").unwrap(),
            UserRole::DealerStaff
        ));
    }

    #[test]
    fn user_role_invalid() {
        assert!(validate_user_role("owner").is_err());
    }

    #[test]
    fn vehicle_status_kebab() {
        assert!(matches!(
            validate_vehicle_status("coming-soon").unwrap(),
            VehicleStatus::ComingSoon
        ));
    }

    #[test]
    fn order_status_valid() {
        assert!(matches!(
            validate_order_status("in-delivery").unwrap(),
            OrderStatus::InDelivery
        ));
        assert!(matches!(
            validate_order_status("CANCELLED").unwrap(),
            OrderStatus::Cancelled
        ));
    }

    #[test]
    fn order_status_invalid() {
        assert!(validate_order_status("on-hold").is_err());
    }

    #[test]
    fn test_drive_status_valid() {
        assert!(matches!(
            validate_test_drive_status("completed").unwrap(),
            TestDriveStatus::Completed
        ));
    }

    #[test]
    fn test_drive_status_invalid() {
        assert!(validate_test_drive_status("no-show").is_err());
    }
}
