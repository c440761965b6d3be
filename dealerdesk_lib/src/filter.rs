//! Multi-field filter composition over the loaded item set.
//!
//! Filters compose with logical AND; an unset field imposes no
//! constraint. Every computation here is a pure pass over the slice it
//! is given, recomputed by callers on each state or spec change.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};

use dealerdesk_api::types::{Dealer, DealerID};

use crate::records::ListRecord;

/// Time window evaluated against a record's timestamp field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimePeriod {
    /// No temporal constraint.
    #[default]
    All,
    /// Same calendar day as the evaluation instant (UTC).
    Today,
    /// Within the trailing 7 days, inclusive of the evaluation instant.
    Last7Days,
    /// Within the trailing 30 days, inclusive of the evaluation instant.
    Last30Days,
}

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::All => "all",
            TimePeriod::Today => "today",
            TimePeriod::Last7Days => "last7days",
            TimePeriod::Last30Days => "last30days",
        }
    }

    /// Whether a timestamp falls inside this window. Records without a
    /// timestamp fail every window except [`TimePeriod::All`].
    fn contains(&self, ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let days = match self {
            TimePeriod::All => return true,
            TimePeriod::Today => {
                return ts.map_or(false, |ts| ts.date_naive() == now.date_naive())
            }
            TimePeriod::Last7Days => 7,
            TimePeriod::Last30Days => 30,
        };
        match ts {
            Some(ts) => ts <= now && ts >= now - Duration::days(days),
            None => false,
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The currently selected narrowing criteria for a list view.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub period: TimePeriod,
    /// Status equality (case-insensitive).
    pub status: Option<String>,
    /// Owning dealer equality.
    pub dealer_id: Option<DealerID>,
    /// Case-insensitive substring match on the record's region.
    pub region: Option<String>,
    /// Case-insensitive substring match over the record's search fields.
    pub search: Option<String>,
}

impl FilterSpec {
    /// True when no field narrows anything.
    pub fn is_unconstrained(&self) -> bool {
        self.period == TimePeriod::All
            && self.status.is_none()
            && self.dealer_id.is_none()
            && self.region.is_none()
            && self.search.is_none()
    }

    fn matches<T: ListRecord>(&self, record: &T, now: DateTime<Utc>) -> bool {
        if let Some(status) = &self.status {
            match record.status() {
                Some(s) if s.eq_ignore_ascii_case(status) => {}
                _ => return false,
            }
        }
        if let Some(dealer_id) = self.dealer_id {
            if record.dealer_id() != Some(dealer_id) {
                return false;
            }
        }
        if let Some(region) = &self.region {
            match record.region() {
                Some(r) if contains_ignore_case(r, region) => {}
                _ => return false,
            }
        }
        if let Some(search) = &self.search {
            let hit = record
                .search_haystacks()
                .iter()
                .any(|hay| contains_ignore_case(hay, search));
            if !hit {
                return false;
            }
        }
        self.period.contains(record.timestamp(), now)
    }
}

/// Returns the subset of `items` matching every active field of `spec`,
/// in input order.
pub fn apply<'a, T: ListRecord>(
    items: &'a [T],
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<&'a T> {
    items.iter().filter(|r| spec.matches(*r, now)).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Distinct, non-empty region values observed in the dealer reference
/// collection, for populating region filter controls. Sorted for stable
/// presentation.
pub fn region_options(dealers: &[Dealer]) -> Vec<String> {
    let mut regions = BTreeSet::new();
    for dealer in dealers {
        if let Some(region) = dealer.region.as_deref() {
            let trimmed = region.trim();
            if !trimmed.is_empty() {
                regions.insert(trimmed.to_string());
            }
        }
    }
    regions.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use dealerdesk_api::types::{Dealer, SalesOrder};

    use super::*;

    fn order(value: serde_json::Value) -> SalesOrder {
        serde_json::from_value(value).unwrap()
    }

    fn dealer(value: serde_json::Value) -> Dealer {
        serde_json::from_value(value).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn sample_orders() -> Vec<SalesOrder> {
        vec![
            order(serde_json::json!({
                "id": 1, "customerName": "Alice Munro", "dealerId": 1,
                "status": "pending", "createdAt": "2024-06-15T08:00:00Z"
            })),
            order(serde_json::json!({
                "id": 2, "customerName": "Bob Tran", "dealerId": 2,
                "status": "confirmed", "createdAt": "2024-06-10T08:00:00Z"
            })),
            order(serde_json::json!({
                "id": 3, "customerName": "Carol Pham", "dealerId": 1,
                "status": "PENDING", "createdAt": "2024-04-01T08:00:00Z"
            })),
        ]
    }

    #[test]
    fn unset_spec_keeps_everything() {
        let orders = sample_orders();
        let spec = FilterSpec::default();
        assert!(spec.is_unconstrained());
        assert_eq!(apply(&orders, &spec, fixed_now()).len(), 3);
    }

    #[test]
    fn status_equality_is_case_insensitive() {
        let orders = sample_orders();
        let spec = FilterSpec {
            status: Some("pending".to_string()),
            ..FilterSpec::default()
        };
        let hits = apply(&orders, &spec, fixed_now());
        assert_eq!(hits.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn filters_compose_with_and() {
        let orders = sample_orders();
        let spec = FilterSpec {
            status: Some("pending".to_string()),
            dealer_id: Some(1),
            period: TimePeriod::Last7Days,
            ..FilterSpec::default()
        };
        let hits = apply(&orders, &spec, fixed_now());
        assert_eq!(hits.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn today_means_same_calendar_day() {
        let orders = sample_orders();
        let spec = FilterSpec {
            period: TimePeriod::Today,
            ..FilterSpec::default()
        };
        let hits = apply(&orders, &spec, fixed_now());
        assert_eq!(hits.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn trailing_window_is_inclusive_of_now() {
        let orders = vec![order(serde_json::json!({
            "id": 9, "customerName": "Edge Case",
            "status": "pending", "createdAt": "2024-06-15T12:00:00Z"
        }))];
        let spec = FilterSpec {
            period: TimePeriod::Last7Days,
            ..FilterSpec::default()
        };
        assert_eq!(apply(&orders, &spec, fixed_now()).len(), 1);
    }

    #[test]
    fn future_timestamps_fall_outside_trailing_windows() {
        let orders = vec![order(serde_json::json!({
            "id": 9, "customerName": "Time Traveler",
            "status": "pending", "createdAt": "2024-06-16T08:00:00Z"
        }))];
        let spec = FilterSpec {
            period: TimePeriod::Last30Days,
            ..FilterSpec::default()
        };
        assert!(apply(&orders, &spec, fixed_now()).is_empty());
    }

    #[test]
    fn missing_timestamp_fails_non_all_periods() {
        let orders = vec![order(serde_json::json!({
            "id": 9, "customerName": "No Date", "status": "pending"
        }))];
        let all = FilterSpec::default();
        let week = FilterSpec {
            period: TimePeriod::Last7Days,
            ..FilterSpec::default()
        };
        assert_eq!(apply(&orders, &all, fixed_now()).len(), 1);
        assert!(apply(&orders, &week, fixed_now()).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let orders = sample_orders();
        let spec = FilterSpec {
            search: Some("munro".to_string()),
            ..FilterSpec::default()
        };
        let hits = apply(&orders, &spec, fixed_now());
        assert_eq!(hits.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn apply_is_idempotent() {
        let orders = sample_orders();
        let spec = FilterSpec {
            status: Some("pending".to_string()),
            ..FilterSpec::default()
        };
        let now = fixed_now();
        let first: Vec<i64> = apply(&orders, &spec, now).iter().map(|o| o.id).collect();
        let second: Vec<i64> = apply(&orders, &spec, now).iter().map(|o| o.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn region_options_deduplicate_and_drop_empties() {
        let dealers = vec![
            dealer(serde_json::json!({"id": 1, "name": "A", "region": "North"})),
            dealer(serde_json::json!({"id": 2, "name": "B", "region": "South"})),
            dealer(serde_json::json!({"id": 3, "name": "C", "region": "North"})),
            dealer(serde_json::json!({"id": 4, "name": "D", "region": ""})),
            dealer(serde_json::json!({"id": 5, "name": "E"})),
        ];
        assert_eq!(region_options(&dealers), vec!["North", "South"]);
    }

    #[test]
    fn region_filter_matches_dealers() {
        let dealers = vec![
            dealer(serde_json::json!({"id": 1, "name": "A", "region": "North", "status": "active"})),
            dealer(serde_json::json!({"id": 2, "name": "B", "region": "South", "status": "active"})),
        ];
        let spec = FilterSpec {
            region: Some("north".to_string()),
            ..FilterSpec::default()
        };
        let hits = apply(&dealers, &spec, fixed_now());
        assert_eq!(hits.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1]);
    }
}
