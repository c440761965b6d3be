//! Aggregate statistics over the loaded item set.
//!
//! Stat cards are derived values: recomputed from the collection on
//! every change, never stored independently of it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::{ListRecord, Windowed};

/// A named count backing one stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBucket {
    pub label: String,
    pub count: usize,
}

/// Status-bucketed counts over a collection.
///
/// `total` counts every item, including those whose status matches no
/// recognized label; for fully recognized collections the bucket counts
/// sum to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub buckets: Vec<StatBucket>,
    pub total: usize,
}

/// Counts items per recognized status label (case-normalized), in the
/// caller's label order, plus a grand total.
pub fn status_counts<T: ListRecord>(items: &[T], recognized: &[&str]) -> StatusSummary {
    let buckets = recognized
        .iter()
        .map(|label| StatBucket {
            label: (*label).to_string(),
            count: items
                .iter()
                .filter(|item| {
                    item.status()
                        .is_some_and(|s| s.eq_ignore_ascii_case(label))
                })
                .count(),
        })
        .collect();
    StatusSummary {
        buckets,
        total: items.len(),
    }
}

/// Lifecycle bucket of a date-windowed item relative to an evaluation
/// instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalBucket {
    Active,
    Upcoming,
    Expired,
    /// The item is missing a parseable start or end boundary.
    Unclassified,
}

impl TemporalBucket {
    pub fn label(&self) -> &'static str {
        match self {
            TemporalBucket::Active => "active",
            TemporalBucket::Upcoming => "upcoming",
            TemporalBucket::Expired => "expired",
            TemporalBucket::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for TemporalBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies one item: `expired` if `now > end`, else `upcoming` if
/// `now < start`, else `active`. Strict comparisons, checked in that
/// order, so an instant equal to either boundary reads as `active`.
/// Items missing either boundary classify as `Unclassified`.
pub fn classify<T: Windowed>(item: &T, now: DateTime<Utc>) -> TemporalBucket {
    let (Some(start), Some(end)) = (item.starts_at(), item.ends_at()) else {
        return TemporalBucket::Unclassified;
    };
    if now > end {
        TemporalBucket::Expired
    } else if now < start {
        TemporalBucket::Upcoming
    } else {
        TemporalBucket::Active
    }
}

/// Temporal bucket counts over a collection. The four buckets are
/// mutually exclusive and exhaustive: they sum to the collection
/// length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemporalSummary {
    pub active: usize,
    pub upcoming: usize,
    pub expired: usize,
    pub unclassified: usize,
}

impl TemporalSummary {
    pub fn total(&self) -> usize {
        self.active + self.upcoming + self.expired + self.unclassified
    }

    /// Stat-card view of the summary, in presentation order.
    pub fn buckets(&self) -> Vec<StatBucket> {
        [
            (TemporalBucket::Active, self.active),
            (TemporalBucket::Upcoming, self.upcoming),
            (TemporalBucket::Expired, self.expired),
            (TemporalBucket::Unclassified, self.unclassified),
        ]
        .into_iter()
        .map(|(bucket, count)| StatBucket {
            label: bucket.label().to_string(),
            count,
        })
        .collect()
    }
}

/// Classifies every item against `now` and tallies the buckets.
pub fn temporal_counts<T: Windowed>(items: &[T], now: DateTime<Utc>) -> TemporalSummary {
    let mut summary = TemporalSummary::default();
    for item in items {
        match classify(item, now) {
            TemporalBucket::Active => summary.active += 1,
            TemporalBucket::Upcoming => summary.upcoming += 1,
            TemporalBucket::Expired => summary.expired += 1,
            TemporalBucket::Unclassified => summary.unclassified += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use dealerdesk_api::types::{Promotion, SalesOrder};

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
    }

    fn promotion(value: serde_json::Value) -> Promotion {
        serde_json::from_value(value).unwrap()
    }

    fn order(status: &str) -> SalesOrder {
        serde_json::from_value(serde_json::json!({
            "id": 1, "customerName": "X", "status": status
        }))
        .unwrap()
    }

    #[test]
    fn status_counts_sum_to_length_when_all_recognized() {
        let orders = vec![order("pending"), order("pending"), order("delivered")];
        let summary = status_counts(&orders, &["pending", "delivered"]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.buckets[0].label, "pending");
        assert_eq!(summary.buckets[0].count, 2);
        assert_eq!(summary.buckets[1].count, 1);
        let bucket_sum: usize = summary.buckets.iter().map(|b| b.count).sum();
        assert_eq!(bucket_sum, summary.total);
    }

    #[test]
    fn status_counts_case_normalized() {
        let orders = vec![order("Pending"), order("PENDING")];
        let summary = status_counts(&orders, &["pending"]);
        assert_eq!(summary.buckets[0].count, 2);
    }

    #[test]
    fn unrecognized_status_counts_toward_total_only() {
        let orders = vec![order("pending"), order("on-hold"), order("")];
        let summary = status_counts(&orders, &["pending"]);
        assert_eq!(summary.total, 3);
        let bucket_sum: usize = summary.buckets.iter().map(|b| b.count).sum();
        assert_eq!(bucket_sum, 1);
    }

    #[test]
    fn classify_expired_upcoming_active() {
        let now = fixed_now();
        let expired = promotion(serde_json::json!({
            "id": 1, "title": "A", "startDate": "2024-01-01", "endDate": "2024-03-01"
        }));
        let upcoming = promotion(serde_json::json!({
            "id": 2, "title": "B", "startDate": "2024-07-01", "endDate": "2024-08-01"
        }));
        let active = promotion(serde_json::json!({
            "id": 3, "title": "C", "startDate": "2024-01-01", "endDate": "2024-12-31"
        }));
        assert_eq!(classify(&expired, now), TemporalBucket::Expired);
        assert_eq!(classify(&upcoming, now), TemporalBucket::Upcoming);
        assert_eq!(classify(&active, now), TemporalBucket::Active);
    }

    #[test]
    fn boundary_equality_is_active() {
        let now = fixed_now();
        let starts_now = promotion(serde_json::json!({
            "id": 1, "title": "A", "startDate": "2024-06-15", "endDate": "2024-07-01"
        }));
        let ends_now = promotion(serde_json::json!({
            "id": 2, "title": "B", "startDate": "2024-06-01", "endDate": "2024-06-15"
        }));
        let zero_duration = promotion(serde_json::json!({
            "id": 3, "title": "C", "startDate": "2024-06-15", "endDate": "2024-06-15"
        }));
        assert_eq!(classify(&starts_now, now), TemporalBucket::Active);
        assert_eq!(classify(&ends_now, now), TemporalBucket::Active);
        assert_eq!(classify(&zero_duration, now), TemporalBucket::Active);
    }

    #[test]
    fn malformed_dates_are_unclassified_not_a_panic() {
        let now = fixed_now();
        let bad_start = promotion(serde_json::json!({
            "id": 1, "title": "A", "startDate": "not-a-date", "endDate": "2024-12-31"
        }));
        let missing_end = promotion(serde_json::json!({
            "id": 2, "title": "B", "startDate": "2024-01-01"
        }));
        assert_eq!(classify(&bad_start, now), TemporalBucket::Unclassified);
        assert_eq!(classify(&missing_end, now), TemporalBucket::Unclassified);
    }

    #[test]
    fn temporal_buckets_partition_the_collection() {
        let now = fixed_now();
        let promotions = vec![
            promotion(serde_json::json!({
                "id": 1, "title": "A", "startDate": "2024-01-01", "endDate": "2024-03-01"
            })),
            promotion(serde_json::json!({
                "id": 2, "title": "B", "startDate": "2024-07-01", "endDate": "2024-08-01"
            })),
            promotion(serde_json::json!({
                "id": 3, "title": "C", "startDate": "2024-01-01", "endDate": "2024-12-31"
            })),
            promotion(serde_json::json!({
                "id": 4, "title": "D", "startDate": "oops", "endDate": "2024-12-31"
            })),
        ];
        let summary = temporal_counts(&promotions, now);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.upcoming, 1);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.unclassified, 1);
        assert_eq!(summary.total(), promotions.len());
    }

    #[test]
    fn recomputation_tracks_the_collection() {
        let now = fixed_now();
        let mut promotions = vec![promotion(serde_json::json!({
            "id": 1, "title": "A", "startDate": "2024-01-01", "endDate": "2024-12-31"
        }))];
        assert_eq!(temporal_counts(&promotions, now).active, 1);

        promotions.push(promotion(serde_json::json!({
            "id": 2, "title": "B", "startDate": "2024-07-01", "endDate": "2024-08-01"
        })));
        let summary = temporal_counts(&promotions, now);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.upcoming, 1);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let summary = temporal_counts::<Promotion>(&[], fixed_now());
        assert_eq!(summary.total(), 0);
        let status = status_counts::<SalesOrder>(&[], &["pending"]);
        assert_eq!(status.total, 0);
        assert_eq!(status.buckets[0].count, 0);
    }
}
