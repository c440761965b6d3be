//! Per-resource accessor configuration for the filter and stats engine.
//!
//! Every resource screen narrows and buckets by different fields. The
//! engine is written once against [`ListRecord`] (and [`Windowed`] for
//! date-windowed resources); each resource type supplies its own
//! accessors here.

use chrono::{DateTime, Utc};

use dealerdesk_api::types::{
    Dealer, DealerID, Promotion, SalesOrder, TestDrive, User, VehicleVariant,
};

/// Field accessors consumed by [`crate::filter`] and [`crate::stats`].
///
/// Defaults mean "this resource does not carry that field": a filter on
/// an absent field matches nothing, and an absent status contributes to
/// totals only.
pub trait ListRecord {
    /// Raw status value, used for equality filtering and status buckets.
    fn status(&self) -> Option<&str> {
        None
    }

    /// Owning dealer, for dealer-scoped screens.
    fn dealer_id(&self) -> Option<DealerID> {
        None
    }

    /// Region value, for region narrowing.
    fn region(&self) -> Option<&str> {
        None
    }

    /// Fields the free-text filter searches.
    fn search_haystacks(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Timestamp evaluated against the time-period filter.
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Date-window accessors for temporal bucket classification.
pub trait Windowed {
    fn starts_at(&self) -> Option<DateTime<Utc>>;
    fn ends_at(&self) -> Option<DateTime<Utc>>;
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl ListRecord for Dealer {
    fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }
    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.name.as_str()];
        hay.extend(self.address.as_deref());
        hay.extend(self.email.as_deref());
        hay
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for User {
    fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }
    fn dealer_id(&self) -> Option<DealerID> {
        self.dealer_id
    }
    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.full_name.as_str()];
        hay.extend(self.email.as_deref());
        hay
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for VehicleVariant {
    fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }
    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.name.as_str()];
        hay.extend(self.version.as_deref());
        hay.extend(self.color.as_deref());
        hay
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for SalesOrder {
    fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }
    fn dealer_id(&self) -> Option<DealerID> {
        self.dealer_id
    }
    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.customer_name.as_str()];
        hay.extend(self.code.as_deref());
        hay.extend(self.customer_phone.as_deref());
        hay
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for TestDrive {
    fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }
    fn dealer_id(&self) -> Option<DealerID> {
        self.dealer_id
    }
    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.customer_name.as_str()];
        hay.extend(self.customer_phone.as_deref());
        hay
    }
    /// Test drive screens bucket by the booked slot, not creation time.
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }
}

impl ListRecord for Promotion {
    fn dealer_id(&self) -> Option<DealerID> {
        self.dealer_id
    }
    fn search_haystacks(&self) -> Vec<&str> {
        let mut hay = vec![self.title.as_str()];
        hay.extend(self.description.as_deref());
        hay
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Windowed for Promotion {
    fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }
    fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }
}
