//! Presentation-state layer for the DealerDesk admin dashboard.
//!
//! Wraps the `dealerdesk_api` crate with the paginated list state model
//! shared by every resource screen: a pagination normalizer for the
//! backend's shape-variable list payloads, and a filter & stats engine
//! that derives display subsets and stat-card counts from the loaded
//! item set.

pub mod client;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod records;
pub mod stats;
pub mod validation;

pub use dealerdesk_api;
pub use dealerdesk_api::types;
pub use dealerdesk_api::{
    DealerQuery, DealerSortBy, OrderQuery, OrderSortBy, PromotionQuery, PromotionSortBy, Query,
    SortDirection, TestDriveQuery, TestDriveSortBy, UserQuery, UserSortBy, VehicleQuery,
    VehicleSortBy,
};

pub use client::DashboardClient;
pub use error::DealerDeskError;
pub use filter::{region_options, FilterSpec, TimePeriod};
pub use pagination::{normalize, PageState};
pub use records::{ListRecord, Windowed};
pub use stats::{
    classify, status_counts, temporal_counts, StatBucket, StatusSummary, TemporalBucket,
    TemporalSummary,
};
