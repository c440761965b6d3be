mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    DealerQuery, DealerSortBy, OrderQuery, OrderSortBy, PromotionQuery, PromotionSortBy, Query,
    SortDirection, TestDriveQuery, TestDriveSortBy, UserQuery, UserSortBy, VehicleQuery,
    VehicleSortBy,
};
