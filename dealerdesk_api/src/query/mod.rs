mod common;
pub use self::common::{Query, QueryCommon, SortDirection};

mod dealer;
pub use self::dealer::{DealerQuery, DealerSortBy};

mod user;
pub use self::user::{UserQuery, UserSortBy};

mod vehicle;
pub use self::vehicle::{VehicleQuery, VehicleSortBy};

mod order;
pub use self::order::{OrderQuery, OrderSortBy};

mod test_drive;
pub use self::test_drive::{TestDriveQuery, TestDriveSortBy};

mod promotion;
pub use self::promotion::{PromotionQuery, PromotionSortBy};
