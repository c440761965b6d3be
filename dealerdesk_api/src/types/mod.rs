mod datetime;

mod dealer;
pub use self::dealer::{Dealer, DealerID, DealerStatus};

mod user;
pub use self::user::{User, UserRole, UserStatus};

mod vehicle;
pub use self::vehicle::{VehicleStatus, VehicleVariant};

mod order;
pub use self::order::{OrderStatus, SalesOrder};

mod test_drive;
pub use self::test_drive::{TestDrive, TestDriveStatus};

mod promotion;
pub use self::promotion::Promotion;
