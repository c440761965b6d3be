use url::Url;

use dealerdesk_api::types::{DealerStatus, OrderStatus, TestDriveStatus, UserRole};
use dealerdesk_api::{
    DealerQuery, DealerSortBy, OrderQuery, PromotionQuery, Query, SortDirection, TestDriveQuery,
    UserQuery, VehicleQuery,
};

fn base() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn dealer_query_defaults() {
    let url = DealerQuery::default().add_to_url(&base());
    assert_eq!(url.as_str(), "https://example.com/?page=1&sortBy=-name");
}

#[test]
fn dealer_query_full() {
    let url = DealerQuery::default()
        .with_page(2)
        .with_page_size(25)
        .with_status(DealerStatus::Active)
        .with_region("North")
        .add_to_url(&base());
    assert_eq!(
        url.as_str(),
        "https://example.com/?page=2&pageSize=25&status=active&region=North&sortBy=-name"
    );
}

#[test]
fn dealer_query_sort_ascending() {
    let url = DealerQuery::default()
        .with_sort_by(DealerSortBy::Region)
        .with_sort_direction(SortDirection::Asc)
        .add_to_url(&base());
    assert_eq!(url.as_str(), "https://example.com/?page=1&sortBy=region");
}

#[test]
fn user_query_role_and_dealer() {
    let url = UserQuery::default()
        .with_role(UserRole::DealerManager)
        .with_dealer_id(7)
        .add_to_url(&base());
    assert_eq!(
        url.as_str(),
        "https://example.com/?page=1&role=dealer-manager&dealerId=7&sortBy=-fullName"
    );
}

#[test]
fn vehicle_query_search() {
    let url = VehicleQuery::default()
        .with_search("pulse")
        .add_to_url(&base());
    assert_eq!(
        url.as_str(),
        "https://example.com/?page=1&search=pulse&sortBy=-name"
    );
}

#[test]
fn order_query_status_and_variant() {
    let url = OrderQuery::default()
        .with_status(OrderStatus::InDelivery)
        .with_dealer_id(1)
        .with_variant_id(11)
        .add_to_url(&base());
    assert_eq!(
        url.as_str(),
        "https://example.com/?page=1&status=in-delivery&dealerId=1&variantId=11&sortBy=-createdAt"
    );
}

#[test]
fn test_drive_query_status() {
    let url = TestDriveQuery::default()
        .with_status(TestDriveStatus::Confirmed)
        .add_to_url(&base());
    assert_eq!(
        url.as_str(),
        "https://example.com/?page=1&status=confirmed&sortBy=-scheduledAt"
    );
}

#[test]
fn promotion_query_dealer_scope() {
    let url = PromotionQuery::default()
        .with_dealer_id(3)
        .with_page_size(50)
        .add_to_url(&base());
    assert_eq!(
        url.as_str(),
        "https://example.com/?page=1&pageSize=50&dealerId=3&sortBy=-startDate"
    );
}
