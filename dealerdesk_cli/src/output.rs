use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{Table, Tabled};

use dealerdesk_lib::types::{Dealer, Promotion, SalesOrder, TestDrive, User, VehicleVariant};
use dealerdesk_lib::{classify, StatBucket};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct DealerRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    #[serde(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Dealer")]
    #[serde(rename = "Dealer")]
    dealer: String,
}

#[derive(Tabled, Serialize)]
struct VehicleRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    #[serde(rename = "Color")]
    color: String,
    #[tabled(rename = "Range")]
    #[serde(rename = "Range")]
    range: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct OrderRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Customer")]
    #[serde(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Dealer")]
    #[serde(rename = "Dealer")]
    dealer: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Placed")]
    #[serde(rename = "Placed")]
    placed: String,
}

#[derive(Tabled, Serialize)]
struct TestDriveRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Customer")]
    #[serde(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Dealer")]
    #[serde(rename = "Dealer")]
    dealer: String,
    #[tabled(rename = "Scheduled")]
    #[serde(rename = "Scheduled")]
    scheduled: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct PromotionRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Discount")]
    #[serde(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Starts")]
    #[serde(rename = "Starts")]
    starts: String,
    #[tabled(rename = "Ends")]
    #[serde(rename = "Ends")]
    ends: String,
    #[tabled(rename = "Lifecycle")]
    #[serde(rename = "Lifecycle")]
    lifecycle: String,
}

// -- Row builders --

fn build_dealer_rows(dealers: &[&Dealer]) -> Vec<DealerRow> {
    dealers
        .iter()
        .map(|d| DealerRow {
            id: d.id,
            name: d.name.clone(),
            region: opt_str(d.region.as_deref()),
            status: d.status.clone(),
            email: opt_str(d.email.as_deref()),
        })
        .collect()
}

fn build_user_rows(users: &[&User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            name: u.full_name.clone(),
            role: u.role.clone(),
            status: u.status.clone(),
            dealer: opt_id(u.dealer_id),
        })
        .collect()
}

fn build_vehicle_rows(variants: &[&VehicleVariant]) -> Vec<VehicleRow> {
    variants
        .iter()
        .map(|v| VehicleRow {
            id: v.id,
            name: v.name.clone(),
            color: opt_str(v.color.as_deref()),
            range: v
                .range_km
                .map(|km| format!("{} km", km))
                .unwrap_or_else(|| "-".to_string()),
            price: opt_amount(v.price),
            status: v.status.clone(),
        })
        .collect()
}

fn build_order_rows(orders: &[&SalesOrder]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.id,
            code: opt_str(o.code.as_deref()),
            customer: o.customer_name.clone(),
            dealer: opt_id(o.dealer_id),
            total: opt_amount(o.total_price),
            status: o.status.clone(),
            placed: format_date(o.created_at),
        })
        .collect()
}

fn build_test_drive_rows(drives: &[&TestDrive]) -> Vec<TestDriveRow> {
    drives
        .iter()
        .map(|t| TestDriveRow {
            id: t.id,
            customer: t.customer_name.clone(),
            dealer: opt_id(t.dealer_id),
            scheduled: format_datetime(t.scheduled_at),
            status: t.status.clone(),
        })
        .collect()
}

fn build_promotion_rows(promotions: &[&Promotion], now: DateTime<Utc>) -> Vec<PromotionRow> {
    promotions
        .iter()
        .map(|p| PromotionRow {
            id: p.id,
            title: p.title.clone(),
            discount: p
                .discount_percent
                .map(|pct| format!("{}%", pct))
                .unwrap_or_else(|| "-".to_string()),
            starts: format_date(p.start_date),
            ends: format_date(p.end_date),
            lifecycle: classify(*p, now).label().to_string(),
        })
        .collect()
}

// -- Table output --

pub fn print_dealers_table(dealers: &[&Dealer]) {
    println!("{}", Table::new(build_dealer_rows(dealers)));
}

pub fn print_users_table(users: &[&User]) {
    println!("{}", Table::new(build_user_rows(users)));
}

pub fn print_vehicles_table(variants: &[&VehicleVariant]) {
    println!("{}", Table::new(build_vehicle_rows(variants)));
}

pub fn print_orders_table(orders: &[&SalesOrder]) {
    println!("{}", Table::new(build_order_rows(orders)));
}

pub fn print_test_drives_table(drives: &[&TestDrive]) {
    println!("{}", Table::new(build_test_drive_rows(drives)));
}

pub fn print_promotions_table(promotions: &[&Promotion], now: DateTime<Utc>) {
    println!("{}", Table::new(build_promotion_rows(promotions, now)));
}

// -- CSV output --

pub fn print_dealers_csv(dealers: &[&Dealer]) -> Result<()> {
    print_csv(build_dealer_rows(dealers))
}

pub fn print_users_csv(users: &[&User]) -> Result<()> {
    print_csv(build_user_rows(users))
}

pub fn print_vehicles_csv(variants: &[&VehicleVariant]) -> Result<()> {
    print_csv(build_vehicle_rows(variants))
}

pub fn print_orders_csv(orders: &[&SalesOrder]) -> Result<()> {
    print_csv(build_order_rows(orders))
}

pub fn print_test_drives_csv(drives: &[&TestDrive]) -> Result<()> {
    print_csv(build_test_drive_rows(drives))
}

pub fn print_promotions_csv(promotions: &[&Promotion], now: DateTime<Utc>) -> Result<()> {
    print_csv(build_promotion_rows(promotions, now))
}

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Stat cards --

/// Prints stat-card counts to stderr so they never pollute piped
/// json/csv output.
pub fn print_stat_cards(buckets: &[StatBucket], total: usize) {
    let mut parts: Vec<String> = buckets
        .iter()
        .map(|b| format!("{} {}", b.count, b.label))
        .collect();
    parts.push(format!("{} total", total));
    eprintln!("{}", parts.join(" | "));
}

// -- Formatting helpers --

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn opt_id(value: Option<i64>) -> String {
    value.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

fn opt_amount(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| "-".to_string())
}

fn format_amount(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
