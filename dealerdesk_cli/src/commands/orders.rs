use anyhow::Result;
use chrono::Utc;
use clap::Args;

use dealerdesk_lib::types::OrderStatus;
use dealerdesk_lib::{
    filter, status_counts, validation, DashboardClient, FilterSpec, OrderQuery, OrderSortBy,
    Query, SortDirection,
};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct OrdersArgs {
    /// Filter by status: pending, confirmed, in-delivery, delivered, cancelled
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by owning dealer id
    #[arg(long)]
    pub dealer: Option<i64>,

    /// Filter by vehicle variant id
    #[arg(long)]
    pub variant: Option<i64>,

    /// Search by customer name, order code or phone
    #[arg(long)]
    pub search: Option<String>,

    /// Time window on placement date: all, today (t), last7days (7d), last30days (30d)
    #[arg(long, default_value = "all")]
    pub period: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,

    /// Sort field: created, total, status
    #[arg(long, default_value = "created")]
    pub sort_by: String,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

pub async fn run(args: &OrdersArgs, client: &DashboardClient, format: &OutputFormat) -> Result<()> {
    let mut query = OrderQuery::default()
        .with_page(validation::validate_page(args.page)?)
        .with_page_size(validation::validate_page_size(args.page_size)?);
    let mut spec = FilterSpec {
        period: validation::validate_period(&args.period)?,
        ..FilterSpec::default()
    };

    if let Some(ref status) = args.status {
        let validated = validation::validate_order_status(status)?;
        query = query.with_status(validated);
        spec.status = Some(validated.to_string());
    }
    if let Some(dealer) = args.dealer {
        let validated = validation::validate_dealer_id(dealer)?;
        query = query.with_dealer_id(validated);
        spec.dealer_id = Some(validated);
    }
    if let Some(variant) = args.variant {
        query = query.with_variant_id(variant);
    }
    if let Some(ref search) = args.search {
        let sanitized = validation::validate_search(search)?;
        query = query.with_search(&sanitized);
        spec.search = Some(sanitized);
    }

    let sort_by = match args.sort_by.as_str() {
        "total" => OrderSortBy::TotalPrice,
        "status" => OrderSortBy::Status,
        _ => OrderSortBy::CreatedAt,
    };
    query = query.with_sort_by(sort_by);
    if args.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }

    let state = client.sales_orders_page(&query).await?;
    let visible = filter::apply(&state.items, &spec, Utc::now());

    eprintln!(
        "Page {}/{} ({} total orders)",
        state.clamped_page(),
        state.total_pages,
        state.total_items
    );
    let summary = status_counts(&state.items, &OrderStatus::LABELS);
    output::print_stat_cards(&summary.buckets, summary.total);

    match format {
        OutputFormat::Table => output::print_orders_table(&visible),
        OutputFormat::Json => output::print_json(&visible),
        OutputFormat::Csv => output::print_orders_csv(&visible)?,
    }

    Ok(())
}
