use anyhow::Result;
use chrono::Utc;
use clap::Args;

use dealerdesk_lib::types::VehicleStatus;
use dealerdesk_lib::{
    filter, status_counts, validation, DashboardClient, FilterSpec, Query, SortDirection,
    VehicleQuery, VehicleSortBy,
};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct VehiclesArgs {
    /// Filter by status: available, coming-soon, discontinued
    #[arg(long)]
    pub status: Option<String>,

    /// Search by name, version or color
    #[arg(long)]
    pub search: Option<String>,

    /// Time window on creation date: all, today (t), last7days (7d), last30days (30d)
    #[arg(long, default_value = "all")]
    pub period: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,

    /// Sort field: name, price, created
    #[arg(long, default_value = "name")]
    pub sort_by: String,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

pub async fn run(
    args: &VehiclesArgs,
    client: &DashboardClient,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = VehicleQuery::default()
        .with_page(validation::validate_page(args.page)?)
        .with_page_size(validation::validate_page_size(args.page_size)?);
    let mut spec = FilterSpec {
        period: validation::validate_period(&args.period)?,
        ..FilterSpec::default()
    };

    if let Some(ref status) = args.status {
        let validated = validation::validate_vehicle_status(status)?;
        query = query.with_status(validated);
        spec.status = Some(validated.to_string());
    }
    if let Some(ref search) = args.search {
        let sanitized = validation::validate_search(search)?;
        query = query.with_search(&sanitized);
        spec.search = Some(sanitized);
    }

    let sort_by = match args.sort_by.as_str() {
        "price" => VehicleSortBy::Price,
        "created" => VehicleSortBy::CreatedAt,
        _ => VehicleSortBy::Name,
    };
    query = query.with_sort_by(sort_by);
    if args.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }

    let state = client.vehicle_variants_page(&query).await?;
    let visible = filter::apply(&state.items, &spec, Utc::now());

    eprintln!(
        "Page {}/{} ({} total variants)",
        state.clamped_page(),
        state.total_pages,
        state.total_items
    );
    let summary = status_counts(&state.items, &VehicleStatus::LABELS);
    output::print_stat_cards(&summary.buckets, summary.total);

    match format {
        OutputFormat::Table => output::print_vehicles_table(&visible),
        OutputFormat::Json => output::print_json(&visible),
        OutputFormat::Csv => output::print_vehicles_csv(&visible)?,
    }

    Ok(())
}
