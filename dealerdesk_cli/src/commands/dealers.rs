use anyhow::Result;
use chrono::Utc;
use clap::Args;

use dealerdesk_lib::types::DealerStatus;
use dealerdesk_lib::{
    filter, status_counts, validation, DashboardClient, DealerQuery, DealerSortBy, FilterSpec,
    Query, SortDirection,
};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct DealersArgs {
    /// Filter by status: active, inactive
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by region (case-insensitive substring)
    #[arg(long)]
    pub region: Option<String>,

    /// Search by name, address or email
    #[arg(long)]
    pub search: Option<String>,

    /// Time window on creation date: all, today (t), last7days (7d), last30days (30d)
    #[arg(long, default_value = "all")]
    pub period: String,

    /// Print the distinct region options instead of the dealer table
    #[arg(long)]
    pub regions: bool,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,

    /// Sort field: name, region, created
    #[arg(long, default_value = "name")]
    pub sort_by: String,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

pub async fn run(
    args: &DealersArgs,
    client: &DashboardClient,
    format: &OutputFormat,
) -> Result<()> {
    if args.regions {
        let dealers = client.all_dealers().await?;
        for region in filter::region_options(&dealers) {
            println!("{}", region);
        }
        return Ok(());
    }

    let mut query = DealerQuery::default()
        .with_page(validation::validate_page(args.page)?)
        .with_page_size(validation::validate_page_size(args.page_size)?);
    let mut spec = FilterSpec {
        period: validation::validate_period(&args.period)?,
        ..FilterSpec::default()
    };

    if let Some(ref status) = args.status {
        let validated = validation::validate_dealer_status(status)?;
        query = query.with_status(validated);
        spec.status = Some(validated.to_string());
    }
    if let Some(ref region) = args.region {
        let validated = validation::validate_region(region)?;
        query = query.with_region(&validated);
        spec.region = Some(validated);
    }
    if let Some(ref search) = args.search {
        let sanitized = validation::validate_search(search)?;
        query = query.with_search(&sanitized);
        spec.search = Some(sanitized);
    }

    let sort_by = match args.sort_by.as_str() {
        "region" => DealerSortBy::Region,
        "created" => DealerSortBy::CreatedAt,
        _ => DealerSortBy::Name,
    };
    query = query.with_sort_by(sort_by);
    if args.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }

    let state = client.dealers_page(&query).await?;
    let visible = filter::apply(&state.items, &spec, Utc::now());

    eprintln!(
        "Page {}/{} ({} total dealers)",
        state.clamped_page(),
        state.total_pages,
        state.total_items
    );
    let summary = status_counts(&state.items, &DealerStatus::LABELS);
    output::print_stat_cards(&summary.buckets, summary.total);

    match format {
        OutputFormat::Table => output::print_dealers_table(&visible),
        OutputFormat::Json => output::print_json(&visible),
        OutputFormat::Csv => output::print_dealers_csv(&visible)?,
    }

    Ok(())
}
