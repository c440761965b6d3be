use anyhow::Result;
use chrono::Utc;
use clap::Args;

use dealerdesk_lib::{
    filter, temporal_counts, validation, DashboardClient, FilterSpec, PromotionQuery,
    PromotionSortBy, Query, SortDirection,
};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct PromotionsArgs {
    /// Filter by owning dealer id
    #[arg(long)]
    pub dealer: Option<i64>,

    /// Search by title or description
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

    /// Sort field: start, end, created
    #[arg(long, default_value = "start")]
    pub sort_by: String,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

pub async fn run(
    args: &PromotionsArgs,
    client: &DashboardClient,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = PromotionQuery::default()
        .with_page(validation::validate_page(args.page)?)
        .with_page_size(validation::validate_page_size(args.page_size)?);
    let mut spec = FilterSpec {
        period: validation::validate_period(&args.period)?,
        ..FilterSpec::default()
    };

    if let Some(dealer) = args.dealer {
        let validated = validation::validate_dealer_id(dealer)?;
        query = query.with_dealer_id(validated);
        spec.dealer_id = Some(validated);
    }
    if let Some(ref search) = args.search {
        let sanitized = validation::validate_search(search)?;
        query = query.with_search(&sanitized);
        spec.search = Some(sanitized);
    }

    let sort_by = match args.sort_by.as_str() {
        "end" => PromotionSortBy::EndDate,
        "created" => PromotionSortBy::CreatedAt,
        _ => PromotionSortBy::StartDate,
    };
    query = query.with_sort_by(sort_by);
    if args.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }

    let state = client.promotions_page(&query).await?;
    let now = Utc::now();
    let visible = filter::apply(&state.items, &spec, now);

    eprintln!(
        "Page {}/{} ({} total promotions)",
        state.clamped_page(),
        state.total_pages,
        state.total_items
    );
    let summary = temporal_counts(&state.items, now);
    output::print_stat_cards(&summary.buckets(), summary.total());

    match format {
        OutputFormat::Table => output::print_promotions_table(&visible, now),
        OutputFormat::Json => output::print_json(&visible),
        OutputFormat::Csv => output::print_promotions_csv(&visible, now)?,
    }

    Ok(())
}
