mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dealerdesk_lib::DashboardClient;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "dealerdesk")]
#[command(about = "Operator console for the DealerDesk dealer-management backend")]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List dealers
    Dealers(commands::dealers::DealersArgs),
    /// List dashboard users
    Users(commands::users::UsersArgs),
    /// List vehicle variants
    Vehicles(commands::vehicles::VehiclesArgs),
    /// List sales orders
    Orders(commands::orders::OrdersArgs),
    /// List test drive bookings
    TestDrives(commands::test_drives::TestDrivesArgs),
    /// List promotions
    Promotions(commands::promotions::PromotionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dealerdesk=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let client = match std::env::var("DEALERDESK_API_URL") {
        Ok(url) => DashboardClient::with_base_url(&url),
        Err(_) => DashboardClient::new(),
    };

    match &cli.command {
        Commands::Dealers(args) => commands::dealers::run(args, &client, &format).await?,
        Commands::Users(args) => commands::users::run(args, &client, &format).await?,
        Commands::Vehicles(args) => commands::vehicles::run(args, &client, &format).await?,
        Commands::Orders(args) => commands::orders::run(args, &client, &format).await?,
        Commands::TestDrives(args) => commands::test_drives::run(args, &client, &format).await?,
        Commands::Promotions(args) => commands::promotions::run(args, &client, &format).await?,
    }

    Ok(())
}
