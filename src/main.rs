use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::Database;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use minimart::seed::seed_demo_data;
use minimart::{reports, setup_schema, Error};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_owned());

    if let Err(err) = run(&database_url).await {
        error!(error = %err, "demo run failed");
        std::process::exit(1);
    }
}

async fn run(database_url: &str) -> Result<(), Error> {
    info!(database_url, "connecting");
    let db = Database::connect(database_url).await?;
    setup_schema(&db).await?;
    seed_demo_data(&db).await?;

    let jan_5 = day(2025, 1, 5);
    let jan_1 = day(2025, 1, 1);
    let feb_1 = day(2025, 2, 1);

    match reports::daily_revenue(&db, jan_5).await? {
        Some(row) => println!("revenue on {}: {}", row.date, row.total),
        None => println!("no orders on {jan_5}"),
    }

    let top = reports::top_selling_products(&db, jan_1, feb_1, 5).await?;
    println!(
        "top sellers for January:\n{}",
        serde_json::to_string_pretty(&top).expect("report rows serialize to JSON")
    );

    let big_spenders = reports::high_value_customers(&db, jan_1, feb_1, dec!(200)).await?;
    println!(
        "customers who spent more than 200 in January:\n{}",
        serde_json::to_string_pretty(&big_spenders).expect("report rows serialize to JSON")
    );

    Ok(())
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
