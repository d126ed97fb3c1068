use std::process;

use anyhow::Context;
use f1_calendar_scraping::api::{self, ScrapeError};
use f1_calendar_scraping::collector::collect_season;
use f1_calendar_scraping::config::ScrapeConfig;
use log::info;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(e) = run().await {
        eprintln!("ERROR: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), ScrapeError> {
    let config = ScrapeConfig::default();
    let client = api::reqwest_client(&config)?;

    let records = collect_season(&client, &config).await?;
    info!("Scraped {} races", records.len());

    let json = serde_json::to_string_pretty(&records)
        .context("Serializing the race records to JSON")?;
    println!("{json}");
    Ok(())
}
