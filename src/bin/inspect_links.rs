use clap::Parser;
use f1_calendar_scraping::config::ScrapeConfig;
use f1_calendar_scraping::{api, selector};

/// Prints every link target found on a page, for eyeballing the calendar
/// markup when the site changes.
#[derive(Parser)]
struct Opts {
    /// Page to inspect; defaults to the season calendar page.
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();
    let config = ScrapeConfig::default();
    let client = api::reqwest_client(&config)?;
    let url = opts.url.unwrap_or(config.calendar_url);

    let html = api::fetch_document(&client, &url).await?;
    for href in html
        .select(selector!("a[href]"))
        .filter_map(|anchor| anchor.value().attr("href"))
    {
        println!("{href}");
    }

    Ok(())
}
