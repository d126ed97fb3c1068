use clap::Parser;
use f1_calendar_scraping::api;
use f1_calendar_scraping::config::ScrapeConfig;

/// Fetches a page and prints the parsed document back out, for inspecting
/// what the site actually serves us.
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
    println!("{}", html.root_element().html());

    Ok(())
}
