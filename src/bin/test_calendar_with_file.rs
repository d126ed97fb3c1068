use std::path::PathBuf;

use clap::Parser;
use f1_calendar_scraping::config::ScrapeConfig;
use f1_calendar_scraping::parser::calendar;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);

    let config = ScrapeConfig::default();
    let entries = calendar::parse(&html, &config.site_origin);
    dbg!(&entries);
    println!("{}", serde_json::to_string_pretty(&entries)?);

    Ok(())
}
