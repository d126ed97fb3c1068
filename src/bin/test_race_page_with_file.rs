use std::path::PathBuf;

use clap::Parser;
use f1_calendar_scraping::parser::race_page;
use f1_calendar_scraping::schema::SessionSchedule;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);

    let schedule = race_page::parse(&html);
    dbg!(&schedule);
    let serialized = serde_json::to_string_pretty(&schedule)?;
    println!("{}", &serialized);
    let deserialized: SessionSchedule = serde_json::from_str(&serialized)?;

    assert_eq!(schedule, deserialized);

    Ok(())
}
