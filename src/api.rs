use anyhow::Context;
use log::info;
use scraper::Html;
use thiserror::Error;

use crate::config::ScrapeConfig;
use crate::parser::{self, calendar::CalendarEntry};
use crate::schema::SessionSchedule;

/// A failure that aborts the whole run.  Per-race failures never surface
/// here; they degrade to an all-placeholder schedule instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("F1 scraping failed due to a network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("An unexpected error occurred during F1 scraping: {0:#}")]
    Unexpected(anyhow::Error),
}

impl From<anyhow::Error> for ScrapeError {
    fn from(e: anyhow::Error) -> Self {
        Self::Unexpected(e)
    }
}

pub fn reqwest_client(config: &ScrapeConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
}

/// GETs a page and parses it, propagating transport failures and non-2xx
/// statuses.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> reqwest::Result<Html> {
    let response = fetch(client, url).await?;
    Ok(Html::parse_document(&response.text().await?))
}

/// Downloads the season calendar page and lists its race tiles.  This is
/// the only fetch the run cannot survive.
pub async fn download_race_index(
    client: &reqwest::Client,
    config: &ScrapeConfig,
) -> Result<Vec<CalendarEntry>, ScrapeError> {
    let html = fetch_document(client, &config.calendar_url).await?;
    let entries = parser::calendar::parse(&html, &config.site_origin);
    info!("Found {} races on the calendar page", entries.len());
    Ok(entries)
}

/// Downloads one race's detail page and extracts its session schedule.
/// Never fails: on any error this warns on stderr and returns the
/// all-placeholder schedule.
pub async fn download_session_schedule(client: &reqwest::Client, url: &str) -> SessionSchedule {
    let response = match fetch(client, url).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("WARNING: Could not fetch session details for {url}: {e}");
            return SessionSchedule::default();
        }
    };
    match read_sessions(response).await {
        Ok(sessions) => sessions,
        Err(e) => {
            eprintln!("WARNING: An error occurred while parsing session details for {url}: {e:#}");
            SessionSchedule::default()
        }
    }
}

async fn fetch(client: &reqwest::Client, url: &str) -> reqwest::Result<reqwest::Response> {
    client.get(url).send().await?.error_for_status()
}

async fn read_sessions(response: reqwest::Response) -> anyhow::Result<SessionSchedule> {
    let body = response
        .text()
        .await
        .context("Reading the race page body")?;
    Ok(parser::race_page::parse(&Html::parse_document(&body)))
}
