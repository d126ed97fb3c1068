use log::info;

use crate::api::{self, ScrapeError};
use crate::config::ScrapeConfig;
use crate::schema::RaceRecord;

/// Scrapes the whole season: one calendar fetch, then one detail-page
/// fetch per race, strictly in calendar order and one at a time.  Only the
/// calendar fetch can fail the run; a race whose page cannot be read keeps
/// its placeholder schedule.
pub async fn collect_season(
    client: &reqwest::Client,
    config: &ScrapeConfig,
) -> Result<Vec<RaceRecord>, ScrapeError> {
    let entries = api::download_race_index(client, config).await?;
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        info!("Fetching session details for {}", entry.race_name);
        let sessions = api::download_session_schedule(client, &entry.url).await;
        records.push(RaceRecord {
            race_name: entry.race_name,
            url: entry.url,
            sessions,
        });
    }
    Ok(records)
}
