use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine};
use itertools::Itertools;
use log::debug;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

/// Race name recorded when a tile's context blob cannot be decoded.
pub const UNKNOWN_RACE: &str = "Unknown Race";

/// Calendar tiles whose link target contains any of these markers are not
/// races and are dropped from the listing.
pub const EXCLUDED_URL_MARKERS: &[&str] = &["pre-season-testing"];

const CONTEXT_ATTR: &str = "data-f1rd-a7s-context";

/// One race tile from the season calendar page.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub race_name: String,
    pub url: String,
}

// The tracking context is a base64-encoded JSON blob; `raceName` is the
// only field we care about.
#[derive(Deserialize)]
struct TileContext {
    #[serde(rename = "raceName")]
    race_name: String,
}

/// Lists the race tiles of a season calendar page in document order.
/// Tiles without a link target and non-race tiles are dropped; everything
/// else yields an entry, falling back to [`UNKNOWN_RACE`] when the name
/// cannot be recovered.
pub fn parse(html: &Html, site_origin: &str) -> Vec<CalendarEntry> {
    html.select(selector!("a[data-f1rd-a7s-click='event_tile_click']"))
        .filter_map(|anchor| parse_event_tile(anchor, site_origin))
        .collect_vec()
}

fn parse_event_tile(anchor: ElementRef, site_origin: &str) -> Option<CalendarEntry> {
    let href = anchor.value().attr("href")?;
    if EXCLUDED_URL_MARKERS
        .iter()
        .any(|marker| href.contains(marker))
    {
        debug!("Skipping non-race tile {href}");
        return None;
    }
    let race_name = match decode_race_name(anchor) {
        Ok(race_name) => race_name,
        Err(e) => {
            debug!("Could not decode the context of tile {href}: {e:#}");
            UNKNOWN_RACE.to_owned()
        }
    };
    Some(CalendarEntry {
        race_name,
        url: format!("{site_origin}{href}"),
    })
}

fn decode_race_name(anchor: ElementRef) -> anyhow::Result<String> {
    let blob = anchor
        .value()
        .attr(CONTEXT_ATTR)
        .with_context(|| format!("Attribute {CONTEXT_ATTR} not found"))?;
    let decoded = STANDARD
        .decode(blob)
        .context("Context is not valid base64")?;
    let context: TileContext =
        serde_json::from_slice(&decoded).context("Context is not the expected JSON")?;
    Ok(context.race_name)
}
