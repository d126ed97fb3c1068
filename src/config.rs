use serde::Deserialize;

const CALENDAR_URL: &str = "https://www.formula1.com/en/racing/2025";
const SITE_ORIGIN: &str = "https://www.formula1.com";
// Plain requests tend to be rejected by the site's bot filter, so every
// fetch identifies itself as a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";

/// Where and how to scrape.  The defaults point at the official Formula 1
/// site's current season; tests swap in their own values.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub calendar_url: String,
    pub site_origin: String,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            calendar_url: CALENDAR_URL.to_owned(),
            site_origin: SITE_ORIGIN.to_owned(),
            user_agent: USER_AGENT.to_owned(),
        }
    }
}
