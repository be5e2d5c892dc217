//! Synchronous client for the **Jolpica mirror of the Ergast F1 API**.
//!
//! Two endpoints are consumed:
//! - `{base}/seasons.json?limit=200` to discover the most recent season
//! - `{base}/{year}/driverStandings.json` for one season's driver standings
//!
//! ### Notes
//! - Transport failures (connect errors, timeouts) are retried twice with a short
//!   fixed backoff. HTTP error statuses are not retried.
//! - Every call is a fresh round trip; nothing is cached.
//! - The base URL can be overridden with the `F1_STANDINGS_API_URL` environment
//!   variable via `Client::from_env()`.
//!
//! Typical usage:
//! ```no_run
//! # use f1_standings::Client;
//! let client = Client::default();
//! let latest = client.latest_season()?;
//! let table = client.standings_table(latest)?;
//! println!("{table}");
//! # Ok::<(), f1_standings::Error>(())
//! ```
use crate::error::{Error, Result};
use crate::report::{self, StandingsTable};
use crate::standings;
use log::{debug, error, info, warn};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// Environment variable that replaces `DEFAULT_BASE_URL` when set.
pub const BASE_URL_ENV: &str = "F1_STANDINGS_API_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Additional attempts after the first one fails at the transport level.
pub const DEFAULT_RETRIES: u32 = 2;

/// Page size for the seasons listing; large enough to return every season at once.
const SEASONS_LIMIT: u32 = 200;

const BACKOFF_MS: [u64; 2] = [100, 300];

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    timeout: Duration,
    retries: u32,
    http: HttpClient,
}

fn http_builder() -> reqwest::blocking::ClientBuilder {
    HttpClient::builder()
        .connect_timeout(Duration::from_secs(10)) // connect timeout
        .redirect(Policy::limited(5)) // cap redirects
        .user_agent(concat!("f1_standings/", env!("CARGO_PKG_VERSION")))
}

impl Default for Client {
    fn default() -> Self {
        let http = http_builder().build().expect("reqwest client build");
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
            http,
        }
    }
}

/// Fetch `url` and decode the body as JSON, using a client scoped to this call.
///
/// ### Errors
/// - `Error::Transport` when no response arrives within `timeout` after retries
/// - `Error::Status` for a non-success HTTP status
/// - `Error::Parse` when the body is not valid JSON
pub fn fetch_json(url: &str, timeout: Duration) -> Result<Value> {
    let http = http_builder().build().map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;
    get_json(&http, url, timeout, DEFAULT_RETRIES)
}

fn is_transient(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout() || e.is_request()
}

fn get_json(http: &HttpClient, url: &str, timeout: Duration, retries: u32) -> Result<Value> {
    let mut attempt = 0u32;
    let response = loop {
        debug!("GET {} (attempt {})", url, attempt + 1);
        match http.get(url).timeout(timeout).send() {
            Ok(r) => break r,
            Err(e) if attempt < retries && is_transient(&e) => {
                let backoff_ms = BACKOFF_MS[(attempt as usize).min(BACKOFF_MS.len() - 1)];
                warn!("GET {} failed: {}; retrying in {} ms", url, e, backoff_ms);
                std::thread::sleep(Duration::from_millis(backoff_ms));
                attempt += 1;
            }
            Err(source) => {
                error!("GET {} failed after {} attempt(s): {}", url, attempt + 1, source);
                return Err(Error::Transport {
                    url: url.to_string(),
                    source,
                });
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| Error::Parse {
        url: url.to_string(),
        source,
    })
}

/// Read the most recent season from a `seasons.json` document.
///
/// The API lists seasons in ascending order, so the last entry is the latest one.
pub fn parse_latest_season(v: &Value) -> Result<i32> {
    let seasons = v
        .pointer("/MRData/SeasonTable/Seasons")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::DataShape("missing MRData.SeasonTable.Seasons".into()))?;
    let last = seasons
        .last()
        .ok_or_else(|| Error::DataShape("season list is empty".into()))?;
    let season = last
        .get("season")
        .ok_or_else(|| Error::DataShape("last season entry has no `season` field".into()))?;

    let year = match season {
        Value::String(s) => s.trim().parse::<i32>().ok(),
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        _ => None,
    };
    year.ok_or_else(|| Error::DataShape(format!("season {} is not a year", season)))
}

impl Client {
    /// Default client, with the base URL taken from `F1_STANDINGS_API_URL` if set.
    pub fn from_env() -> Self {
        let client = Self::default();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!("using API base URL from {}: {}", BASE_URL_ENV, url);
                client.with_base_url(url.trim())
            }
            _ => client,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout (default 15s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn seasons_url(&self) -> String {
        format!("{}/seasons.json?limit={}", self.base(), SEASONS_LIMIT)
    }

    pub fn standings_url(&self, year: i32) -> String {
        format!("{}/{}/driverStandings.json", self.base(), year)
    }

    /// GET `url` and decode the JSON body, retrying transport failures.
    pub fn fetch_json(&self, url: &str) -> Result<Value> {
        get_json(&self.http, url, self.timeout, self.retries)
    }

    /// Most recent season known to the API.
    ///
    /// ### Errors
    /// Network errors, or `Error::DataShape` if the seasons listing has changed shape.
    pub fn latest_season(&self) -> Result<i32> {
        let v = self.fetch_json(&self.seasons_url())?;
        let year = parse_latest_season(&v)?;
        info!("latest season: {}", year);
        Ok(year)
    }

    /// Raw `driverStandings.json` document for `year`.
    pub fn driver_standings(&self, year: i32) -> Result<Value> {
        self.fetch_json(&self.standings_url(year))
    }

    /// Fetch, extract and assemble the standings table for `year`.
    pub fn standings_table(&self, year: i32) -> Result<StandingsTable> {
        let raw = self.driver_standings(year)?;
        let records = standings::extract(&raw, year)?;
        debug!("{} standings record(s) for {}", records.len(), year);
        report::assemble(&records)
    }
}
