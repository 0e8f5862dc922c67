// src/core/net.rs
// Page fetching. The scrape layer only sees the `PageFetcher` trait so tests can
// serve canned documents.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::options::FetchOptions;
use crate::config::location::HikeLocation;
use crate::config::consts::COMPETITION_ID;
use crate::error::FetchError;

/// Anything that can turn a URL into a document body.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTPS fetcher with a per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t = std::time::Instant::now();
        let resp = self.client.get(url).send().map_err(|e| request_error(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp.text().map_err(|e| request_error(url, e))?;
        debug!(url, bytes = body.len(), elapsed = ?t.elapsed(), "fetched page");
        Ok(body)
    }
}

fn request_error(url: &str, source: reqwest::Error) -> FetchError {
    if source.is_timeout() {
        FetchError::Timeout { url: s!(url) }
    } else {
        FetchError::Request { url: s!(url), source }
    }
}

/// Search page listing the entrants matching a race number.
pub fn search_url(base_url: &str, location: HikeLocation, race_number: u32) -> String {
    format!(
        "{}Search.aspx?CId={}&RId={}&S={}",
        with_trailing_slash(base_url),
        COMPETITION_ID,
        location.id(),
        race_number
    )
}

/// Resolve a link taken from a results page against the site root.
pub fn detail_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    join!(&with_trailing_slash(base_url), href.trim_start_matches('/'))
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') { s!(base) } else { join!(base, "/") }
}
