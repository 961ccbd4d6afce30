// File: crates/wb-indicator/src/fetch.rs
// Summary: Page through the World Bank indicator API and collect every record.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::dataset::IndicatorDataset;
use crate::error::FetchError;
use crate::record::PageMeta;

/// Records requested per page.
pub const PAGE_SIZE: u32 = 1000;

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2/countries/all/indicators/";

/// Identifying `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("wb-indicator/", env!("CARGO_PKG_VERSION"), " (sanitation access pipeline)");

/// Improved sanitation facilities, % of population with access.
pub const SANITATION_INDICATOR: &str = "SH.STA.ACSN";

/// Inclusive year range, rendered as `start:end` in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: u16,
    pub end: u16,
}

impl DateRange {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new(1960, 2017)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| format!("expected START:END, got '{s}'"))?;
        let start = a.trim().parse::<u16>().map_err(|e| format!("bad start year '{a}': {e}"))?;
        let end = b.trim().parse::<u16>().map_err(|e| format!("bad end year '{b}': {e}"))?;
        if start > end {
            return Err(format!("start year {start} is after end year {end}"));
        }
        Ok(Self { start, end })
    }
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorQuery {
    pub indicator: String,
    pub dates: DateRange,
    pub per_page: u32,
}

impl IndicatorQuery {
    pub fn new(indicator: impl Into<String>, dates: DateRange) -> Self {
        Self { indicator: indicator.into(), dates, per_page: PAGE_SIZE }
    }
}

impl Default for IndicatorQuery {
    fn default() -> Self {
        Self::new(SANITATION_INDICATOR, DateRange::default())
    }
}

/// One response: pagination header plus the raw records, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub meta: PageMeta,
    pub records: Vec<Value>,
}

/// Anything that can hand out pages of records, numbered from 1.
pub trait PageSource {
    fn fetch_page(&mut self, query: &IndicatorQuery, page: u32) -> Result<Page, FetchError>;
}

/// Blocking HTTP source backed by the public API.
pub struct WorldBankClient {
    http: Client,
    base: Url,
}

impl WorldBankClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base_url).map_err(|source| FetchError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        // `join` replaces the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { http, base })
    }

    /// `{base}{indicator}?date=..&format=json&per_page=..&page=..`
    pub fn page_url(&self, query: &IndicatorQuery, page: u32) -> Result<Url, FetchError> {
        let mut url = self.base.join(&query.indicator).map_err(|source| FetchError::BaseUrl {
            url: format!("{}{}", self.base, query.indicator),
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("date", &query.dates.to_string())
            .append_pair("format", "json")
            .append_pair("per_page", &query.per_page.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }
}

impl PageSource for WorldBankClient {
    fn fetch_page(&mut self, query: &IndicatorQuery, page: u32) -> Result<Page, FetchError> {
        let url = self.page_url(query, page)?;
        debug!(%url, "GET");
        let http_err = |source| FetchError::Http { url: url.to_string(), source };
        let body = self
            .http
            .get(url.clone())
            .send()
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .text()
            .map_err(http_err)?;
        parse_page(page, &body)
    }
}

/// Parse one response body: `[meta, records]`, where `records` may be `null`.
pub fn parse_page(page: u32, body: &str) -> Result<Page, FetchError> {
    let doc: Value = serde_json::from_str(body).map_err(|source| FetchError::NotJson { page, source })?;
    let malformed = |reason: &str| FetchError::Malformed { page, reason: reason.to_string() };

    let parts = doc.as_array().ok_or_else(|| malformed("top level is not an array"))?;
    match parts.as_slice() {
        [meta, records, ..] => {
            let records = match records {
                Value::Null => Vec::new(),
                Value::Array(items) => items.clone(),
                _ => return Err(malformed("second element is neither an array nor null")),
            };
            Ok(Page { meta: PageMeta::from_value(meta), records })
        }
        [only] => match api_message(only) {
            Some(message) => Err(FetchError::Api { page, message }),
            None => Err(malformed("response has no records element")),
        },
        [] => Err(malformed("empty array")),
    }
}

/// `{"message": [{"id": "120", "key": "Invalid value", "value": "..."}]}`
fn api_message(v: &Value) -> Option<String> {
    let messages = v.get("message")?.as_array()?;
    let text = messages
        .iter()
        .map(|m| {
            let field = |k: &str| m.get(k).and_then(Value::as_str).unwrap_or_default();
            format!("{} {}: {}", field("id"), field("key"), field("value")).trim().to_string()
        })
        .collect::<Vec<_>>()
        .join("; ");
    Some(text)
}

/// Request pages 1, 2, ... until one comes back empty; concatenate in page order.
/// Any failure aborts the whole collection.
pub fn fetch_all<S>(source: &mut S, query: &IndicatorQuery) -> Result<IndicatorDataset, FetchError>
where
    S: PageSource + ?Sized,
{
    let mut records = Vec::new();
    let mut page = 1u32;
    loop {
        let batch = source.fetch_page(query, page)?;
        info!(
            indicator = %query.indicator,
            page,
            pages = ?batch.meta.pages,
            records = batch.records.len(),
            "fetched page"
        );
        if batch.records.is_empty() {
            break;
        }
        records.extend(batch.records);
        page += 1;
    }
    info!(records = records.len(), pages = page - 1, "fetch complete");
    Ok(IndicatorDataset::new(records))
}

/// Fetch everything, then write the JSON document. Nothing is written when the fetch fails.
pub fn fetch_to_file<S>(source: &mut S, query: &IndicatorQuery, path: &Path) -> Result<IndicatorDataset, FetchError>
where
    S: PageSource + ?Sized,
{
    let dataset = fetch_all(source, query)?;
    dataset.save(path)?;
    Ok(dataset)
}
