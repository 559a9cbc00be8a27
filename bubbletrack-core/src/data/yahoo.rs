//! Yahoo Finance quote provider.
//!
//! Daily closes come from the v8 chart API (`range=1y&interval=1d`); shares
//! outstanding from the v7 quote API. Yahoo Finance has no official API and is
//! subject to unannounced format changes, so every parse failure maps to a
//! `DataError` and the caller falls back to sample data.
//!
//! The v7 quote endpoint usually answers 401 unless the request carries a
//! session cookie and crumb, which this client does not obtain. In that case
//! `shares_outstanding` returns `AuthenticationRequired`, the fetcher records
//! shares as unknown, and live `marketCap` is null.

use super::provider::{DataError, QuoteProvider};
use crate::domain::{round2, ClosePoint, DatasetSource, PriceHistory};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

const BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

/// Yahoo Finance v7 quote API response.
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResult,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    result: Option<Vec<QuoteEntry>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct QuoteEntry {
    symbol: String,
    #[serde(rename = "sharesOutstanding")]
    shares_outstanding: Option<f64>,
}

/// Yahoo Finance quote provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| DataError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    fn chart_url(symbol: &str) -> String {
        format!("{BASE_URL}/v8/finance/chart/{symbol}?range=1y&interval=1d")
    }

    fn quote_url(symbol: &str) -> String {
        format!("{BASE_URL}/v7/finance/quote?symbols={symbol}")
    }

    /// Parse a chart response into a close history.
    ///
    /// Null closes (holidays, halted sessions) are dropped. A result with no
    /// timestamps yields an empty history rather than an error.
    fn parse_chart(symbol: &str, resp: ChartResponse) -> Result<PriceHistory, DataError> {
        let Some(result) = resp.chart.result else {
            return match resp.chart.error {
                Some(err) if err.code == "Not Found" => Err(DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                }),
                Some(err) => Err(DataError::ResponseFormatChanged(format!(
                    "{}: {}",
                    err.code, err.description
                ))),
                None => Ok(PriceHistory::new(symbol, Vec::new())),
            };
        };

        let Some(data) = result.into_iter().next() else {
            return Ok(PriceHistory::new(symbol, Vec::new()));
        };
        let Some(timestamps) = data.timestamp else {
            return Ok(PriceHistory::new(symbol, Vec::new()));
        };

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };
            points.push(ClosePoint {
                timestamp: session_midnight(ts)?,
                close: round2(close),
            });
        }

        Ok(PriceHistory::new(symbol, points))
    }

    fn parse_quote(symbol: &str, resp: QuoteResponse) -> Result<Option<f64>, DataError> {
        if let Some(err) = resp.quote_response.error {
            return Err(DataError::ResponseFormatChanged(format!(
                "{}: {}",
                err.code, err.description
            )));
        }
        let shares = resp
            .quote_response
            .result
            .unwrap_or_default()
            .into_iter()
            .find(|q| q.symbol.eq_ignore_ascii_case(symbol))
            .and_then(|q| q.shares_outstanding)
            .filter(|&s| s > 0.0);
        Ok(shares)
    }

    /// Issue a GET and map HTTP-level failures onto `DataError`. No retries.
    fn get(&self, url: &str, symbol: &str) -> Result<reqwest::blocking::Response, DataError> {
        let resp = self.client.get(url).send().map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DataError::NetworkUnreachable(e.to_string())
            } else {
                DataError::Other(e.to_string())
            }
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DataError::AuthenticationRequired(format!(
                "HTTP {status} for {symbol}"
            )));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DataError::Other(format!("HTTP {status} for {symbol}")));
        }
        Ok(resp)
    }
}

/// Midnight UTC on the trading date of a chart timestamp.
fn session_midnight(ts: i64) -> Result<DateTime<Utc>, DataError> {
    DateTime::from_timestamp(ts, 0)
        .and_then(|dt| dt.date_naive().and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}")))
}

impl QuoteProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn source(&self) -> DatasetSource {
        DatasetSource::YahooFinance
    }

    fn fetch_history(&self, symbol: &str) -> Result<PriceHistory, DataError> {
        let resp = self.get(&Self::chart_url(symbol), symbol)?;
        let chart: ChartResponse = resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to parse chart for {symbol}: {e}"))
        })?;
        Self::parse_chart(symbol, chart)
    }

    fn shares_outstanding(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        let resp = self.get(&Self::quote_url(symbol), symbol)?;
        let quote: QuoteResponse = resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to parse quote for {symbol}: {e}"))
        })?;
        Self::parse_quote(symbol, quote)
    }
}
