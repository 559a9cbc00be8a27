//! Quote provider trait and structured error types.
//!
//! The QuoteProvider trait abstracts over market-data sources so the fetcher
//! can run against Yahoo Finance in production and against mocks in tests.

use crate::domain::{DatasetSource, PriceHistory};
use thiserror::Error;

/// Structured error types for provider operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider")]
    RateLimited,

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for market-data providers.
///
/// Implementations fetch one year of daily closes per symbol. An empty
/// history is a valid `Ok` result; deciding what to do with it is the
/// fetcher's job.
pub trait QuoteProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Which dataset source tag live data from this provider carries.
    fn source(&self) -> DatasetSource;

    /// Fetch one year of daily closes for `symbol`, oldest first.
    fn fetch_history(&self, symbol: &str) -> Result<PriceHistory, DataError>;

    /// Shares outstanding for `symbol`, if the provider knows it.
    fn shares_outstanding(&self, symbol: &str) -> Result<Option<f64>, DataError>;
}
