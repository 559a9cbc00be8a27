//! Market-data access: provider trait, Yahoo Finance client, and live fetch.

pub mod fetch;
pub mod provider;
pub mod yahoo;

pub use fetch::{fetch_live_dataset, FetchError};
pub use provider::{DataError, QuoteProvider};
pub use yahoo::YahooProvider;
