//! Sample dataset synthesizer.
//!
//! Produces a seeded stand-in for live data with the same shape as a live
//! fetch:
//! - One year of daily closes per ticker: seasonal swing, upward drift, and
//!   bounded uniform noise, floored at 1.0
//! - A seven-week linear decline per bagholder, floored at 0.5
//!
//! Output depends only on the config and the run date, never on wall-clock
//! time beyond `lastUpdated`.

use crate::config::TrackerConfig;
use crate::domain::{
    round2, BagholderPoint, BagholderSeries, ClosePoint, Dataset, DatasetMetadata, DatasetSource,
    PriceHistory, SeriesRecord,
};
use crate::rng::RngHierarchy;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rand::Rng;

/// Points in a daily series: today plus the 365 days before it.
pub const DAILY_POINTS: usize = 366;
/// Points in a bagholder series: today plus the six weeks before it.
pub const WEEKLY_POINTS: usize = 7;

pub const PRICE_FLOOR: f64 = 1.0;
pub const BAGHOLDER_FLOOR: f64 = 0.5;

const SEASONAL_AMPLITUDE: f64 = 0.01;
const SEASONAL_PERIOD_DAYS: f64 = 20.0;
const DAILY_DRIFT: f64 = 0.0008;
const NOISE_BOUND: f64 = 0.004;
const WEEKLY_DISCOUNT: f64 = 0.05;

pub const SAMPLE_NOTE: &str =
    "Generated offline; the scheduled refresh will replace this with live data when network is available.";

/// Build the full sample dataset for `config`, dated `now`.
pub fn build_sample_dataset(config: &TrackerConfig, now: DateTime<Utc>) -> Dataset {
    let today = now.date_naive();
    let start = today - Duration::days(DAILY_POINTS as i64 - 1);
    let rngs = RngHierarchy::new(config.seed);

    let mut dataset = Dataset::new(
        now,
        DatasetMetadata {
            source: DatasetSource::Sample,
            note: Some(SAMPLE_NOTE.to_string()),
        },
    );

    for ticker in &config.tickers {
        let mut rng = rngs.rng_for(&ticker.symbol);
        let history = daily_walk(&ticker.symbol, ticker.base_price, start, &mut rng);
        let record = SeriesRecord::from_history(&history, Some(ticker.sample_shares));
        dataset.insert_series(record, &config.sentiment_symbol);
    }

    for spec in &config.bagholders {
        let data = bagholder_downtrend(spec.base_price, today);
        dataset.bagholders.push(BagholderSeries::new(spec, data));
    }

    tracing::debug!(
        seed = config.seed,
        series = dataset.series.len(),
        bagholders = dataset.bagholders.len(),
        "built sample dataset"
    );
    dataset
}

/// Random walk of `DAILY_POINTS` daily closes starting at `start`.
///
/// The walk itself is carried unrounded; each recorded close is rounded to
/// cents.
pub fn daily_walk<R: Rng>(
    symbol: &str,
    base_price: f64,
    start: NaiveDate,
    rng: &mut R,
) -> PriceHistory {
    let mut price = base_price;
    let mut points = Vec::with_capacity(DAILY_POINTS);

    for day in 0..DAILY_POINTS {
        let seasonal = (day as f64 / SEASONAL_PERIOD_DAYS).sin() * SEASONAL_AMPLITUDE;
        let noise = rng.gen_range(-NOISE_BOUND..=NOISE_BOUND);
        price = (price * (1.0 + seasonal + DAILY_DRIFT + noise)).max(PRICE_FLOOR);

        points.push(ClosePoint {
            timestamp: midnight_utc(start + Duration::days(day as i64)),
            close: round2(price),
        });
    }

    PriceHistory::new(symbol, points)
}

/// Weekly decline ending on `today`: each week knocks another 5% of
/// `base_price` off, floored at `BAGHOLDER_FLOOR`.
pub fn bagholder_downtrend(base_price: f64, today: NaiveDate) -> Vec<BagholderPoint> {
    let start = today - Duration::weeks(WEEKLY_POINTS as i64 - 1);
    (0..WEEKLY_POINTS)
        .map(|week| {
            let discount = 1.0 - WEEKLY_DISCOUNT * week as f64;
            BagholderPoint {
                date: midnight_utc(start + Duration::weeks(week as i64)),
                value: round2(base_price * discount).max(BAGHOLDER_FLOOR),
            }
        })
        .collect()
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
