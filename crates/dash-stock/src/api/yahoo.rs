//! Yahoo Finance API client

use async_trait::async_trait;
use chrono::DateTime;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use yahoo_finance_api as yahoo;

use super::MarketDataSource;
use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::model::{Bar, OhlcvSeries};
use crate::params::{Interval, Period};

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

const PROVIDER: &str = "yahoo";

/// Yahoo Finance API client
#[derive(Clone)]
pub struct YahooFinanceClient {
    rate_limiter: SharedRateLimiter,
    timeout: Duration,
}

impl YahooFinanceClient {
    /// Create a client with the given quota and per-request timeout
    pub fn new(requests_per_minute: u32, timeout: Duration) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN));

        Self {
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
            timeout,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.requests_per_minute, config.request_timeout)
    }

    async fn fetch_quotes(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<yahoo::Quote>, FetchError> {
        self.rate_limiter.until_ready().await;

        let provider = yahoo::YahooConnector::new().map_err(|e| transient(symbol, &e))?;

        let response = tokio::time::timeout(
            self.timeout,
            provider.get_quote_range(symbol, interval.as_str(), period.as_str()),
        )
        .await
        .map_err(|_| FetchError::Transient {
            symbol: symbol.to_string(),
            reason: format!("request timed out after {:?}", self.timeout),
        })?
        .map_err(|e| classify(symbol, &e))?;

        response.quotes().map_err(|e| classify(symbol, &e))
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

#[async_trait]
impl MarketDataSource for YahooFinanceClient {
    async fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<OhlcvSeries, FetchError> {
        tracing::debug!(symbol, %period, %interval, "Fetching quote history");

        let quotes = self.fetch_quotes(symbol, period, interval).await?;
        let bars: Vec<Bar> = quotes.iter().filter_map(to_bar).collect();

        if bars.is_empty() {
            return Err(FetchError::NotFound {
                symbol: symbol.to_string(),
            });
        }

        tracing::debug!(symbol, bars = bars.len(), "Fetched quote history");
        Ok(OhlcvSeries::new(symbol, bars))
    }
}

fn to_bar(quote: &yahoo::Quote) -> Option<Bar> {
    let timestamp = DateTime::from_timestamp(quote.timestamp as i64, 0)?;
    let prices = [quote.open, quote.high, quote.low, quote.close];
    // Yahoo fills halted sessions with zeros or NaN
    if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
        return None;
    }
    Some(Bar {
        timestamp,
        open: quote.open,
        high: quote.high,
        low: quote.low,
        close: quote.close,
        volume: quote.volume,
    })
}

/// Yahoo answers an unknown symbol with a 404 and a "No data found" body;
/// the client surfaces both only through the error text.
fn classify(symbol: &str, err: &yahoo::YahooError) -> FetchError {
    let message = err.to_string();
    let lowered = message.to_lowercase();
    let not_found = ["404", "not found", "no data found", "delisted", "empty data set"]
        .iter()
        .any(|needle| lowered.contains(needle));

    if not_found {
        FetchError::NotFound {
            symbol: symbol.to_string(),
        }
    } else if lowered.contains("429") || lowered.contains("too many requests") {
        FetchError::RateLimited {
            provider: PROVIDER.to_string(),
        }
    } else {
        FetchError::Transient {
            symbol: symbol.to_string(),
            reason: message,
        }
    }
}

fn transient(symbol: &str, err: &yahoo::YahooError) -> FetchError {
    FetchError::Transient {
        symbol: symbol.to_string(),
        reason: err.to_string(),
    }
}
