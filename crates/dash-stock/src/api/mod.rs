//! Market Data Source contract and providers

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::OhlcvSeries;
use crate::params::{Interval, Period};

/// Provider of OHLCV history.
///
/// Implementations must report a symbol the provider does not know as
/// [`FetchError::NotFound`] (or return an empty series) and everything else
/// as a transient failure, so a pass can stop cleanly on the former.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<OhlcvSeries, FetchError>;
}
