//! Configuration for dashboard passes

use crate::error::{DashboardError, Result};
use crate::indicators::atr::DEFAULT_ATR_WINDOW;
use crate::indicators::macd::DEFAULT_SIGNAL_WINDOW;
use crate::indicators::returns::TRADING_DAYS_PER_YEAR;
use crate::indicators::{AtrSmoothing, ComparisonAlignment};
use dash_utils::parse_var;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration shared by every pass.
///
/// Per-pass choices live in [`ParameterSet`](crate::params::ParameterSet);
/// this holds the knobs the user does not touch from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Request quota for the market data client
    pub requests_per_minute: u32,

    /// Upper bound on a single fetch
    pub request_timeout: Duration,

    /// How comparison series are lined up against the primary series
    pub comparison_alignment: ComparisonAlignment,

    /// ATR lookback
    pub atr_window: usize,

    /// ATR averaging method
    pub atr_smoothing: AtrSmoothing,

    /// MACD signal line window
    pub macd_signal_window: usize,

    /// Number of bins in the daily-return histogram
    pub histogram_bins: usize,

    /// Annualization factor for realized volatility
    pub trading_days_per_year: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 60,
            request_timeout: Duration::from_secs(30),
            comparison_alignment: ComparisonAlignment::Positional,
            atr_window: DEFAULT_ATR_WINDOW,
            atr_smoothing: AtrSmoothing::Simple,
            macd_signal_window: DEFAULT_SIGNAL_WINDOW,
            histogram_bins: 50,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration builder
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.requests_per_minute == 0 {
            return Err(DashboardError::Config(
                "requests_per_minute must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(DashboardError::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.atr_window == 0 || self.macd_signal_window == 0 {
            return Err(DashboardError::Config(
                "indicator windows must be greater than 0".to_string(),
            ));
        }

        if self.histogram_bins == 0 {
            return Err(DashboardError::Config(
                "histogram_bins must be greater than 0".to_string(),
            ));
        }

        if !(self.trading_days_per_year.is_finite() && self.trading_days_per_year > 0.0) {
            return Err(DashboardError::Config(format!(
                "trading_days_per_year must be positive, got {}",
                self.trading_days_per_year
            )));
        }

        Ok(())
    }
}

/// Builder for DashboardConfig
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    requests_per_minute: Option<u32>,
    request_timeout: Option<Duration>,
    comparison_alignment: Option<ComparisonAlignment>,
    atr_window: Option<usize>,
    atr_smoothing: Option<AtrSmoothing>,
    macd_signal_window: Option<usize>,
    histogram_bins: Option<usize>,
    trading_days_per_year: Option<f64>,
}

impl DashboardConfigBuilder {
    pub fn requests_per_minute(mut self, quota: u32) -> Self {
        self.requests_per_minute = Some(quota);
        self
    }

    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    pub fn comparison_alignment(mut self, alignment: ComparisonAlignment) -> Self {
        self.comparison_alignment = Some(alignment);
        self
    }

    pub fn atr_window(mut self, window: usize) -> Self {
        self.atr_window = Some(window);
        self
    }

    pub fn atr_smoothing(mut self, smoothing: AtrSmoothing) -> Self {
        self.atr_smoothing = Some(smoothing);
        self
    }

    pub fn macd_signal_window(mut self, window: usize) -> Self {
        self.macd_signal_window = Some(window);
        self
    }

    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    pub fn trading_days_per_year(mut self, days: f64) -> Self {
        self.trading_days_per_year = Some(days);
        self
    }

    /// Fill unset fields from `DASH_*` environment variables.
    ///
    /// Values set explicitly on the builder take precedence.
    pub fn with_env(self) -> Result<Self> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Fill unset fields from `DASH_*` variables resolved through `lookup`
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if self.requests_per_minute.is_none() {
            self.requests_per_minute = parse_var("DASH_REQUESTS_PER_MINUTE", &lookup)?;
        }
        if self.request_timeout.is_none() {
            self.request_timeout =
                parse_var::<u64>("DASH_REQUEST_TIMEOUT_SECS", &lookup)?.map(Duration::from_secs);
        }
        if self.comparison_alignment.is_none() {
            self.comparison_alignment = parse_var("DASH_COMPARISON_ALIGNMENT", &lookup)?;
        }
        if self.atr_window.is_none() {
            self.atr_window = parse_var("DASH_ATR_WINDOW", &lookup)?;
        }
        if self.atr_smoothing.is_none() {
            self.atr_smoothing = parse_var("DASH_ATR_SMOOTHING", &lookup)?;
        }
        if self.histogram_bins.is_none() {
            self.histogram_bins = parse_var("DASH_HISTOGRAM_BINS", &lookup)?;
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();

        let config = DashboardConfig {
            requests_per_minute: self.requests_per_minute.unwrap_or(defaults.requests_per_minute),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            comparison_alignment: self
                .comparison_alignment
                .unwrap_or(defaults.comparison_alignment),
            atr_window: self.atr_window.unwrap_or(defaults.atr_window),
            atr_smoothing: self.atr_smoothing.unwrap_or(defaults.atr_smoothing),
            macd_signal_window: self.macd_signal_window.unwrap_or(defaults.macd_signal_window),
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            trading_days_per_year: self
                .trading_days_per_year
                .unwrap_or(defaults.trading_days_per_year),
        };

        config.validate()?;
        Ok(config)
    }
}
