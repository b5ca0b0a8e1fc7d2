//! Stock dashboard engine
//!
//! This crate turns a [`ParameterSet`] into a [`RenderModel`]: it fetches
//! daily OHLCV history for one symbol (plus optional comparison symbols),
//! computes the indicator suite and lays the results out as the panels a
//! dashboard draws. It includes:
//!
//! - Data fetching from Yahoo Finance behind the [`MarketDataSource`] trait
//! - Price indicators (simple moving averages, Bollinger Bands, ATR)
//! - Momentum indicators (RSI, MACD with signal line)
//! - Daily returns, annualized realized volatility and a return histogram
//! - Normalized performance comparison against benchmark symbols
//!
//! Every pass refetches and recomputes; nothing is cached between passes.
//!
//! # Example
//!
//! ```rust,ignore
//! use dash_stock::{Dashboard, DashboardConfig, ParameterSet, YahooFinanceClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(DashboardConfig::default());
//!     let dashboard = Dashboard::new(YahooFinanceClient::from_config(&config), config);
//!
//!     let model = dashboard.render(&ParameterSet::for_symbol("AAPL")).await?;
//!     for metric in model.price.metrics.iter() {
//!         println!("{}: {}", metric.label, metric.display);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod model;
pub mod params;
pub mod render;

// Re-export main types for convenience
pub use api::{MarketDataSource, YahooFinanceClient};
pub use config::DashboardConfig;
pub use engine::{Dashboard, IndicatorSet, compute_pass};
pub use error::{DashboardError, FetchError, IndicatorError, ParameterError, Result};
pub use indicators::{AtrSmoothing, ComparisonAlignment};
pub use model::{Bar, IndicatorSeries, OhlcvSeries};
pub use params::{Interval, ParameterSet, Period};
pub use render::RenderModel;
