//! Render model handed to the Presentation Layer
//!
//! Everything the dashboard draws for one pass, grouped the way the tabs are
//! laid out. The model carries values only; drawing and diffing belong to
//! whoever consumes it.

pub mod chart;
pub mod histogram;
pub mod metrics;

pub use chart::{LineChart, LineSeries, LineStyle, ReferenceLine};
pub use histogram::{Histogram, HistogramBin};
pub use metrics::{Metric, SummaryMetrics};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Bar;
use crate::params::ParameterSet;

/// Candles with moving-average and Bollinger overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTab {
    pub candles: Vec<Bar>,
    pub overlays: Vec<LineSeries>,
    pub metrics: SummaryMetrics,
}

/// RSI and MACD line charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalTab {
    pub rsi: LineChart,
    pub macd: LineChart,
}

/// Realized volatility and the daily-return distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityTab {
    pub volatility: LineChart,
    pub returns: Histogram,
}

/// Output of one fetch-compute pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Set by the pipeline that fetched the data; `None` for models built offline
    pub pass_id: Option<Uuid>,
    pub symbol: String,
    pub params: ParameterSet,
    /// Shared x-axis for every line series
    pub timestamps: Vec<DateTime<Utc>>,
    pub price: PriceTab,
    pub technical: TechnicalTab,
    pub volatility: VolatilityTab,
    /// Present only when comparison symbols were requested
    pub comparison: Option<LineChart>,
    pub warnings: Vec<String>,
}

impl RenderModel {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
