//! Headline numbers shown above the price chart

use serde::{Deserialize, Serialize};

/// A labeled value with its display text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: Option<f64>,
    pub display: String,
}

impl Metric {
    fn new(label: &str, value: Option<f64>, format: impl Fn(f64) -> String) -> Self {
        Self {
            label: label.to_string(),
            value,
            display: value.map_or_else(|| "n/a".to_string(), format),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub current: Metric,
    pub change: Metric,
    pub volatility: Metric,
    pub rsi: Metric,
    pub atr: Metric,
}

impl SummaryMetrics {
    /// Build from the latest values of each series.
    ///
    /// `first_close` and `last_close` give the change over the whole period.
    pub fn new(
        first_close: Option<f64>,
        last_close: Option<f64>,
        volatility: Option<f64>,
        rsi: Option<f64>,
        atr: Option<f64>,
    ) -> Self {
        let change = match (first_close, last_close) {
            (Some(first), Some(last)) if first != 0.0 => Some((last / first - 1.0) * 100.0),
            _ => None,
        };

        Self {
            current: Metric::new("Current", last_close, |v| format!("${v:.2}")),
            change: Metric::new("Change", change, |v| format!("{v:.1}%")),
            volatility: Metric::new("Volatility", volatility, |v| format!("{v:.1}%")),
            rsi: Metric::new("RSI", rsi, |v| format!("{v:.1}")),
            atr: Metric::new("ATR", atr, |v| format!("{v:.2}")),
        }
    }

    /// Metrics in display order
    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        [
            &self.current,
            &self.change,
            &self.volatility,
            &self.rsi,
            &self.atr,
        ]
        .into_iter()
    }
}
