//! Average True Range

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ta::{Next, indicators::TrueRange};

use super::{check_window, sma};
use crate::error::{IndicatorError, ParameterError};
use crate::model::{Bar, IndicatorSeries};

/// Window used when none is configured
pub const DEFAULT_ATR_WINDOW: usize = 14;

/// How true ranges are averaged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtrSmoothing {
    /// Rolling mean of the last `window` true ranges
    #[default]
    Simple,
    /// Seeded with the mean of the first `window` true ranges, then
    /// atr = (prev * (window - 1) + tr) / window
    Wilder,
}

impl fmt::Display for AtrSmoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::Wilder => f.write_str("wilder"),
        }
    }
}

impl FromStr for AtrSmoothing {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "wilder" => Ok(Self::Wilder),
            _ => Err(ParameterError::UnsupportedOption {
                name: "ATR smoothing",
                value: s.to_string(),
            }),
        }
    }
}

/// True range per bar; the first bar uses `high - low`
pub fn true_ranges(bars: &[Bar]) -> Vec<f64> {
    let mut indicator = TrueRange::new();
    bars.iter().map(|bar| indicator.next(bar)).collect()
}

pub fn average_true_range(
    bars: &[Bar],
    window: usize,
    smoothing: AtrSmoothing,
) -> Result<IndicatorSeries, IndicatorError> {
    check_window(window, bars.len())?;
    let tr = true_ranges(bars);

    match smoothing {
        AtrSmoothing::Simple => sma(&tr, window),
        AtrSmoothing::Wilder => {
            let n = window as f64;
            let mut atr = tr[..window].iter().sum::<f64>() / n;
            let mut raw = vec![f64::NAN; tr.len()];
            raw[window - 1] = atr;
            for i in window..tr.len() {
                atr = (atr * (n - 1.0) + tr[i]) / n;
                raw[i] = atr;
            }
            Ok(IndicatorSeries::from_raw(raw, window - 1))
        }
    }
}
