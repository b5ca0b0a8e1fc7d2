//! Parameter Set for one fetch-compute pass

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moving-average windows offered to the user
pub const MOVING_AVERAGE_CHOICES: [usize; 6] = [5, 10, 20, 50, 100, 200];

/// Benchmarks offered for comparison
pub const COMPARISON_CHOICES: [&str; 3] = ["SPY", "QQQ", "DIA"];

/// History length requested from the data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "max")]
    Max,
}

impl Period {
    pub const ALL: [Period; 7] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
        Self::FiveYears,
        Self::Max,
    ];

    /// Provider range code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ParameterError::UnsupportedPeriod(s.to_string()))
    }
}

/// Bar interval. Only daily bars are offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "1d")]
    Daily,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1d" => Ok(Self::Daily),
            other => Err(ParameterError::UnsupportedInterval(other.to_string())),
        }
    }
}

/// Immutable configuration for one computation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub symbol: String,
    pub period: Period,
    pub interval: Interval,
    pub moving_averages: Vec<usize>,
    pub bollinger_window: usize,
    pub bollinger_std_dev: f64,
    pub volatility_window: usize,
    pub rsi_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub comparisons: Vec<String>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            symbol: "AAPL".to_string(),
            period: Period::OneMonth,
            interval: Interval::Daily,
            moving_averages: vec![20, 50],
            bollinger_window: 20,
            bollinger_std_dev: 2.0,
            volatility_window: 20,
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            comparisons: Vec::new(),
        }
    }
}

impl ParameterSet {
    /// Defaults for a given symbol
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Upper-cased, trimmed primary symbol
    pub fn normalized_symbol(&self) -> String {
        self.symbol.trim().to_uppercase()
    }

    /// Upper-cased comparison symbols, duplicates removed, order kept
    pub fn normalized_comparisons(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for symbol in &self.comparisons {
            let symbol = symbol.trim().to_uppercase();
            if !seen.contains(&symbol) {
                seen.push(symbol);
            }
        }
        seen
    }

    /// Reject any value outside its legal set or bounds
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.normalized_symbol().is_empty() {
            return Err(ParameterError::EmptySymbol);
        }

        for &window in &self.moving_averages {
            if !MOVING_AVERAGE_CHOICES.contains(&window) {
                return Err(ParameterError::UnsupportedMovingAverage(window));
            }
        }

        check_range("Bollinger window", self.bollinger_window, 5, 50)?;
        check_float_range("Bollinger std dev", self.bollinger_std_dev, 1.0, 4.0)?;
        check_step("Bollinger std dev", self.bollinger_std_dev, 0.1)?;
        check_range("Volatility window", self.volatility_window, 5, 50)?;
        check_range("RSI window", self.rsi_window, 5, 30)?;
        check_range("MACD fast window", self.macd_fast, 5, 20)?;
        check_range("MACD slow window", self.macd_slow, 20, 40)?;

        for symbol in self.normalized_comparisons() {
            if !COMPARISON_CHOICES.contains(&symbol.as_str()) {
                return Err(ParameterError::UnsupportedComparison(symbol));
            }
        }

        Ok(())
    }
}

fn check_range(
    name: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), ParameterError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            name,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        })
    }
}

fn check_float_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParameterError> {
    // NaN fails the contains check as well
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

fn check_step(name: &'static str, value: f64, step: f64) -> Result<(), ParameterError> {
    let steps = value / step;
    if (steps - steps.round()).abs() < 1e-6 {
        Ok(())
    } else {
        Err(ParameterError::OffStep { name, value, step })
    }
}
