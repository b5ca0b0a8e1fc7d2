//! Percent-change normalization for comparison charts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{IndicatorError, ParameterError};
use crate::model::{IndicatorSeries, OhlcvSeries};

/// How a comparison series is lined up against the primary index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonAlignment {
    /// Row i of the comparison goes to primary row i. Correct only when both
    /// series share a trading calendar.
    #[default]
    Positional,
    /// Rows are joined on calendar date; the comparison is rebased at the
    /// first shared date.
    Timestamp,
}

impl fmt::Display for ComparisonAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional => f.write_str("positional"),
            Self::Timestamp => f.write_str("timestamp"),
        }
    }
}

impl FromStr for ComparisonAlignment {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positional" => Ok(Self::Positional),
            "timestamp" => Ok(Self::Timestamp),
            _ => Err(ParameterError::UnsupportedOption {
                name: "comparison alignment",
                value: s.to_string(),
            }),
        }
    }
}

/// price[i] / price[0] * 100 - 100
pub fn normalize(prices: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    let Some(&base) = prices.first() else {
        return Ok(Vec::new());
    };
    if base == 0.0 || !base.is_finite() {
        return Err(IndicatorError::InvalidParameter(format!(
            "cannot normalize against base price {base}"
        )));
    }
    Ok(prices.iter().map(|p| p / base * 100.0 - 100.0).collect())
}

/// Normalized comparison closes placed on the primary index.
///
/// The result always has `primary.len()` slots; slots with no matching
/// comparison row are undefined.
pub fn align_comparison(
    primary: &OhlcvSeries,
    comparison: &OhlcvSeries,
    alignment: ComparisonAlignment,
) -> Result<IndicatorSeries, IndicatorError> {
    match alignment {
        ComparisonAlignment::Positional => {
            let normalized = normalize(&comparison.closes())?;
            Ok((0..primary.len())
                .map(|i| normalized.get(i).copied())
                .collect())
        }
        ComparisonAlignment::Timestamp => {
            let by_date: HashMap<NaiveDate, f64> = comparison
                .bars()
                .iter()
                .map(|b| (b.timestamp.date_naive(), b.close))
                .collect();

            let matched: Vec<Option<f64>> = primary
                .bars()
                .iter()
                .map(|b| by_date.get(&b.timestamp.date_naive()).copied())
                .collect();

            let Some(base) = matched.iter().flatten().next().copied() else {
                return Ok(IndicatorSeries::undefined(primary.len()));
            };
            if base == 0.0 || !base.is_finite() {
                return Err(IndicatorError::InvalidParameter(format!(
                    "cannot normalize against base price {base}"
                )));
            }

            Ok(matched
                .into_iter()
                .map(|v| v.map(|p| p / base * 100.0 - 100.0))
                .collect())
        }
    }
}
