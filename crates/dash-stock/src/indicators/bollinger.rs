//! Bollinger Bands
//!
//! middle = SMA(window), upper/lower = middle ± k·σ where σ is the population
//! standard deviation of the same trailing window.

use serde::{Deserialize, Serialize};
use ta::{Next, indicators::BollingerBands};

use super::{check_window, ta_error};
use crate::error::IndicatorError;
use crate::model::IndicatorSeries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    pub middle: IndicatorSeries,
    pub upper: IndicatorSeries,
    pub lower: IndicatorSeries,
}

pub fn bollinger_bands(
    closes: &[f64],
    window: usize,
    std_dev_multiplier: f64,
) -> Result<BollingerOutput, IndicatorError> {
    check_window(window, closes.len())?;
    if !std_dev_multiplier.is_finite() || std_dev_multiplier <= 0.0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "Bollinger std dev multiplier must be positive, got {std_dev_multiplier}"
        )));
    }

    let mut indicator = BollingerBands::new(window, std_dev_multiplier).map_err(ta_error)?;
    let bands: Vec<_> = closes.iter().map(|&close| indicator.next(close)).collect();
    let warmup = window - 1;

    Ok(BollingerOutput {
        middle: IndicatorSeries::from_raw(bands.iter().map(|b| b.average), warmup),
        upper: IndicatorSeries::from_raw(bands.iter().map(|b| b.upper), warmup),
        lower: IndicatorSeries::from_raw(bands.iter().map(|b| b.lower), warmup),
    })
}
