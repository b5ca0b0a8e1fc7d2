//! Simple moving average

use ta::{Next, indicators::SimpleMovingAverage};

use super::{check_window, ta_error};
use crate::error::IndicatorError;
use crate::model::IndicatorSeries;

/// Trailing mean over `window` values, undefined for the first `window - 1`
pub fn sma(values: &[f64], window: usize) -> Result<IndicatorSeries, IndicatorError> {
    check_window(window, values.len())?;

    let mut indicator = SimpleMovingAverage::new(window).map_err(ta_error)?;
    Ok(IndicatorSeries::from_raw(
        values.iter().map(|&v| indicator.next(v)),
        window - 1,
    ))
}
