//! Relative Strength Index, Wilder smoothing
//!
//! gain/loss per bar from close-to-close changes, the first bar counting as
//! no change. Averages use alpha = 1/window:
//!   avg[i] = avg[i-1] + (x[i] - avg[i-1]) / window
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss), and 100 when avg_loss is 0.
//! Defined from index `window - 1`.

use super::check_window;
use crate::error::IndicatorError;
use crate::model::IndicatorSeries;

pub fn rsi(closes: &[f64], window: usize) -> Result<IndicatorSeries, IndicatorError> {
    check_window(window, closes.len())?;

    let alpha = 1.0 / window as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    let raw = closes.iter().enumerate().map(|(i, &close)| {
        let delta = if i == 0 { 0.0 } else { close - closes[i - 1] };
        let (gain, loss) = (delta.max(0.0), (-delta).max(0.0));

        if i == 0 {
            avg_gain = gain;
            avg_loss = loss;
        } else {
            avg_gain += alpha * (gain - avg_gain);
            avg_loss += alpha * (loss - avg_loss);
        }

        rsi_from_averages(avg_gain, avg_loss)
    });

    Ok(IndicatorSeries::from_raw(raw.collect::<Vec<_>>(), window - 1))
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
