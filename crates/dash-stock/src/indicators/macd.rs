//! Moving Average Convergence Divergence

use serde::{Deserialize, Serialize};

use super::check_window;
use super::ema::{ema, ema_over};
use crate::error::IndicatorError;
use crate::model::IndicatorSeries;

/// Signal window used when none is configured
pub const DEFAULT_SIGNAL_WINDOW: usize = 9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// EMA(fast) - EMA(slow)
    pub macd: IndicatorSeries,
    /// EMA(signal) of the MACD line
    pub signal: IndicatorSeries,
    /// MACD - signal
    pub histogram: IndicatorSeries,
}

/// MACD over closes.
///
/// The MACD line is defined from index `slow - 1`. The signal line needs a
/// further `signal - 1` bars and stays undefined on shorter inputs.
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdOutput, IndicatorError> {
    check_window(fast, closes.len())?;
    check_window(slow, closes.len())?;
    if signal == 0 {
        return Err(IndicatorError::ZeroWindow);
    }
    if fast > slow {
        return Err(IndicatorError::InvalidParameter(format!(
            "MACD fast window {fast} is longer than slow window {slow}"
        )));
    }

    let fast_ema = ema(closes, fast)?;
    let slow_ema = ema(closes, slow)?;
    let macd = fast_ema.zip_with(&slow_ema, |f, s| f - s);
    let signal = ema_over(macd.values(), signal);
    let histogram = macd.zip_with(&signal, |m, s| m - s);

    Ok(MacdOutput {
        macd,
        signal,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bar::fixtures::walk;

    #[test]
    fn test_macd_is_ema_difference() {
        let closes = walk(150);
        let out = macd(&closes, 12, 26, 9).unwrap();
        let fast = ema(&closes, 12).unwrap();
        let slow = ema(&closes, 26).unwrap();

        assert_eq!(out.macd.first_defined(), Some(25));
        for i in 0..closes.len() {
            match (fast.get(i), slow.get(i)) {
                (Some(f), Some(s)) => {
                    assert!((out.macd.get(i).unwrap() - (f - s)).abs() < 1e-12);
                }
                _ => assert_eq!(out.macd.get(i), None),
            }
        }
    }

    #[test]
    fn test_signal_warmup() {
        let closes = walk(60);
        let out = macd(&closes, 12, 26, 9).unwrap();
        assert_eq!(out.signal.first_defined(), Some(25 + 8));
        let i = 40;
        let expected = out.macd.get(i).unwrap() - out.signal.get(i).unwrap();
        assert!((out.histogram.get(i).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_signal_undefined_on_short_input() {
        let closes = walk(30);
        let out = macd(&closes, 12, 26, 9).unwrap();
        assert!(out.macd.last().is_some());
        assert_eq!(out.signal.first_defined(), None);
    }

    #[test]
    fn test_equal_windows_give_flat_line() {
        let closes = walk(40);
        let out = macd(&closes, 20, 20, 9).unwrap();
        assert!(out.macd.defined().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_rejects_inverted_windows() {
        let closes = walk(40);
        assert!(matches!(
            macd(&closes, 26, 12, 9),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(macd(&closes, 12, 41, 9).is_err());
    }
}
