//! Indicator Engine
//!
//! Pure transforms over price series. Every function returns a series of the
//! same length as its input, with `None` in the warm-up region, and never
//! mutates its input.
//!
//! Windowed functions are strict: a zero window or a window longer than the
//! input is reported as an [`IndicatorError`] rather than silently producing
//! an empty result.

pub mod atr;
pub mod bollinger;
pub mod compare;
pub mod ema;
pub mod macd;
pub mod returns;
pub mod rsi;
pub mod sma;
pub mod stats;

pub use atr::{AtrSmoothing, average_true_range};
pub use bollinger::{BollingerOutput, bollinger_bands};
pub use compare::{ComparisonAlignment, align_comparison, normalize};
pub use ema::ema;
pub use macd::{MacdOutput, macd};
pub use returns::{daily_returns, realized_volatility};
pub use rsi::rsi;
pub use sma::sma;

use crate::error::IndicatorError;

/// Reject a zero window or one longer than the available data
pub(crate) fn check_window(window: usize, len: usize) -> Result<(), IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::ZeroWindow);
    }
    if window > len {
        return Err(IndicatorError::InsufficientData { window, len });
    }
    Ok(())
}

pub(crate) fn ta_error(err: ta::errors::TaError) -> IndicatorError {
    IndicatorError::InvalidParameter(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_window() {
        assert_eq!(check_window(0, 10), Err(IndicatorError::ZeroWindow));
        assert_eq!(
            check_window(11, 10),
            Err(IndicatorError::InsufficientData { window: 11, len: 10 })
        );
        assert!(check_window(10, 10).is_ok());
    }
}
