//! Daily returns and realized volatility

use super::check_window;
use super::stats::{rolling_apply, std_dev};
use crate::error::IndicatorError;
use crate::model::IndicatorSeries;

/// Trading days used to annualize daily volatility
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// close[i] / close[i-1] - 1, undefined at index 0
pub fn daily_returns(closes: &[f64]) -> IndicatorSeries {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            if i == 0 {
                return None;
            }
            Some(close / closes[i - 1] - 1.0).filter(|r| r.is_finite())
        })
        .collect()
}

/// Rolling sample standard deviation of daily returns, annualized, in percent.
///
/// The first defined value sits at index `window`, since index 0 has no
/// return.
pub fn realized_volatility(
    returns: &IndicatorSeries,
    window: usize,
    trading_days_per_year: f64,
) -> Result<IndicatorSeries, IndicatorError> {
    check_window(window, returns.len().saturating_sub(1))?;
    if window < 2 {
        return Err(IndicatorError::InvalidParameter(format!(
            "volatility window must be at least 2, got {window}"
        )));
    }

    let scale = trading_days_per_year.sqrt() * 100.0;
    Ok(rolling_apply(returns.values(), window, |w| std_dev(w, 1) * scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bar::fixtures::walk;

    #[test]
    fn test_daily_returns() {
        let returns = daily_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.get(0), None);
        assert!((returns.get(1).unwrap() - 0.1).abs() < 1e-12);
        assert!((returns.get(2).unwrap() + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_returns_reconstruct_closes() {
        let closes = walk(250);
        let returns = daily_returns(&closes);
        for i in 1..closes.len() {
            let rebuilt = closes[i - 1] * (1.0 + returns.get(i).unwrap());
            assert!((rebuilt - closes[i]).abs() < 1e-9 * closes[i]);
        }
    }

    #[test]
    fn test_zero_previous_close_is_undefined() {
        let returns = daily_returns(&[0.0, 1.0]);
        assert_eq!(returns.get(1), None);
    }

    #[test]
    fn test_volatility_warmup_and_value() {
        // returns alternate +1% / -1%
        let mut closes = vec![100.0];
        for i in 0..10 {
            let last = *closes.last().unwrap();
            closes.push(if i % 2 == 0 { last * 1.01 } else { last * 0.99 });
        }
        let returns = daily_returns(&closes);
        let vol = realized_volatility(&returns, 4, TRADING_DAYS_PER_YEAR).unwrap();

        assert_eq!(vol.len(), closes.len());
        assert_eq!(vol.first_defined(), Some(4));

        // sample std of [0.01, -0.01, 0.01, -0.01] = sqrt(4 * 0.0001 / 3)
        let expected = (4.0 * 0.0001_f64 / 3.0).sqrt() * 252f64.sqrt() * 100.0;
        assert!((vol.get(4).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_window_checks() {
        let returns = daily_returns(&walk(10));
        assert!(matches!(
            realized_volatility(&returns, 10, TRADING_DAYS_PER_YEAR),
            Err(IndicatorError::InsufficientData { window: 10, len: 9 })
        ));
        assert!(realized_volatility(&returns, 1, TRADING_DAYS_PER_YEAR).is_err());
    }
}
