//! Exponential moving average seeded by a simple average
//!
//! alpha = 2 / (window + 1). The first output is the mean of the first
//! `window` defined inputs; after that
//!   ema[i] = alpha * x[i] + (1 - alpha) * ema[i - 1]

use super::check_window;
use crate::error::IndicatorError;
use crate::model::IndicatorSeries;

pub fn ema(values: &[f64], window: usize) -> Result<IndicatorSeries, IndicatorError> {
    check_window(window, values.len())?;
    let values: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    Ok(ema_over(&values, window))
}

/// EMA over a series with a leading undefined region.
///
/// Leading `None`s are skipped. Seeding needs `window` consecutive defined
/// values; if they never occur the whole output is undefined. An undefined
/// input after seeding yields `None` and leaves the running value untouched.
pub(crate) fn ema_over(values: &[Option<f64>], window: usize) -> IndicatorSeries {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return IndicatorSeries::new(out);
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let mut seed_sum = 0.0;
    let mut seed_count = 0;
    let mut current: Option<f64> = None;

    for (i, value) in values.iter().enumerate() {
        match (current, value) {
            (Some(prev), Some(x)) => {
                let next = alpha * x + (1.0 - alpha) * prev;
                current = Some(next);
                out[i] = Some(next);
            }
            (Some(_), None) => {}
            (None, Some(x)) => {
                seed_sum += x;
                seed_count += 1;
                if seed_count == window {
                    let seed = seed_sum / window as f64;
                    current = Some(seed);
                    out[i] = Some(seed);
                }
            }
            (None, None) => {
                // a gap inside the seed run restarts it
                seed_sum = 0.0;
                seed_count = 0;
            }
        }
    }

    IndicatorSeries::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_seeded_by_sma() {
        // window 3, alpha 0.5; seed = mean(10, 11, 12) = 11
        let out = ema(&[10.0, 11.0, 12.0, 13.0, 9.0], 3).unwrap();
        assert_eq!(out.get(0), None);
        assert_eq!(out.get(1), None);
        assert!((out.get(2).unwrap() - 11.0).abs() < 1e-12);
        // 0.5*13 + 0.5*11 = 12
        assert!((out.get(3).unwrap() - 12.0).abs() < 1e-12);
        // 0.5*9 + 0.5*12 = 10.5
        assert!((out.get(4).unwrap() - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_ema_over_leading_gap() {
        let values = [None, None, Some(2.0), Some(4.0), Some(6.0)];
        let out = ema_over(&values, 2);
        assert_eq!(out.values(), &[None, None, None, Some(3.0), Some(5.0)]);
    }

    #[test]
    fn test_ema_over_not_enough_values() {
        let values = [None, Some(1.0), Some(2.0)];
        assert_eq!(ema_over(&values, 3).first_defined(), None);
    }

    #[test]
    fn test_ema_window_checks() {
        assert_eq!(ema(&[1.0], 0), Err(IndicatorError::ZeroWindow));
        assert!(ema(&[1.0, 2.0], 3).is_err());
    }
}
