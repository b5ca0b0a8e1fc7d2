//! Windowed statistics over possibly-undefined values

use crate::model::IndicatorSeries;

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with `ddof` delta degrees of freedom (0 = population, 1 = sample)
pub fn std_dev(values: &[f64], ddof: usize) -> f64 {
    if values.len() <= ddof {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (values.len() - ddof) as f64).sqrt()
}

/// Apply `f` to every trailing window of `window` values.
///
/// A slot is defined only when all `window` inputs ending at it are defined.
pub fn rolling_apply(
    values: &[Option<f64>],
    window: usize,
    f: impl Fn(&[f64]) -> f64,
) -> IndicatorSeries {
    let mut buf = Vec::with_capacity(window);
    (0..values.len())
        .map(|i| {
            if window == 0 || i + 1 < window {
                return None;
            }
            buf.clear();
            for v in &values[i + 1 - window..=i] {
                buf.push((*v)?);
            }
            Some(f(&buf)).filter(|v| v.is_finite())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_dev_population_and_sample() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values, 0) - 2.0).abs() < 1e-12);
        assert!((std_dev(&values, 1) - 2.138_089_935_299_395).abs() < 1e-12);
        assert!(std_dev(&[1.0], 1).is_nan());
    }

    #[test]
    fn test_rolling_apply_requires_full_window() {
        let values = [None, Some(1.0), Some(2.0), Some(3.0)];
        let out = rolling_apply(&values, 2, mean);
        assert_eq!(out.values(), &[None, None, Some(1.5), Some(2.5)]);
    }
}
