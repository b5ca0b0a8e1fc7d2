//! Equal-width histogram with a mean marker

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub title: String,
    pub bins: Vec<HistogramBin>,
    /// Position of the vertical mean marker
    pub mean: Option<f64>,
}

impl Histogram {
    /// Bucket `values` into `bin_count` equal-width bins spanning min..=max.
    ///
    /// The last bin is closed on the right. A degenerate range collapses to a
    /// single bin.
    pub fn from_values(title: impl Into<String>, values: &[f64], bin_count: usize) -> Self {
        let title = title.into();
        let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        if values.is_empty() || bin_count == 0 {
            return Self {
                title,
                bins: Vec::new(),
                mean: None,
            };
        }

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max <= min {
            return Self {
                title,
                bins: vec![HistogramBin {
                    start: min,
                    end: max,
                    count: values.len(),
                }],
                mean: Some(mean),
            };
        }

        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                start: min + width * i as f64,
                end: if i + 1 == bin_count {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for v in &values {
            let index = (((v - min) / width).floor() as usize).min(bin_count - 1);
            bins[index].count += 1;
        }

        Self {
            title,
            bins,
            mean: Some(mean),
        }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_value() {
        let values: Vec<f64> = (0..100).map(|i| f64::from(i) / 100.0 - 0.5).collect();
        let hist = Histogram::from_values("Daily Return", &values, 50);
        assert_eq!(hist.bins.len(), 50);
        assert_eq!(hist.total(), 100);
        assert_eq!(hist.bins.last().unwrap().end, values[99]);
        assert!((hist.mean.unwrap() + 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let hist = Histogram::from_values("r", &[0.0, 1.0], 4);
        assert_eq!(hist.bins[0].count, 1);
        assert_eq!(hist.bins[3].count, 1);
    }

    #[test]
    fn test_degenerate_inputs() {
        let hist = Histogram::from_values("r", &[], 50);
        assert!(hist.bins.is_empty());
        assert_eq!(hist.mean, None);

        let hist = Histogram::from_values("r", &[0.01, 0.01, 0.01], 50);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.total(), 3);
    }
}
