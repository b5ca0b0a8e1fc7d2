//! Line charts over the shared timestamp axis

use serde::{Deserialize, Serialize};

use crate::model::IndicatorSeries;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub style: LineStyle,
    pub values: IndicatorSeries,
}

impl LineSeries {
    pub fn solid(name: impl Into<String>, values: IndicatorSeries) -> Self {
        Self {
            name: name.into(),
            style: LineStyle::Solid,
            values,
        }
    }

    pub fn dashed(name: impl Into<String>, values: IndicatorSeries) -> Self {
        Self {
            name: name.into(),
            style: LineStyle::Dash,
            values,
        }
    }
}

/// Fixed guide line, horizontal unless `vertical` is set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub value: f64,
    pub vertical: bool,
    pub style: LineStyle,
}

impl ReferenceLine {
    pub fn horizontal(value: f64) -> Self {
        Self {
            value,
            vertical: false,
            style: LineStyle::Dash,
        }
    }

    pub fn vertical(value: f64) -> Self {
        Self {
            value,
            vertical: true,
            style: LineStyle::Solid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub series: Vec<LineSeries>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            reference_lines: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: LineSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_reference(mut self, line: ReferenceLine) -> Self {
        self.reference_lines.push(line);
        self
    }

    pub fn series(&self, name: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}
