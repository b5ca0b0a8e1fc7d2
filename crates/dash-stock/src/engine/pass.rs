//! Pure fetch-free half of a pass: series in, render model out

use crate::config::DashboardConfig;
use crate::engine::IndicatorSet;
use crate::error::{DashboardError, Result};
use crate::indicators::{align_comparison, normalize};
use crate::model::{IndicatorSeries, OhlcvSeries};
use crate::params::ParameterSet;
use crate::render::{
    Histogram, LineChart, LineSeries, PriceTab, ReferenceLine, RenderModel, SummaryMetrics,
    TechnicalTab, VolatilityTab,
};

/// RSI guide lines
const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;

/// Build the render model for already-fetched series.
///
/// `comparisons` holds one series per requested comparison symbol; an empty
/// one is dropped from the chart with a warning. An empty `primary` stops the
/// pass with [`DashboardError::NoData`] before any indicator runs.
pub fn compute_pass(
    params: &ParameterSet,
    primary: &OhlcvSeries,
    comparisons: &[OhlcvSeries],
    config: &DashboardConfig,
) -> Result<RenderModel> {
    params.validate()?;
    let symbol = params.normalized_symbol();

    if primary.is_empty() {
        return Err(DashboardError::NoData { symbol });
    }

    let mut warnings = Vec::new();
    let indicators = IndicatorSet::compute(primary, params, config, &mut warnings)?;

    let price = price_tab(primary, &indicators);
    let technical = technical_tab(&indicators);
    let volatility = volatility_tab(&indicators, config);
    let comparison = if params.comparisons.is_empty() {
        None
    } else {
        Some(comparison_chart(primary, comparisons, config, &mut warnings)?)
    };

    Ok(RenderModel {
        pass_id: None,
        symbol,
        params: params.clone(),
        timestamps: primary.timestamps(),
        price,
        technical,
        volatility,
        comparison,
        warnings,
    })
}

fn price_tab(primary: &OhlcvSeries, indicators: &IndicatorSet) -> PriceTab {
    let mut overlays: Vec<LineSeries> = indicators
        .moving_averages
        .iter()
        .map(|ma| LineSeries::solid(ma.label(), ma.values.clone()))
        .collect();
    overlays.push(LineSeries::dashed("BB Upper", indicators.bollinger.upper.clone()));
    overlays.push(LineSeries::dashed("BB Lower", indicators.bollinger.lower.clone()));

    let metrics = SummaryMetrics::new(
        primary.first().map(|b| b.close),
        primary.last().map(|b| b.close),
        indicators.volatility.last(),
        indicators.rsi.last(),
        indicators.atr.last(),
    );

    PriceTab {
        candles: primary.bars().to_vec(),
        overlays,
        metrics,
    }
}

fn technical_tab(indicators: &IndicatorSet) -> TechnicalTab {
    let rsi = LineChart::new("RSI")
        .with_series(LineSeries::solid("RSI", indicators.rsi.clone()))
        .with_reference(ReferenceLine::horizontal(RSI_OVERBOUGHT))
        .with_reference(ReferenceLine::horizontal(RSI_OVERSOLD));

    let macd = LineChart::new("MACD")
        .with_series(LineSeries::solid("MACD", indicators.macd.macd.clone()))
        .with_series(LineSeries::solid("Signal", indicators.macd.signal.clone()));

    TechnicalTab { rsi, macd }
}

fn volatility_tab(indicators: &IndicatorSet, config: &DashboardConfig) -> VolatilityTab {
    let volatility = LineChart::new("Volatility")
        .with_series(LineSeries::solid("Volatility", indicators.volatility.clone()));

    let returns: Vec<f64> = indicators.daily_returns.defined().collect();
    let returns = Histogram::from_values("Daily_Return", &returns, config.histogram_bins);

    VolatilityTab {
        volatility,
        returns,
    }
}

fn comparison_chart(
    primary: &OhlcvSeries,
    comparisons: &[OhlcvSeries],
    config: &DashboardConfig,
    warnings: &mut Vec<String>,
) -> Result<LineChart> {
    let base: IndicatorSeries = normalize(&primary.closes())?.into_iter().map(Some).collect();
    let mut chart = LineChart::new("Comparison").with_series(LineSeries::solid("Base", base));

    for comparison in comparisons {
        if comparison.is_empty() {
            tracing::warn!(symbol = comparison.symbol(), "No comparison data, skipped");
            warnings.push(format!(
                "No data found for {}, left out of the comparison",
                comparison.symbol()
            ));
            continue;
        }

        let aligned = align_comparison(primary, comparison, config.comparison_alignment)?;
        if aligned.first_defined().is_none() {
            warnings.push(format!(
                "{} shares no dates with {}",
                comparison.symbol(),
                primary.symbol()
            ));
        }
        chart = chart.with_series(LineSeries::solid(comparison.symbol(), aligned));
    }

    Ok(chart)
}
