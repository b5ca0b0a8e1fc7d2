//! Every indicator the dashboard shows, computed in one go

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::error::IndicatorError;
use crate::indicators::{
    BollingerOutput, MacdOutput, average_true_range, bollinger_bands, daily_returns, macd,
    realized_volatility, rsi, sma,
};
use crate::model::{IndicatorSeries, OhlcvSeries};
use crate::params::ParameterSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverage {
    pub window: usize,
    pub values: IndicatorSeries,
}

impl MovingAverage {
    pub fn label(&self) -> String {
        format!("MA_{}", self.window)
    }
}

/// Derived series for one OHLCV series, all aligned with its index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub moving_averages: Vec<MovingAverage>,
    pub bollinger: BollingerOutput,
    pub atr: IndicatorSeries,
    pub rsi: IndicatorSeries,
    pub macd: MacdOutput,
    pub daily_returns: IndicatorSeries,
    pub volatility: IndicatorSeries,
}

impl IndicatorSet {
    /// Compute every indicator for `series`.
    ///
    /// A window longer than the series leaves that indicator undefined and
    /// adds a line to `warnings`; any other precondition failure aborts.
    pub fn compute(
        series: &OhlcvSeries,
        params: &ParameterSet,
        config: &DashboardConfig,
        warnings: &mut Vec<String>,
    ) -> Result<Self, IndicatorError> {
        let len = series.len();
        if len == 0 {
            return Err(IndicatorError::InsufficientData { window: 1, len: 0 });
        }

        let closes = series.closes();
        let undefined = || IndicatorSeries::undefined(len);

        let moving_averages = params
            .moving_averages
            .iter()
            .map(|&window| {
                let label = format!("MA_{window}");
                let values = warm_up_only(sma(&closes, window), &label, warnings, undefined)?;
                Ok(MovingAverage { window, values })
            })
            .collect::<Result<Vec<_>, IndicatorError>>()?;

        let bollinger = warm_up_only(
            bollinger_bands(&closes, params.bollinger_window, params.bollinger_std_dev),
            "Bollinger Bands",
            warnings,
            || BollingerOutput {
                middle: undefined(),
                upper: undefined(),
                lower: undefined(),
            },
        )?;

        let atr = warm_up_only(
            average_true_range(series.bars(), config.atr_window, config.atr_smoothing),
            "ATR",
            warnings,
            undefined,
        )?;

        let rsi = warm_up_only(rsi(&closes, params.rsi_window), "RSI", warnings, undefined)?;

        let macd = warm_up_only(
            macd(&closes, params.macd_fast, params.macd_slow, config.macd_signal_window),
            "MACD",
            warnings,
            || MacdOutput {
                macd: undefined(),
                signal: undefined(),
                histogram: undefined(),
            },
        )?;

        let daily_returns = daily_returns(&closes);
        let volatility = warm_up_only(
            realized_volatility(
                &daily_returns,
                params.volatility_window,
                config.trading_days_per_year,
            ),
            "Volatility",
            warnings,
            undefined,
        )?;

        tracing::debug!(
            symbol = series.symbol(),
            bars = len,
            moving_averages = moving_averages.len(),
            "Indicators computed"
        );

        Ok(Self {
            moving_averages,
            bollinger,
            atr,
            rsi,
            macd,
            daily_returns,
            volatility,
        })
    }
}

/// Turn "not enough bars" into an all-undefined result plus a warning
fn warm_up_only<T>(
    result: Result<T, IndicatorError>,
    label: &str,
    warnings: &mut Vec<String>,
    fallback: impl FnOnce() -> T,
) -> Result<T, IndicatorError> {
    match result {
        Err(IndicatorError::InsufficientData { window, len }) => {
            tracing::warn!(
                indicator = label,
                window,
                len,
                "Not enough data, series left undefined"
            );
            warnings.push(format!(
                "{label} needs {window} bars but only {len} are available"
            ));
            Ok(fallback())
        }
        other => other,
    }
}
