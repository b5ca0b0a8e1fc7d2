//! One fetch-compute pass per call

use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::MarketDataSource;
use crate::config::DashboardConfig;
use crate::engine::compute_pass;
use crate::error::{DashboardError, FetchError, Result};
use crate::model::OhlcvSeries;
use crate::params::ParameterSet;
use crate::render::RenderModel;

/// Fetches data for a Parameter Set and renders it.
///
/// Nothing is cached between calls: every [`render`](Self::render) refetches
/// and recomputes from scratch, and fetches run one after another.
pub struct Dashboard<S> {
    source: S,
    config: Arc<DashboardConfig>,
}

impl<S: MarketDataSource> Dashboard<S> {
    pub fn new(source: S, config: Arc<DashboardConfig>) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Run one complete pass.
    ///
    /// Errors are typed so the caller can show a message per kind; nothing is
    /// retried.
    pub async fn render(&self, params: &ParameterSet) -> Result<RenderModel> {
        let pass_id = Uuid::new_v4();
        let span = tracing::info_span!("pass", %pass_id, symbol = %params.normalized_symbol());

        async {
            tracing::info!(period = %params.period, "Starting pass");
            let result = self.run(params).await;
            match &result {
                Ok(model) => tracing::info!(
                    bars = model.len(),
                    warnings = model.warnings.len(),
                    "Pass complete"
                ),
                Err(e) => tracing::info!(error = %e, "Pass stopped"),
            }
            result.map(|model| RenderModel {
                pass_id: Some(pass_id),
                ..model
            })
        }
        .instrument(span)
        .await
    }

    async fn run(&self, params: &ParameterSet) -> Result<RenderModel> {
        params.validate()?;
        let symbol = params.normalized_symbol();

        let primary = self
            .source
            .fetch(&symbol, params.period, params.interval)
            .await
            .map_err(DashboardError::from_fetch)?;

        if primary.is_empty() {
            return Err(DashboardError::NoData { symbol });
        }

        let mut comparisons = Vec::new();
        for comparison in params.normalized_comparisons() {
            let series = match self
                .source
                .fetch(&comparison, params.period, params.interval)
                .await
            {
                Ok(series) => series,
                Err(FetchError::NotFound { .. }) => OhlcvSeries::empty(&comparison),
                Err(e) => return Err(DashboardError::Unhandled(e.to_string())),
            };
            comparisons.push(series);
        }

        compute_pass(params, &primary, &comparisons, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMarketDataSource;
    use crate::model::bar::fixtures::{series_from_closes, walk};
    use mockall::predicate::eq;

    fn dashboard(source: MockMarketDataSource) -> Dashboard<MockMarketDataSource> {
        Dashboard::new(source, Arc::new(DashboardConfig::default()))
    }

    #[tokio::test]
    async fn test_empty_series_short_circuits() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch()
            .with(eq("ZZZZ"), mockall::predicate::always(), mockall::predicate::always())
            .times(1)
            .returning(|symbol, _, _| Ok(OhlcvSeries::empty(symbol)));

        let params = ParameterSet {
            comparisons: vec!["SPY".to_string()],
            ..ParameterSet::for_symbol("ZZZZ")
        };
        let err = dashboard(source).render(&params).await.unwrap_err();

        // the SPY fetch never happens: times(1) above would fail otherwise
        assert!(matches!(err, DashboardError::NoData { ref symbol } if symbol == "ZZZZ"));
        assert_eq!(err.user_message(), "No data found for ZZZZ");
    }

    #[tokio::test]
    async fn test_not_found_is_no_data() {
        let mut source = MockMarketDataSource::new();
        source.expect_fetch().returning(|symbol, _, _| {
            Err(FetchError::NotFound {
                symbol: symbol.to_string(),
            })
        });

        let err = dashboard(source)
            .render(&ParameterSet::for_symbol("zzzz"))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::NoData { .. }));
    }

    #[tokio::test]
    async fn test_transient_failure_is_unhandled() {
        let mut source = MockMarketDataSource::new();
        source.expect_fetch().returning(|symbol, _, _| {
            Err(FetchError::Transient {
                symbol: symbol.to_string(),
                reason: "connection reset".to_string(),
            })
        });

        let err = dashboard(source)
            .render(&ParameterSet::default())
            .await
            .unwrap_err();
        assert!(err.user_message().starts_with("An error occurred"));
        assert!(err.user_message().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_invalid_params_never_fetch() {
        let mut source = MockMarketDataSource::new();
        source.expect_fetch().never();

        let params = ParameterSet {
            bollinger_std_dev: 4.5,
            ..ParameterSet::default()
        };
        let err = dashboard(source).render(&params).await.unwrap_err();
        assert!(matches!(err, DashboardError::InvalidParameters(_)));
    }

    #[tokio::test]
    async fn test_full_pass_with_comparison() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch()
            .returning(|symbol, _, _| Ok(series_from_closes(symbol, &walk(100))));

        let params = ParameterSet {
            comparisons: vec!["spy".to_string()],
            ..ParameterSet::for_symbol("aapl")
        };
        let model = dashboard(source).render(&params).await.unwrap();

        assert_eq!(model.symbol, "AAPL");
        assert!(model.pass_id.is_some());
        let chart = model.comparison.unwrap();
        assert_eq!(chart.series("SPY").unwrap().values.len(), 100);
    }

    #[tokio::test]
    async fn test_missing_comparison_is_skipped() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_fetch()
            .with(eq("AAPL"), mockall::predicate::always(), mockall::predicate::always())
            .returning(|symbol, _, _| Ok(series_from_closes(symbol, &walk(40))));
        source
            .expect_fetch()
            .with(eq("DIA"), mockall::predicate::always(), mockall::predicate::always())
            .returning(|symbol, _, _| {
                Err(FetchError::NotFound {
                    symbol: symbol.to_string(),
                })
            });

        let params = ParameterSet {
            comparisons: vec!["DIA".to_string()],
            ..ParameterSet::default()
        };
        let model = dashboard(source).render(&params).await.unwrap();
        let chart = model.comparison.unwrap();
        assert!(chart.series("DIA").is_none());
        assert!(model.warnings.iter().any(|w| w.contains("DIA")));
    }
}
