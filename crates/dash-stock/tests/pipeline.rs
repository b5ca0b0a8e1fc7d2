//! End-to-end passes through the public API with a mocked data source

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use dash_stock::{
    Bar, ComparisonAlignment, Dashboard, DashboardConfig, DashboardError, FetchError, Interval,
    MarketDataSource, OhlcvSeries, ParameterSet, Period,
};
use mockall::mock;
use std::sync::Arc;

mock! {
    Source {}

    #[async_trait]
    impl MarketDataSource for Source {
        async fn fetch(
            &self,
            symbol: &str,
            period: Period,
            interval: Interval,
        ) -> Result<OhlcvSeries, FetchError>;
    }
}

/// Daily bars starting on `start_day` days after 2024-01-01
fn series(symbol: &str, closes: &[f64], start_day: i64) -> OhlcvSeries {
    let origin = Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            timestamp: origin + Duration::days(start_day + i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000,
        })
        .collect();
    OhlcvSeries::new(symbol, bars)
}

fn closes(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let x = i as f64;
            50.0 + 0.5 * x + 3.0 * (0.4 * x).sin()
        })
        .collect()
}

#[tokio::test]
async fn test_unknown_symbol_reports_no_data() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .times(1)
        .returning(|symbol, _, _| Ok(OhlcvSeries::empty(symbol)));

    let dashboard = Dashboard::new(source, Arc::new(DashboardConfig::default()));
    let err = dashboard
        .render(&ParameterSet::for_symbol("ZZZZ"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "No data found for ZZZZ");
}

#[tokio::test]
async fn test_period_and_interval_are_forwarded() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .withf(|symbol, period, interval| {
            symbol == "MSFT" && *period == Period::SixMonths && *interval == Interval::Daily
        })
        .times(1)
        .returning(|symbol, _, _| Ok(series(symbol, &closes(120), 0)));

    let params = ParameterSet {
        period: Period::SixMonths,
        ..ParameterSet::for_symbol("msft")
    };
    let dashboard = Dashboard::new(source, Arc::new(DashboardConfig::default()));
    let model = dashboard.render(&params).await.unwrap();

    assert_eq!(model.len(), 120);
    assert!(model.warnings.is_empty());
    let rsi = model.technical.rsi.series("RSI").unwrap();
    assert!(rsi.values.defined().all(|v| (0.0..=100.0).contains(&v)));
}

#[tokio::test]
async fn test_long_window_overlay_warns_instead_of_failing() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .returning(|symbol, _, _| Ok(series(symbol, &closes(30), 0)));

    let params = ParameterSet {
        moving_averages: vec![5, 200],
        ..ParameterSet::default()
    };
    let dashboard = Dashboard::new(source, Arc::new(DashboardConfig::default()));
    let model = dashboard.render(&params).await.unwrap();

    let ma_200 = model
        .price
        .overlays
        .iter()
        .find(|s| s.name == "MA_200")
        .unwrap();
    assert_eq!(ma_200.values.len(), 30);
    assert_eq!(ma_200.values.defined().count(), 0);
    assert!(model.warnings.iter().any(|w| w.contains("MA_200")));
}

#[tokio::test]
async fn test_timestamp_alignment_rebases_at_first_shared_date() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .withf(|symbol, _, _| symbol == "AAPL")
        .returning(|symbol, _, _| Ok(series(symbol, &closes(60), 0)));
    // SPY starts ten days later than the primary series
    source
        .expect_fetch()
        .withf(|symbol, _, _| symbol == "SPY")
        .returning(|symbol, _, _| Ok(series(symbol, &closes(50), 10)));

    let config = DashboardConfig::builder()
        .comparison_alignment(ComparisonAlignment::Timestamp)
        .build()
        .unwrap();
    let params = ParameterSet {
        comparisons: vec!["SPY".to_string()],
        ..ParameterSet::default()
    };
    let dashboard = Dashboard::new(source, Arc::new(config));
    let model = dashboard.render(&params).await.unwrap();

    let spy = model.comparison.unwrap().series("SPY").unwrap().values.clone();
    assert_eq!(spy.len(), 60);
    assert_eq!(spy.first_defined(), Some(10));
    assert_eq!(spy.get(10), Some(0.0));
}

#[tokio::test]
async fn test_rate_limited_comparison_fails_the_pass() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .withf(|symbol, _, _| symbol == "AAPL")
        .returning(|symbol, _, _| Ok(series(symbol, &closes(60), 0)));
    source
        .expect_fetch()
        .withf(|symbol, _, _| symbol == "QQQ")
        .returning(|_, _, _| {
            Err(FetchError::RateLimited {
                provider: "yahoo".to_string(),
            })
        });

    let params = ParameterSet {
        comparisons: vec!["QQQ".to_string()],
        ..ParameterSet::default()
    };
    let dashboard = Dashboard::new(source, Arc::new(DashboardConfig::default()));
    let err = dashboard.render(&params).await.unwrap_err();

    assert!(matches!(err, DashboardError::Unhandled(_)));
    assert!(err.user_message().contains("Rate limit"));
}
