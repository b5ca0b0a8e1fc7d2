//! Command-line interface for the stock dashboard
//!
//! Runs a single pass for the given Parameter Set and prints the summary
//! metrics, the latest indicator values and any warnings. `--json` prints the
//! whole render model instead.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use comfy_table::{Table, presets::UTF8_FULL};
use dash_stock::render::LineSeries;
use dash_stock::{
    ComparisonAlignment, Dashboard, DashboardConfig, DashboardError, Interval, ParameterSet,
    Period, RenderModel, YahooFinanceClient,
};
use dash_utils::LogFormat;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stock-dash")]
#[command(about = "Technical indicator dashboard for a single stock", long_about = None)]
struct Args {
    /// Ticker symbol
    #[arg(default_value = "AAPL")]
    symbol: String,

    /// History to fetch: 1mo, 3mo, 6mo, 1y, 2y, 5y or max
    #[arg(short, long, default_value = "1mo")]
    period: Period,

    /// Bar interval
    #[arg(long, default_value = "1d")]
    interval: Interval,

    /// Moving average windows (5, 10, 20, 50, 100, 200)
    #[arg(long = "ma", value_delimiter = ',', default_values_t = [20, 50])]
    moving_averages: Vec<usize>,

    /// Bollinger Bands window
    #[arg(long, default_value_t = 20)]
    bb_window: usize,

    /// Bollinger Bands width in standard deviations
    #[arg(long, default_value_t = 2.0)]
    bb_std: f64,

    /// Realized volatility window
    #[arg(long, default_value_t = 20)]
    vol_window: usize,

    /// RSI window
    #[arg(long, default_value_t = 14)]
    rsi_window: usize,

    /// MACD fast EMA window
    #[arg(long, default_value_t = 12)]
    macd_fast: usize,

    /// MACD slow EMA window
    #[arg(long, default_value_t = 26)]
    macd_slow: usize,

    /// Comparison symbols (SPY, QQQ, DIA)
    #[arg(long = "compare", value_delimiter = ',')]
    comparisons: Vec<String>,

    /// How comparison series are lined up: positional or timestamp
    #[arg(long)]
    align: Option<ComparisonAlignment>,

    /// Print the full render model as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn parameter_set(&self) -> ParameterSet {
        ParameterSet {
            symbol: self.symbol.clone(),
            period: self.period,
            interval: self.interval,
            moving_averages: self.moving_averages.clone(),
            bollinger_window: self.bb_window,
            bollinger_std_dev: self.bb_std,
            volatility_window: self.vol_window,
            rsi_window: self.rsi_window,
            macd_fast: self.macd_fast,
            macd_slow: self.macd_slow,
            comparisons: self.comparisons.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    dash_utils::init_tracing(format);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<DashboardError>() {
            Some(err) => {
                eprintln!("{}", err.user_message());
                exit_code(err)
            }
            None => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let mut builder = DashboardConfig::builder();
    if let Some(alignment) = args.align {
        builder = builder.comparison_alignment(alignment);
    }
    let config = Arc::new(builder.with_env()?.build()?);

    let dashboard = Dashboard::new(YahooFinanceClient::from_config(&config), config);
    let model = dashboard.render(&args.parameter_set()).await?;

    info!(symbol = %model.symbol, bars = model.len(), "Rendering");

    if args.json {
        let json = model.to_json().context("Failed to serialize render model")?;
        println!("{json}");
    } else {
        print_summary(&model);
    }

    Ok(())
}

fn exit_code(err: &DashboardError) -> ExitCode {
    match err {
        DashboardError::InvalidParameters(_) | DashboardError::Config(_) => ExitCode::from(2),
        DashboardError::NoData { .. } => ExitCode::from(3),
        DashboardError::Computation(_) | DashboardError::Unhandled(_) => ExitCode::FAILURE,
    }
}

fn print_summary(model: &RenderModel) {
    let first = model.timestamps.first().map(|t| t.date_naive());
    let last = model.timestamps.last().map(|t| t.date_naive());
    if let (Some(first), Some(last)) = (first, last) {
        println!("{} {first} .. {last} ({} bars)", model.symbol, model.len());
    }

    let mut metrics = Table::new();
    metrics.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    for metric in model.price.metrics.iter() {
        metrics.add_row(vec![metric.label.clone(), metric.display.clone()]);
    }
    println!("{metrics}");

    let mut latest = Table::new();
    latest.load_preset(UTF8_FULL).set_header(vec!["Series", "Latest"]);
    let series = model
        .price
        .overlays
        .iter()
        .chain(&model.technical.rsi.series)
        .chain(&model.technical.macd.series)
        .chain(&model.volatility.volatility.series)
        .chain(model.comparison.iter().flat_map(|c| &c.series));
    for line in series {
        latest.add_row(vec![line.name.clone(), latest_value(line)]);
    }
    println!("{latest}");

    let returns = &model.volatility.returns;
    if let Some(mean) = returns.mean {
        println!(
            "Daily returns: {} observations, mean {:.3}%",
            returns.total(),
            mean * 100.0
        );
    }

    for warning in &model.warnings {
        println!("warning: {warning}");
    }
}

fn latest_value(line: &LineSeries) -> String {
    line.values
        .last()
        .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
