//! Error types for dashboard passes

use thiserror::Error;

/// Errors reported by a market data source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider has no data for this symbol
    #[error("Symbol not found: {symbol}")]
    NotFound { symbol: String },

    /// Network failure, timeout or malformed provider response
    #[error("Fetching {symbol} failed: {reason}")]
    Transient { symbol: String, reason: String },

    /// Local request quota exhausted
    #[error("Rate limit exceeded for {provider}")]
    RateLimited { provider: String },
}

impl FetchError {
    /// Whether the failure is worth retrying on a later pass
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

/// A parameter was outside its legal set or bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Symbol must not be empty")]
    EmptySymbol,

    #[error("Unsupported period: {0}")]
    UnsupportedPeriod(String),

    #[error("Unsupported interval: {0}")]
    UnsupportedInterval(String),

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name} must be a multiple of {step}, got {value}")]
    OffStep {
        name: &'static str,
        value: f64,
        step: f64,
    },

    #[error("Unsupported moving average window: {0}")]
    UnsupportedMovingAverage(usize),

    #[error("Unsupported comparison symbol: {0}")]
    UnsupportedComparison(String),

    #[error("Unsupported {name}: {value}")]
    UnsupportedOption { name: &'static str, value: String },
}

/// Indicator inputs violate a precondition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("Window must be greater than zero")]
    ZeroWindow,

    #[error("Window {window} exceeds series length {len}")]
    InsufficientData { window: usize, len: usize },

    #[error("Invalid indicator parameter: {0}")]
    InvalidParameter(String),
}

/// Errors produced by one fetch-compute pass
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Symbol returned an empty series
    #[error("No data found for {symbol}")]
    NoData { symbol: String },

    /// Parameter Set rejected before any fetch
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// Indicator precondition violated
    #[error("Computation failed: {0}")]
    Computation(#[from] IndicatorError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else: network failure, provider exception
    #[error("{0}")]
    Unhandled(String),
}

impl DashboardError {
    /// Message shown to the user for this error kind
    pub fn user_message(&self) -> String {
        match self {
            Self::NoData { symbol } => format!("No data found for {symbol}"),
            Self::InvalidParameters(e) => format!("Invalid parameters: {e}"),
            Self::Computation(e) => format!("Computation failed: {e}"),
            Self::Config(msg) => format!("Configuration error: {msg}"),
            Self::Unhandled(msg) => format!("An error occurred: {msg}"),
        }
    }

    /// Map a primary-symbol fetch failure into the pass taxonomy
    pub fn from_fetch(err: FetchError) -> Self {
        match err {
            FetchError::NotFound { symbol } => Self::NoData { symbol },
            other => Self::Unhandled(other.to_string()),
        }
    }
}

impl From<dash_utils::EnvError> for DashboardError {
    fn from(err: dash_utils::EnvError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
