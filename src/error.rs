use thiserror::Error;

/// Errors raised by the analysis core.
///
/// Numeric edge cases (flat windows, zero averages) are resolved with
/// fallback values inside the formulas and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Insufficient historical data: {actual} candles supplied, minimum {required} required")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid candle at index {index}: {reason}")]
    InvalidCandle { index: usize, reason: String },

    #[error("Indicator {name} has no value for the latest bar")]
    UndefinedIndicator { name: &'static str },
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
