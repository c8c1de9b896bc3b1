//! Stockscan - technical analysis of daily stock candles

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use error::{AnalysisError, AppError, Result};
pub use services::signals::{
    calculate_score, detect_patterns, generate_recommendation, generate_tips, Analyzer,
    MIN_CANDLES,
};
pub use types::*;
