//! Trading signals service module.
//!
//! Provides technical indicator calculations, candlestick pattern
//! detection, composite scoring and the resulting trade recommendation.

pub mod analyzer;
pub mod indicators;
pub mod math;
pub mod patterns;
pub mod recommendation;
pub mod scoring;
pub mod tips;

pub use analyzer::{Analyzer, MIN_CANDLES};
pub use indicators::Indicator;
pub use math::{Padded, Series};
pub use patterns::detect_patterns;
pub use recommendation::{generate_recommendation, risk_reward_ratio, suggested_actions};
pub use scoring::calculate_score;
pub use tips::generate_tips;
