use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    /// Absolute size of the real body.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full high-low range.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Distance from the bottom of the body down to the low.
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    /// Distance from the top of the body up to the high.
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// First field that is negative or not finite, if any.
    fn invalid_field(&self) -> Option<(&'static str, f64)> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    }
}

/// Reject a series that is not usable as a whole.
///
/// Bars are never skipped: dropping one would shift every indicator array
/// against the others.
pub fn validate_candles(candles: &[Candle]) -> Result<(), AnalysisError> {
    for (index, candle) in candles.iter().enumerate() {
        if let Some((field, value)) = candle.invalid_field() {
            return Err(AnalysisError::InvalidCandle {
                index,
                reason: format!("{} is {}", field, value),
            });
        }

        if index > 0 && candle.timestamp <= candles[index - 1].timestamp {
            return Err(AnalysisError::InvalidCandle {
                index,
                reason: format!(
                    "timestamp {} does not follow {}",
                    candle.timestamp,
                    candles[index - 1].timestamp
                ),
            });
        }
    }

    Ok(())
}

/// Column-oriented view of a candle series, oldest first.
///
/// Every column has the same length as the source series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

impl From<&[Candle]> for PriceSeries {
    fn from(candles: &[Candle]) -> Self {
        Self {
            closes: candles.iter().map(|c| c.close).collect(),
            highs: candles.iter().map(|c| c.high).collect(),
            lows: candles.iter().map(|c| c.low).collect(),
            volumes: candles.iter().map(|c| c.volume as f64).collect(),
        }
    }
}
