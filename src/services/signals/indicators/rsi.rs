//! Relative Strength Index (RSI) indicator.

use super::Indicator;
use crate::services::signals::math::{moving_average, Series};
use crate::types::PriceSeries;

/// Relative strength used when the average loss is zero.
const NO_LOSS_RS: f64 = 100.0;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold (potential buy signal)
/// - Above 70: Overbought (potential sell signal)
///
/// Gains and losses are averaged with a plain SMA, not Wilder smoothing.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// RSI from one window's average gain and average loss.
    ///
    /// A window with no movement at all is neutral (50).
    pub fn from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_gain == 0.0 && avg_loss == 0.0 {
            return 50.0;
        }

        let rs = if avg_loss == 0.0 {
            NO_LOSS_RS
        } else {
            avg_gain / avg_loss
        };
        100.0 - (100.0 / (1.0 + rs))
    }
}

impl Indicator for Rsi {
    type Output = Series;

    fn name(&self) -> &'static str {
        "RSI (14)"
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn calculate(&self, prices: &PriceSeries) -> Series {
        let closes = &prices.closes;
        if closes.is_empty() {
            return Vec::new();
        }

        let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
        let gains: Vec<f64> = changes.iter().map(|c| c.max(0.0)).collect();
        let losses: Vec<f64> = changes.iter().map(|c| (-c).max(0.0)).collect();

        let avg_gains = moving_average(&gains, self.period);
        let avg_losses = moving_average(&losses, self.period);

        // Changes start at the second bar, so the first slot has no RSI.
        let mut result = Vec::with_capacity(closes.len());
        result.push(None);
        result.extend(avg_gains.iter().zip(&avg_losses).map(|pair| match pair {
            (Some(gain), Some(loss)) => Some(Self::from_averages(*gain, *loss)),
            _ => None,
        }));
        result
    }
}
