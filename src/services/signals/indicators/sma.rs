//! Simple Moving Average (SMA) indicator.

use super::Indicator;
use crate::services::signals::math::{moving_average, Series};
use crate::types::PriceSeries;

/// SMA (Simple Moving Average) of closing prices.
///
/// Price above the SMA reads as a short-term uptrend, below as a downtrend.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = Series;

    fn name(&self) -> &'static str {
        match self.period {
            5 => "SMA (5)",
            _ => "SMA",
        }
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> Series {
        moving_average(&prices.closes, self.period)
    }
}
