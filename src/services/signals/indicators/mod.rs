//! Technical indicator implementations.
//!
//! Every indicator consumes the full aligned [`PriceSeries`] and returns
//! series of exactly the input length, with a fixed warm-up prefix of
//! undefined slots.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod obv;
pub mod pivot;
pub mod rsi;
pub mod rvol;
pub mod sma;
pub mod stochastic;

pub use adx::{Adx, AdxSeries};
pub use atr::Atr;
pub use bollinger::{BollingerBands, BollingerSeries};
pub use ema::Ema;
pub use macd::{Macd, MacdSeries};
pub use obv::Obv;
pub use pivot::pivot_points;
pub use rsi::Rsi;
pub use rvol::Rvol;
pub use sma::Sma;
pub use stochastic::{Stochastic, StochasticSeries};

use crate::types::PriceSeries;

/// Trait for implementing technical indicators.
pub trait Indicator {
    /// Series (or group of series) produced.
    type Output;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Number of leading bars without a defined value in the primary output.
    fn warmup(&self) -> usize;

    /// Calculate the indicator over the whole price history.
    fn calculate(&self, prices: &PriceSeries) -> Self::Output;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::PriceSeries;

    /// Steady uptrend with a one-point body and wicks on both sides.
    pub fn uptrend(count: usize) -> PriceSeries {
        let mut prices = PriceSeries::default();
        for i in 0..count {
            let base = 100.0 + i as f64 * 1.5;
            prices.closes.push(base + 1.0);
            prices.highs.push(base + 2.0);
            prices.lows.push(base - 1.0);
            prices.volumes.push(1000.0);
        }
        prices
    }

    /// Mirror image of [`uptrend`].
    pub fn downtrend(count: usize) -> PriceSeries {
        let mut prices = PriceSeries::default();
        for i in 0..count {
            let base = 200.0 - i as f64 * 1.5;
            prices.closes.push(base - 1.0);
            prices.highs.push(base + 1.0);
            prices.lows.push(base - 2.0);
            prices.volumes.push(1000.0);
        }
        prices
    }

    /// Every bar identical.
    pub fn flat(count: usize, price: f64, volume: f64) -> PriceSeries {
        PriceSeries {
            closes: vec![price; count],
            highs: vec![price; count],
            lows: vec![price; count],
            volumes: vec![volume; count],
        }
    }

    /// Deterministic zig-zag around 100 with varying range and volume.
    pub fn choppy(count: usize) -> PriceSeries {
        let mut prices = PriceSeries::default();
        for i in 0..count {
            let swing = ((i * 7) % 11) as f64 - 5.0;
            let close = 100.0 + swing;
            prices.closes.push(close);
            prices.highs.push(close + 1.0 + (i % 3) as f64);
            prices.lows.push(close - 1.0 - (i % 4) as f64 * 0.5);
            prices.volumes.push(1000.0 + ((i * 13) % 17) as f64 * 100.0);
        }
        prices
    }
}
