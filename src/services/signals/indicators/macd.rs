//! MACD (Moving Average Convergence Divergence) indicator.

use super::Indicator;
use crate::services::signals::math::{combine, exponential_moving_average, Padded, Series};
use crate::types::PriceSeries;

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of the defined part of the MACD Line
/// - Histogram = MACD Line - Signal Line
///
/// Buy signal: MACD above signal line
/// Sell signal: MACD at or below signal line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

/// MACD line, signal line and histogram, all full length.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

impl Indicator for Macd {
    type Output = MacdSeries;

    fn name(&self) -> &'static str {
        "MACD"
    }

    /// Warm-up of the signal line and histogram.
    fn warmup(&self) -> usize {
        let slowest = self.fast_period.max(self.slow_period);
        slowest.saturating_sub(1) + self.signal_period.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> MacdSeries {
        let fast = exponential_moving_average(&prices.closes, self.fast_period);
        let slow = exponential_moving_average(&prices.closes, self.slow_period);

        let macd = combine(&fast, &slow, |f, s| f - s);
        let signal = Padded::split(&macd)
            .apply(|values| exponential_moving_average(values, self.signal_period));
        let histogram = combine(&macd, &signal, |m, s| m - s);

        MacdSeries {
            macd,
            signal,
            histogram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_support::{choppy, downtrend, uptrend};
    use crate::services::signals::math::{latest, warmup_len};

    #[test]
    fn test_macd_warmups() {
        let macd = Macd::default();
        let result = macd.calculate(&choppy(100));
        assert_eq!(result.macd.len(), 100);
        assert_eq!(result.signal.len(), 100);
        assert_eq!(result.histogram.len(), 100);
        assert_eq!(warmup_len(&result.macd), 25);
        assert_eq!(warmup_len(&result.signal), 33);
        assert_eq!(warmup_len(&result.histogram), 33);
        assert_eq!(macd.warmup(), 33);
    }

    #[test]
    fn test_macd_signal_seed_is_average_of_first_defined_macd() {
        let result = Macd::default().calculate(&choppy(80));
        let first_nine: f64 = result.macd[25..34].iter().flatten().sum();
        let seed = result.signal[33].unwrap();
        assert!((seed - first_nine / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_macd_histogram_is_difference() {
        let result = Macd::default().calculate(&choppy(80));
        for i in 33..80 {
            let expected = result.macd[i].unwrap() - result.signal[i].unwrap();
            assert_eq!(result.histogram[i], Some(expected));
        }
    }

    #[test]
    fn test_macd_sign_follows_trend() {
        let up = Macd::default().calculate(&uptrend(80));
        assert!(latest(&up.macd).unwrap() > 0.0);

        let down = Macd::default().calculate(&downtrend(80));
        assert!(latest(&down.macd).unwrap() < 0.0);
    }

    #[test]
    fn test_macd_short_history_is_undefined() {
        let result = Macd::default().calculate(&uptrend(20));
        assert_eq!(result.signal.len(), 20);
        assert!(result.histogram.iter().all(Option::is_none));
    }
}
