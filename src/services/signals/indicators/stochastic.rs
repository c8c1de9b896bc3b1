//! Stochastic Oscillator indicator.

use super::Indicator;
use crate::services::signals::math::{moving_average, Padded, Series};
use crate::types::PriceSeries;

/// Stochastic Oscillator.
///
/// Compares closing price to price range over a period:
/// raw %K = (Current Close - Lowest Low) / (Highest High - Lowest Low) * 100
///
/// %K is the SMA(3) of raw %K and %D the SMA(3) of %K. A window with no
/// range reads 50.
///
/// Signals:
/// - Below 20: Oversold (bullish)
/// - Above 80: Overbought (bearish)
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
    smooth_k: usize,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
            smooth_k: 3,
        }
    }
}

impl Stochastic {
    pub fn new(k_period: usize, d_period: usize, smooth_k: usize) -> Self {
        Self {
            k_period,
            d_period,
            smooth_k,
        }
    }

    fn raw_k(&self, prices: &PriceSeries) -> Series {
        let PriceSeries {
            closes,
            highs,
            lows,
            ..
        } = prices;

        (0..closes.len())
            .map(|i| {
                if self.k_period == 0 || i + 1 < self.k_period {
                    return None;
                }

                let start = i + 1 - self.k_period;
                let highest_high = highs[start..=i]
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max);
                let lowest_low = lows[start..=i].iter().copied().fold(f64::INFINITY, f64::min);

                let range = highest_high - lowest_low;
                Some(if range == 0.0 {
                    50.0
                } else {
                    (closes[i] - lowest_low) / range * 100.0
                })
            })
            .collect()
    }
}

/// Smoothed %K and %D, both full length.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticSeries {
    pub k: Series,
    pub d: Series,
}

impl Indicator for Stochastic {
    type Output = StochasticSeries;

    fn name(&self) -> &'static str {
        "Stochastic"
    }

    /// Warm-up of the smoothed %K line.
    fn warmup(&self) -> usize {
        self.k_period.saturating_sub(1) + self.smooth_k.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> StochasticSeries {
        let raw = self.raw_k(prices);
        let k = Padded::split(&raw).apply(|values| moving_average(values, self.smooth_k));
        let d = Padded::split(&k).apply(|values| moving_average(values, self.d_period));

        StochasticSeries { k, d }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_support::{choppy, downtrend, flat, uptrend};
    use crate::services::signals::math::{latest, warmup_len};

    #[test]
    fn test_stochastic_name_and_warmup() {
        let stoch = Stochastic::default();
        assert_eq!(stoch.name(), "Stochastic");
        assert_eq!(stoch.warmup(), 15);
    }

    #[test]
    fn test_stochastic_padding_lengths() {
        let result = Stochastic::default().calculate(&choppy(50));
        assert_eq!(result.k.len(), 50);
        assert_eq!(result.d.len(), 50);
        assert_eq!(warmup_len(&result.k), 15);
        assert_eq!(warmup_len(&result.d), 17);
    }

    #[test]
    fn test_stochastic_uptrend_high_k() {
        let value = latest(&Stochastic::default().calculate(&uptrend(30)).k).unwrap();
        assert!(value > 80.0, "Stochastic %K in uptrend should be > 80, got {}", value);
    }

    #[test]
    fn test_stochastic_downtrend_low_k() {
        let value = latest(&Stochastic::default().calculate(&downtrend(30)).k).unwrap();
        assert!(value < 20.0, "Stochastic %K in downtrend should be < 20, got {}", value);
    }

    #[test]
    fn test_stochastic_zero_range_reads_fifty() {
        let result = Stochastic::default().calculate(&flat(30, 10.0, 1.0));
        assert_eq!(latest(&result.k), Some(50.0));
        assert_eq!(latest(&result.d), Some(50.0));
    }

    #[test]
    fn test_stochastic_value_range() {
        let result = Stochastic::new(5, 3, 3).calculate(&choppy(60));
        assert!(result.k.iter().flatten().all(|v| (0.0..=100.0).contains(v)));
        assert!(result.d.iter().flatten().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_stochastic_short_history() {
        let result = Stochastic::default().calculate(&uptrend(10));
        assert_eq!(result.k.len(), 10);
        assert!(result.d.iter().all(Option::is_none));
    }
}
