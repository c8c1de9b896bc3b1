//! Bollinger Bands indicator.

use super::Indicator;
use crate::services::signals::math::{moving_average, Series};
use crate::types::PriceSeries;

/// Bollinger Bands.
///
/// Middle band = SMA(20), upper/lower = middle ± 2 sample standard deviations
/// of the same window (divisor `period - 1`).
/// - Price below lower band = oversold
/// - Price above upper band = overbought
/// - Narrow bandwidth = squeeze, a large move is likely
pub struct BollingerBands {
    period: usize,
    std_dev: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev: f64) -> Self {
        Self { period, std_dev }
    }

    /// Sample standard deviation of a window around a known mean.
    fn sample_std_dev(window: &[f64], mean: f64) -> f64 {
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (window.len() - 1) as f64;
        variance.sqrt()
    }
}

/// Upper, middle and lower bands, all full length.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

impl Indicator for BollingerBands {
    type Output = BollingerSeries;

    fn name(&self) -> &'static str {
        "Bollinger Bands"
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> BollingerSeries {
        let closes = &prices.closes;
        let middle = moving_average(closes, self.period);

        // A single-bar window has no sample deviation.
        if self.period < 2 {
            let undefined = vec![None; closes.len()];
            return BollingerSeries {
                upper: undefined.clone(),
                middle,
                lower: undefined,
            };
        }

        let (upper, lower): (Series, Series) = middle
            .iter()
            .enumerate()
            .map(|(i, mean)| match mean {
                Some(mean) => {
                    let window = &closes[i + 1 - self.period..=i];
                    let spread = self.std_dev * Self::sample_std_dev(window, *mean);
                    (Some(mean + spread), Some(mean - spread))
                }
                None => (None, None),
            })
            .unzip();

        BollingerSeries {
            upper,
            middle,
            lower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_support::{choppy, flat};
    use crate::services::signals::math::warmup_len;

    #[test]
    fn test_bollinger_length_and_warmup() {
        let bb = BollingerBands::default();
        let result = bb.calculate(&choppy(50));
        for series in [&result.upper, &result.middle, &result.lower] {
            assert_eq!(series.len(), 50);
            assert_eq!(warmup_len(series), bb.warmup());
        }
    }

    #[test]
    fn test_bollinger_width_uses_sample_std_dev() {
        let prices = choppy(40);
        let result = BollingerBands::default().calculate(&prices);

        for i in 19..40 {
            let window = &prices.closes[i - 19..=i];
            let mean = window.iter().sum::<f64>() / 20.0;
            let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 19.0;
            let width = result.upper[i].unwrap() - result.lower[i].unwrap();
            assert!((width - 2.0 * 2.0 * variance.sqrt()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bollinger_known_window() {
        let prices = PriceSeries {
            closes: vec![2.0, 4.0, 6.0],
            ..Default::default()
        };
        let result = BollingerBands::new(3, 2.0).calculate(&prices);
        // mean 4, sample variance (4 + 0 + 4) / 2 = 4, std 2
        assert_eq!(result.middle[2], Some(4.0));
        assert_eq!(result.upper[2], Some(8.0));
        assert_eq!(result.lower[2], Some(0.0));
    }

    #[test]
    fn test_bollinger_flat_series_collapses() {
        let result = BollingerBands::default().calculate(&flat(30, 100.0, 1.0));
        assert_eq!(result.upper[29], Some(100.0));
        assert_eq!(result.lower[29], Some(100.0));
    }

    #[test]
    fn test_bollinger_single_bar_period_has_no_bands() {
        let result = BollingerBands::new(1, 2.0).calculate(&choppy(5));
        assert!(result.upper.iter().all(Option::is_none));
        assert_eq!(warmup_len(&result.middle), 0);
    }
}
