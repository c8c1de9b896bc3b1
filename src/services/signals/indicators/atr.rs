//! Average True Range (ATR) indicator.

use super::Indicator;
use crate::services::signals::math::{moving_average, Series};
use crate::types::PriceSeries;

/// ATR (Average True Range) indicator.
///
/// Measures volatility as the SMA of the true range. It carries no
/// direction and is reported for stop sizing only.
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// True range per bar.
///
/// The first bar has no previous close, so its range is just high - low.
pub fn true_range(prices: &PriceSeries) -> Vec<f64> {
    let PriceSeries {
        closes,
        highs,
        lows,
        ..
    } = prices;

    (0..closes.len())
        .map(|i| {
            let hl = highs[i] - lows[i];
            if i == 0 {
                return hl;
            }
            let hc = (highs[i] - closes[i - 1]).abs();
            let lc = (lows[i] - closes[i - 1]).abs();
            hl.max(hc).max(lc)
        })
        .collect()
}

impl Indicator for Atr {
    type Output = Series;

    fn name(&self) -> &'static str {
        "ATR (14)"
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> Series {
        moving_average(&true_range(prices), self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_support::{choppy, flat, uptrend};
    use crate::services::signals::math::{latest, warmup_len};

    #[test]
    fn test_true_range_uses_previous_close() {
        let prices = PriceSeries {
            closes: vec![10.0, 12.0, 9.0],
            highs: vec![11.0, 15.0, 10.0],
            lows: vec![9.0, 11.0, 8.0],
            volumes: vec![0.0; 3],
        };
        // bar 1: max(4, |15-10|=5, |11-10|=1) = 5; bar 2: max(2, |10-12|=2, |8-12|=4) = 4
        assert_eq!(true_range(&prices), vec![2.0, 5.0, 4.0]);
    }

    #[test]
    fn test_atr_length_and_warmup() {
        let atr = Atr::default();
        let result = atr.calculate(&choppy(40));
        assert_eq!(result.len(), 40);
        assert_eq!(warmup_len(&result), 13);
    }

    #[test]
    fn test_atr_constant_range_uptrend() {
        // high - low is 3 every bar and gaps stay inside it
        let value = latest(&Atr::default().calculate(&uptrend(30))).unwrap();
        assert!((value - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_atr_flat_is_zero() {
        let value = latest(&Atr::new(5).calculate(&flat(10, 50.0, 1.0))).unwrap();
        assert_eq!(value, 0.0);
    }
}
