//! Exponential Moving Average (EMA) indicator.

use super::Indicator;
use crate::services::signals::math::{exponential_moving_average, Series};
use crate::types::PriceSeries;

/// EMA (Exponential Moving Average) of closing prices.
///
/// Like SMA but gives more weight to recent prices. The 50/200 pair drives
/// the golden/death cross reading.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Ema {
    type Output = Series;

    fn name(&self) -> &'static str {
        match self.period {
            20 => "EMA (20)",
            50 => "EMA (50)",
            200 => "EMA (200)",
            _ => "EMA",
        }
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> Series {
        exponential_moving_average(&prices.closes, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_support::{downtrend, uptrend};
    use crate::services::signals::math::{latest, warmup_len};

    #[test]
    fn test_ema_id_and_name() {
        assert_eq!(Ema::new(50).name(), "EMA (50)");
        assert_eq!(Ema::new(200).name(), "EMA (200)");
        assert_eq!(Ema::new(7).name(), "EMA");
    }

    #[test]
    fn test_ema_first_value_is_seed_average() {
        let prices = uptrend(60);
        let result = Ema::new(20).calculate(&prices);
        let seed = prices.closes[..20].iter().sum::<f64>() / 20.0;
        assert_eq!(result[19], Some(seed));
        assert_eq!(warmup_len(&result), 19);
    }

    #[test]
    fn test_ema_fast_above_slow_in_uptrend() {
        let prices = uptrend(250);
        let fast = latest(&Ema::new(50).calculate(&prices)).unwrap();
        let slow = latest(&Ema::new(200).calculate(&prices)).unwrap();
        assert!(fast > slow);
    }

    #[test]
    fn test_ema_fast_below_slow_in_downtrend() {
        let prices = downtrend(120);
        let fast = latest(&Ema::new(12).calculate(&prices)).unwrap();
        let slow = latest(&Ema::new(26).calculate(&prices)).unwrap();
        assert!(fast < slow);
    }
}
